//! All-pairs shortest paths and reachability.

use tracing::{Span, debug, field, instrument};

use super::DistanceMatrix;
use crate::graph::Graph;

/// Computes all-pairs shortest distances with the Floyd–Warshall recurrence.
///
/// The matrix starts from direct edges and is relaxed through every
/// intermediate node `k` in ascending order:
/// `d[i][j] = min(d[i][j], d[i][k] + d[k][j])`. Unreachable entries absorb
/// additions, so no overflow is possible. Runs in `O(N^3)` time and `O(N^2)`
/// space.
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, Distance, Graph, floyd_warshall};
///
/// let graph = Graph::from_edges(3, Directedness::Undirected, &[(0, 1, 4), (1, 2, 1), (0, 2, 10)])
///     .expect("edges are valid");
/// let matrix = floyd_warshall(&graph);
/// assert_eq!(matrix.get(0, 2), Some(Distance::Finite(5)));
/// assert!(matrix.is_symmetric());
/// ```
#[must_use]
#[instrument(
    name = "paths.floyd_warshall",
    skip(graph),
    fields(nodes = graph.node_count(), reachable_pairs = field::Empty),
)]
pub fn floyd_warshall(graph: &Graph) -> DistanceMatrix {
    let mut matrix = DistanceMatrix::from_graph(graph);
    relax_all(&mut matrix);
    Span::current().record("reachable_pairs", matrix.reachable_pairs());
    debug!(diameter = ?matrix.diameter(), "floyd-warshall completed");
    matrix
}

/// Computes reachability by running [`floyd_warshall`] over a copy of the
/// graph whose weights are all `1`.
///
/// A finite entry `(i, j)` means `j` is reachable from `i`; its value is the
/// minimum hop count.
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, Distance, Graph, transitive_closure};
///
/// let graph = Graph::from_edges(3, Directedness::Directed, &[(0, 1, 9), (1, 2, 9)])
///     .expect("edges are valid");
/// let closure = transitive_closure(&graph);
/// assert_eq!(closure.get(0, 2), Some(Distance::Finite(2)));
/// assert!(!closure.is_reachable(2, 0));
/// ```
#[must_use]
#[instrument(name = "paths.transitive_closure", skip(graph), fields(nodes = graph.node_count()))]
pub fn transitive_closure(graph: &Graph) -> DistanceMatrix {
    floyd_warshall(&graph.with_unit_weights())
}

fn relax_all(matrix: &mut DistanceMatrix) {
    let size = matrix.size();
    let cells = matrix.cells_mut();
    for via in 0..size {
        for source in 0..size {
            let to_via = cells[source * size + via];
            if !to_via.is_finite() {
                continue;
            }
            for target in 0..size {
                let candidate = to_via.saturating_add(cells[via * size + target]);
                let current = &mut cells[source * size + target];
                if candidate < *current {
                    *current = candidate;
                }
            }
        }
    }
}
