//! Single-source shortest paths over non-negative weights.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{Span, debug, field, instrument};

use super::Distance;
use crate::{
    error::Result,
    graph::{Directedness, Graph, NodeId, Weight},
};

/// Distances and predecessors computed by [`dijkstra`] from one source.
///
/// Nodes with no path from the source keep [`Distance::Unreachable`] and no
/// predecessor. Following predecessors from any reachable node always ends at
/// the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    source: NodeId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<(NodeId, Weight)>>,
}

impl ShortestPaths {
    /// Node the search started from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Number of nodes covered by the tables.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance from the source to `node`. Unknown nodes are
    /// unreachable.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Distance {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Node preceding `node` on its shortest path, if any. The source and
    /// unreachable nodes have none.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors
            .get(node)
            .copied()
            .flatten()
            .map(|(previous, _)| previous)
    }

    /// Distance table indexed by node.
    #[must_use]
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Predecessor table indexed by node.
    pub fn predecessors(&self) -> impl Iterator<Item = Option<NodeId>> + '_ {
        self.predecessors
            .iter()
            .map(|entry| entry.map(|(previous, _)| previous))
    }

    /// Number of nodes with a finite distance, including the source.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|distance| distance.is_finite()).count()
    }

    /// Reconstructs the shortest path `source, ..., node`, or `None` when
    /// `node` is unreachable.
    ///
    /// # Examples
    /// ```
    /// use graphwright_core::{Directedness, Graph, dijkstra};
    ///
    /// let graph = Graph::from_edges(3, Directedness::Undirected, &[(0, 1, 4), (1, 2, 1), (0, 2, 10)])
    ///     .expect("edges are valid");
    /// let paths = dijkstra(&graph, 0).expect("source exists");
    /// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    /// assert_eq!(paths.path_to(0), Some(vec![0]));
    /// ```
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(node).is_finite() {
            return None;
        }

        let mut path = vec![node];
        let mut current = node;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Shortest-path tree as a directed graph with one arc
    /// `predecessor -> node` per reachable non-source node, carrying the
    /// weight of the edge it was reached through.
    #[must_use]
    pub fn tree(&self) -> Graph {
        let mut tree = Graph::new(self.node_count(), Directedness::Directed);
        for (node, entry) in self.predecessors.iter().enumerate() {
            if let Some((previous, weight)) = *entry {
                tree.insert_arc(previous, node, weight);
            }
        }
        tree
    }
}

/// Computes shortest distances from `source` with Dijkstra's algorithm.
///
/// The frontier is a min-heap keyed by tentative distance with lazy deletion:
/// entries for already finalised nodes are skipped when popped, and a
/// finalised distance never changes. The search ends when the heap is empty,
/// so nodes without a path from `source` stay unreachable. Undirected edges
/// are followed in both directions.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfRange`] when `source` is not a node.
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, Distance, Graph, dijkstra};
///
/// let graph = Graph::from_edges(3, Directedness::Undirected, &[(0, 1, 4), (1, 2, 1), (0, 2, 10)])
///     .expect("edges are valid");
/// let paths = dijkstra(&graph, 0).expect("source exists");
/// assert_eq!(paths.distance(2), Distance::Finite(5));
/// assert_eq!(paths.predecessor(2), Some(1));
/// assert_eq!(paths.predecessor(0), None);
/// ```
#[instrument(
    name = "paths.dijkstra",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), reachable = field::Empty),
)]
pub fn dijkstra(graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
    graph.check_node(source)?;

    let node_count = graph.node_count();
    let mut distances = vec![Distance::Unreachable; node_count];
    let mut predecessors: Vec<Option<(NodeId, Weight)>> = vec![None; node_count];
    let mut finalised = vec![false; node_count];
    let mut heap = BinaryHeap::new();

    distances[source] = Distance::ZERO;
    heap.push(Reverse((0_u64, source)));

    while let Some(Reverse((distance, node))) = heap.pop() {
        if finalised[node] {
            continue;
        }
        finalised[node] = true;

        for (next, weight) in graph.neighbors(node) {
            if finalised[next] {
                continue;
            }
            let candidate = distance.saturating_add(u64::from(weight));
            if Distance::Finite(candidate) < distances[next] {
                distances[next] = Distance::Finite(candidate);
                predecessors[next] = Some((node, weight));
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    let paths = ShortestPaths {
        source,
        distances,
        predecessors,
    };
    Span::current().record("reachable", paths.reachable_count());
    debug!(source, "dijkstra completed");
    Ok(paths)
}
