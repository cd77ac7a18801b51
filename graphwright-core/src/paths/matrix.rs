//! Dense all-pairs distance storage.

use std::fmt;

use super::Distance;
use crate::graph::{Graph, NodeId};

/// Row-major `N×N` matrix of [`Distance`] values.
///
/// `get(i, j)` is the length of the best known path from `i` to `j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Seeds a matrix from direct edges: `0` on the diagonal, the edge weight
    /// where `i -> j` exists and unreachable elsewhere.
    pub(crate) fn from_graph(graph: &Graph) -> Self {
        let size = graph.node_count();
        let mut cells = vec![Distance::Unreachable; size.saturating_mul(size)];
        for node in 0..size {
            cells[node * size + node] = Distance::ZERO;
        }
        for edge in graph.arcs() {
            cells[edge.source * size + edge.target] = Distance::Finite(u64::from(edge.weight));
        }
        Self { size, cells }
    }

    /// Number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub const fn size(&self) -> usize { self.size }

    /// Entry for the pair `(source, target)`, or `None` when either index is
    /// out of range.
    #[must_use]
    pub fn get(&self, source: NodeId, target: NodeId) -> Option<Distance> {
        if source >= self.size || target >= self.size {
            return None;
        }
        self.cells.get(source * self.size + target).copied()
    }

    /// Row of distances leaving `source`.
    #[must_use]
    pub fn row(&self, source: NodeId) -> Option<&[Distance]> {
        if source >= self.size {
            return None;
        }
        let start = source * self.size;
        self.cells.get(start..start + self.size)
    }

    /// Iterates over the rows in node order.
    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Returns `true` when a finite entry exists for `(source, target)`.
    #[must_use]
    pub fn is_reachable(&self, source: NodeId, target: NodeId) -> bool {
        self.get(source, target).is_some_and(Distance::is_finite)
    }

    /// Returns `true` when `get(i, j) == get(j, i)` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|row| {
            (row + 1..self.size).all(|column| self.get(row, column) == self.get(column, row))
        })
    }

    /// Number of ordered pairs `i != j` with a finite entry.
    #[must_use]
    pub fn reachable_pairs(&self) -> usize {
        self.finite_off_diagonal().count()
    }

    /// Largest finite entry between distinct nodes, or `None` when no such
    /// pair is reachable.
    #[must_use]
    pub fn diameter(&self) -> Option<u64> {
        self.finite_off_diagonal().max()
    }

    fn finite_off_diagonal(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(move |&(column, _)| column != row)
                .filter_map(|(_, cell)| cell.value())
        })
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Distance] {
        &mut self.cells
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for row in self.rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
