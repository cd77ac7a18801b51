//! Benchmark parameter types.
//!
//! Parameters render compactly so Criterion can use them as benchmark IDs.

use std::fmt;

use graphwright_core::Directedness;

/// Shape of a generated benchmark graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Density as a percentage of the complete graph's density.
    pub fill_percent: u32,
    /// Whether edges are arcs or symmetric links.
    pub directedness: Directedness,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directedness.is_directed() {
            "directed"
        } else {
            "undirected"
        };
        write!(f, "n={},fill={}%,{kind}", self.node_count, self.fill_percent)
    }
}
