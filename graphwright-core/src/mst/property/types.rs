//! Type definitions for MST property-based tests.

use crate::graph::Graph;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight, so the MST is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Backbone plus roughly one extra edge per node.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
}

/// Fixture for MST property tests.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Undirected input graph.
    pub graph: Graph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
