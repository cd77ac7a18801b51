//! Minimum spanning tree (MST) construction.
//!
//! Provides Kruskal's algorithm over a union-find and Prim's algorithm over a
//! lazy-deletion binary heap. Both run over the undirected view of their
//! input: a directed graph is read with every arc as an undirected edge, and
//! antiparallel arcs collapse to the lighter of the two. Both return an
//! undirected [`SpanningForest`]. A disconnected input yields a forest
//! with one tree per reachable component; callers should check
//! [`SpanningForest::is_tree`] before treating the result as a spanning tree.

mod union_find;

use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use tracing::{Span, debug, field, instrument};

use crate::{
    error::Result,
    graph::{Directedness, Edge, Graph, NodeId, Weight},
};

use self::union_find::DisjointSet;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest {
    graph: Graph,
    component_count: usize,
}

impl SpanningForest {
    fn from_graph(graph: Graph) -> Self {
        let component_count = graph.node_count().saturating_sub(graph.edge_count());
        Self {
            graph,
            component_count,
        }
    }

    /// Returns the forest as an undirected graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Consumes the forest, returning its undirected graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Number of accepted (undirected) edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.graph.total_weight()
    }

    /// Number of trees in the forest, counting isolated nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Every undirected edge is considered exactly once. For directed input the
/// lighter of `(u, v)` and `(v, u)` is kept, the earlier arc winning a tie.
/// Candidates are stably sorted by weight, so equal weights are tried in
/// [`Graph::arcs`] order.
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, Graph, kruskal};
///
/// let graph = Graph::from_edges(3, Directedness::Undirected, &[(0, 1, 4), (1, 2, 1), (0, 2, 10)])
///     .expect("edges are valid");
/// let forest = kruskal(&graph);
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 5);
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip(graph),
    fields(nodes = graph.node_count(), accepted = field::Empty),
)]
pub fn kruskal(graph: &Graph) -> SpanningForest {
    let node_count = graph.node_count();
    let mut components = DisjointSet::new(node_count);
    let mut tree = Graph::new(node_count, Directedness::Undirected);

    for edge in candidate_edges(&undirected_view(graph)) {
        if components.union(edge.source, edge.target) {
            link(&mut tree, edge.source, edge.target, edge.weight);
            if components.components() == 1 {
                break;
            }
        }
    }

    let forest = SpanningForest::from_graph(tree);
    Span::current().record("accepted", forest.edge_count());
    debug!(
        components = forest.component_count(),
        weight = forest.total_weight(),
        "kruskal completed"
    );
    forest
}

/// Computes a minimum spanning tree of the component containing `start`
/// using Prim's algorithm.
///
/// The frontier is a min-heap with lazy deletion: stale entries for nodes
/// already in the tree are skipped when popped. The search ends when the heap
/// is empty, so nodes unreachable from `start` stay isolated in the result
/// and [`SpanningForest::is_tree`] reports `false`. Equal keys pop in
/// ascending node order. Arcs are followed in both directions, so on directed
/// input `start` reaches its whole weakly connected component.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfRange`] when `start` is not a node.
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, Graph, prim};
///
/// let graph = Graph::from_edges(3, Directedness::Undirected, &[(0, 1, 4), (1, 2, 1), (0, 2, 10)])
///     .expect("edges are valid");
/// let forest = prim(&graph, 2).expect("start node exists");
/// assert_eq!(forest.total_weight(), 5);
/// assert_eq!(forest.graph().weight(1, 0), Some(4));
/// ```
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), accepted = field::Empty),
)]
pub fn prim(graph: &Graph, start: NodeId) -> Result<SpanningForest> {
    graph.check_node(start)?;

    let view = undirected_view(graph);
    let node_count = view.node_count();
    let mut key: Vec<Option<Weight>> = vec![None; node_count];
    let mut parent: Vec<Option<NodeId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut heap = BinaryHeap::new();
    let mut tree = Graph::new(node_count, Directedness::Undirected);

    key[start] = Some(0);
    heap.push(Reverse((0, start)));

    while let Some(Reverse((weight, node))) = heap.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        if let Some(through) = parent[node] {
            link(&mut tree, through, node, weight);
        }

        for (next, edge_weight) in view.neighbors(node) {
            if !visited[next] && key[next].is_none_or(|current| edge_weight < current) {
                key[next] = Some(edge_weight);
                parent[next] = Some(node);
                heap.push(Reverse((edge_weight, next)));
            }
        }
    }

    let forest = SpanningForest::from_graph(tree);
    Span::current().record("accepted", forest.edge_count());
    debug!(
        components = forest.component_count(),
        weight = forest.total_weight(),
        "prim completed"
    );
    Ok(forest)
}

/// Borrows undirected input as is. Directed input is folded into an
/// undirected graph that keeps the lighter arc of each antiparallel pair.
fn undirected_view(graph: &Graph) -> Cow<'_, Graph> {
    if !graph.is_directed() {
        return Cow::Borrowed(graph);
    }
    let mut view = Graph::new(graph.node_count(), Directedness::Undirected);
    for edge in graph.arcs() {
        if view
            .weight(edge.source, edge.target)
            .is_none_or(|current| edge.weight < current)
        {
            link(&mut view, edge.source, edge.target, edge.weight);
        }
    }
    Cow::Owned(view)
}

/// Collects each undirected edge once, deduplicated by unordered pair, then
/// stably sorts by weight.
fn candidate_edges(graph: &Graph) -> Vec<Edge> {
    let mut seen = HashSet::new();
    let mut edges: Vec<Edge> = graph
        .arcs()
        .filter(|edge| seen.insert(canonical(edge.source, edge.target)))
        .collect();
    edges.sort_by_key(|edge| edge.weight);
    edges
}

const fn canonical(left: NodeId, right: NodeId) -> (NodeId, NodeId) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}

fn link(tree: &mut Graph, left: NodeId, right: NodeId, weight: Weight) {
    tree.insert_arc(left, right, weight);
    tree.insert_arc(right, left, weight);
}

#[cfg(test)]
mod property;
