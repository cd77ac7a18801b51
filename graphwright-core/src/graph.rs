//! Weighted graph data model.
//!
//! A [`Graph`] owns one sparse neighbour map per node. Maps are ordered by
//! neighbour index so every enumeration the engine performs (edge discovery,
//! serialisation) is reproducible for a given graph.

use std::collections::{BTreeMap, VecDeque};

use crate::error::{GraphError, Result};

/// Index of a node within a [`Graph`], in `0..node_count`.
pub type NodeId = usize;

/// Edge weight. Generated graphs draw weights from `[1, 100]`.
pub type Weight = u32;

/// Whether edges are one-way arcs or symmetric links.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Directedness {
    /// `u -> v` does not imply `v -> u`.
    Directed,
    /// Every edge is stored in both directions with the same weight.
    #[default]
    Undirected,
}

impl Directedness {
    /// Returns `true` for [`Directedness::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// A weighted edge viewed from its source node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    /// Node the edge leaves.
    pub source: NodeId,
    /// Node the edge enters.
    pub target: NodeId,
    /// Weight carried by the edge.
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge view.
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Adjacency-map representation of a weighted graph.
///
/// Invariants upheld by every constructor and by [`Graph::add_edge`]:
///
/// - no self-loops;
/// - at most one edge per ordered node pair;
/// - for undirected graphs `weight(u, v) == weight(v, u)` whenever either
///   exists.
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, Graph};
///
/// let graph = Graph::from_edges(3, Directedness::Undirected, &[(0, 1, 4), (1, 2, 1)])
///     .expect("edges are valid");
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight(1, 0), Some(4));
/// assert!(graph.is_weakly_connected());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<BTreeMap<NodeId, Weight>>,
    directedness: Directedness,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    #[must_use]
    pub fn new(node_count: usize, directedness: Directedness) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); node_count],
            directedness,
        }
    }

    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] raised by [`Graph::add_edge`].
    pub fn from_edges(
        node_count: usize,
        directedness: Directedness,
        edges: &[(NodeId, NodeId, Weight)],
    ) -> Result<Self> {
        let mut graph = Self::new(node_count, directedness);
        for &(source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Directedness the graph was created with.
    #[must_use]
    pub const fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Shorthand for `self.directedness().is_directed()`.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    /// Number of logical edges. An undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Adds an edge, mirroring it when the graph is undirected.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] when either endpoint is not a
    /// node, [`GraphError::SelfLoop`] when `source == target`, and
    /// [`GraphError::DuplicateEdge`] when the pair already has an edge.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: Weight) -> Result<()> {
        self.check_node(source)?;
        self.check_node(target)?;
        if source == target {
            return Err(GraphError::SelfLoop { node: source });
        }
        if self.has_edge(source, target) {
            return Err(GraphError::DuplicateEdge {
                source_node: source,
                target_node: target,
            });
        }

        self.insert_arc(source, target, weight);
        if !self.is_directed() {
            self.insert_arc(target, source, weight);
        }
        Ok(())
    }

    /// Weight of the edge `source -> target`, if present.
    #[must_use]
    pub fn weight(&self, source: NodeId, target: NodeId) -> Option<Weight> {
        self.adjacency
            .get(source)
            .and_then(|neighbours| neighbours.get(&target))
            .copied()
    }

    /// Returns `true` when `source -> target` exists.
    #[must_use]
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.weight(source, target).is_some()
    }

    /// Outgoing `(neighbour, weight)` pairs of `node` in ascending neighbour
    /// order. Unknown nodes have no neighbours.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().map(|(&target, &weight)| (target, weight)))
    }

    /// Every stored arc, ordered by source then neighbour. Undirected edges
    /// appear once per direction.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, neighbours)| {
                neighbours
                    .iter()
                    .map(move |(&target, &weight)| Edge::new(source, target, weight))
            })
    }

    /// Every logical edge, ordered by source then neighbour. Undirected edges
    /// are yielded once, with `source < target`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.is_directed();
        self.arcs()
            .filter(move |edge| directed || edge.source < edge.target)
    }

    /// Sum of the weights of all logical edges.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges().map(|edge| u64::from(edge.weight)).sum()
    }

    /// Copy of the graph with every weight replaced by `1`.
    #[must_use]
    pub fn with_unit_weights(&self) -> Self {
        Self {
            adjacency: self
                .adjacency
                .iter()
                .map(|neighbours| neighbours.keys().map(|&target| (target, 1)).collect())
                .collect(),
            directedness: self.directedness,
        }
    }

    /// Returns `true` when every node is reachable from node `0` once edge
    /// direction is ignored. Graphs with fewer than two nodes are connected.
    #[must_use]
    pub fn is_weakly_connected(&self) -> bool {
        let node_count = self.node_count();
        if node_count < 2 {
            return true;
        }

        let mut undirected: Vec<Vec<NodeId>> = vec![Vec::new(); node_count];
        for edge in self.arcs() {
            if let Some(list) = undirected.get_mut(edge.source) {
                list.push(edge.target);
            }
            if let Some(list) = undirected.get_mut(edge.target) {
                list.push(edge.source);
            }
        }

        let mut seen = vec![false; node_count];
        let mut queue = VecDeque::from([0]);
        if let Some(start) = seen.first_mut() {
            *start = true;
        }
        let mut reached = 1;
        while let Some(node) = queue.pop_front() {
            for &next in undirected.get(node).into_iter().flatten() {
                if let Some(flag) = seen.get_mut(next) {
                    if !*flag {
                        *flag = true;
                        reached += 1;
                        queue.push_back(next);
                    }
                }
            }
        }
        reached == node_count
    }

    /// Dense `N×N` weight matrix with `0` marking "no edge".
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        let node_count = self.node_count();
        self.adjacency
            .iter()
            .map(|neighbours| {
                let mut row = vec![0; node_count];
                for (&target, &weight) in neighbours {
                    if let Some(cell) = row.get_mut(target) {
                        *cell = weight;
                    }
                }
                row
            })
            .collect()
    }

    /// Renders [`Graph::adjacency_matrix`] as space-separated rows, one per
    /// line.
    #[must_use]
    pub fn render_adjacency_matrix(&self) -> String {
        self.adjacency_matrix()
            .iter()
            .map(|row| {
                let mut line: String = row.iter().map(|cell| format!("{cell} ")).collect();
                line.push('\n');
                line
            })
            .collect()
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Inserts `source -> target` without validation. Callers have already
    /// checked bounds, loops and duplicates.
    pub(crate) fn insert_arc(&mut self, source: NodeId, target: NodeId, weight: Weight) {
        if let Some(neighbours) = self.adjacency.get_mut(source) {
            neighbours.insert(target, weight);
        }
    }
}
