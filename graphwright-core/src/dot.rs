//! Graphviz DOT serialisation.
//!
//! Output is deterministic: edges are emitted in ascending source order and,
//! within a source, in ascending neighbour order.

use std::collections::HashSet;
use std::fmt;

use crate::graph::{Directedness, Edge, Graph};

impl Graph {
    /// Renders the graph as DOT using its own directedness.
    ///
    /// # Examples
    /// ```
    /// use graphwright_core::{Directedness, Graph};
    ///
    /// let graph = Graph::from_edges(3, Directedness::Undirected, &[(0, 1, 4), (1, 2, 1)])
    ///     .expect("edges are valid");
    /// assert_eq!(
    ///     graph.to_dot(),
    ///     "strict graph G {\n    0 -- 1 [label=\"4\"];\n    1 -- 2 [label=\"1\"];\n}\n",
    /// );
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        to_dot(self, self.directedness())
    }
}

/// Renders `graph` as a `strict graph` or `strict digraph` block.
///
/// Directed output lists every stored arc with `->`. Undirected output lists
/// each unordered pair once with `--`, taking the first arc of the pair in
/// enumeration order, so an undirected graph prints every edge with
/// `source < target`. Isolated nodes are not declared.
#[must_use]
pub fn to_dot(graph: &Graph, directedness: Directedness) -> String {
    Dot {
        graph,
        directedness,
    }
    .to_string()
}

struct Dot<'a> {
    graph: &'a Graph,
    directedness: Directedness,
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (keyword, arrow) = if self.directedness.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(f, "strict {keyword} G {{")?;
        for edge in statements(self.graph, self.directedness) {
            writeln!(
                f,
                "    {} {arrow} {} [label=\"{}\"];",
                edge.source, edge.target, edge.weight
            )?;
        }
        writeln!(f, "}}")
    }
}

fn statements(graph: &Graph, directedness: Directedness) -> Vec<Edge> {
    if directedness.is_directed() {
        return graph.arcs().collect();
    }
    let mut seen = HashSet::new();
    graph
        .arcs()
        .filter(|edge| seen.insert((edge.source.min(edge.target), edge.source.max(edge.target))))
        .collect()
}
