//! Sequential Kruskal oracle for MST property verification.
//!
//! Components are tracked as explicit member lists that are copied into
//! every member's slot on union. This is quadratic, but simple enough to
//! trust, and any union-find variant must accept exactly the same edges.

use std::collections::BTreeSet;

use crate::graph::{Edge, Graph};

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleMstResult {
    /// Accepted edges in canonical `(min, max, weight)` form.
    pub accepted: BTreeSet<(usize, usize, u32)>,
    /// Total weight of the accepted edges.
    pub total_weight: u64,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with membership-set partitions.
pub(super) fn oracle_kruskal(graph: &Graph) -> OracleMstResult {
    let node_count = graph.node_count();
    let mut members: Vec<Vec<usize>> = (0..node_count).map(|node| vec![node]).collect();

    let mut emitted = BTreeSet::new();
    let mut candidates: Vec<Edge> = Vec::new();
    for edge in graph.arcs() {
        let key = (edge.source.min(edge.target), edge.source.max(edge.target));
        if emitted.insert(key) {
            candidates.push(edge);
        }
    }
    candidates.sort_by_key(|edge| edge.weight);

    let mut accepted = BTreeSet::new();
    let mut total_weight = 0_u64;
    for edge in candidates {
        if members[edge.source].contains(&edge.target) {
            continue;
        }
        let mut merged = members[edge.source].clone();
        merged.extend(members[edge.target].iter().copied());
        for &member in &merged {
            members[member].clone_from(&merged);
        }
        accepted.insert((
            edge.source.min(edge.target),
            edge.source.max(edge.target),
            edge.weight,
        ));
        total_weight += u64::from(edge.weight);
    }

    OracleMstResult {
        component_count: node_count - accepted.len(),
        accepted,
        total_weight,
    }
}
