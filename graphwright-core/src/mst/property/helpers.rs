//! Connectivity helpers shared by the MST properties.
//!
//! Computed by breadth-first search so they stay independent of the
//! union-find under test.

use std::collections::VecDeque;

use crate::graph::{Graph, NodeId};

/// Labels every node with the index of its weakly connected component.
/// Components are numbered in order of their smallest node.
pub(super) fn component_labels(graph: &Graph) -> Vec<usize> {
    let node_count = graph.node_count();
    let mut links: Vec<Vec<NodeId>> = vec![Vec::new(); node_count];
    for edge in graph.arcs() {
        links[edge.source].push(edge.target);
        links[edge.target].push(edge.source);
    }

    let mut labels = vec![usize::MAX; node_count];
    let mut next_label = 0;
    for seed in 0..node_count {
        if labels[seed] != usize::MAX {
            continue;
        }
        labels[seed] = next_label;
        let mut queue = VecDeque::from([seed]);
        while let Some(node) = queue.pop_front() {
            for &next in &links[node] {
                if labels[next] == usize::MAX {
                    labels[next] = next_label;
                    queue.push_back(next);
                }
            }
        }
        next_label += 1;
    }
    labels
}

/// Number of weakly connected components.
pub(super) fn count_components(graph: &Graph) -> usize {
    component_labels(graph)
        .into_iter()
        .max()
        .map_or(0, |label| label + 1)
}

/// Membership mask of the component containing `start`.
pub(super) fn component_of(graph: &Graph, start: NodeId) -> Vec<bool> {
    let labels = component_labels(graph);
    let target = labels[start];
    labels.into_iter().map(|label| label == target).collect()
}
