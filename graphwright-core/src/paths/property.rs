//! Property-based tests for the shortest-path algorithms.
//!
//! Graphs are drawn as arbitrary simple edge lists so disconnected and
//! directed inputs are covered alongside generator output. Reachability is
//! checked against a breadth-first search oracle.

use std::collections::VecDeque;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::graph::{Directedness, Graph, NodeId, Weight};
use crate::test_utils::suite_proptest_config;

use super::{Distance, dijkstra, floyd_warshall, transitive_closure};

fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1_usize..=10, any::<bool>())
        .prop_flat_map(|(node_count, directed)| {
            let edge = (0..node_count, 0..node_count, 0_u32..=20);
            (
                Just(node_count),
                Just(directed),
                prop::collection::vec(edge, 0..=node_count * 3),
            )
        })
        .prop_map(|(node_count, directed, edges)| {
            build_simple(node_count, directed, &edges)
        })
}

/// Builds a simple graph, skipping loops and pairs that already carry an edge.
fn build_simple(node_count: usize, directed: bool, edges: &[(NodeId, NodeId, Weight)]) -> Graph {
    let directedness = if directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    };
    let mut graph = Graph::new(node_count, directedness);
    for &(source, target, weight) in edges {
        if source != target && !graph.has_edge(source, target) {
            graph
                .add_edge(source, target, weight)
                .expect("loops and duplicates were filtered");
        }
    }
    graph
}

fn bfs_reachable(graph: &Graph, source: NodeId) -> Vec<bool> {
    let mut seen = vec![false; graph.node_count()];
    seen[source] = true;
    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        for (next, _) in graph.neighbors(node) {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}

fn run_dijkstra_relaxation_property(graph: &Graph) -> TestCaseResult {
    for source in 0..graph.node_count() {
        let paths = dijkstra(graph, source)
            .map_err(|err| TestCaseError::fail(format!("dijkstra failed: {err}")))?;
        for edge in graph.arcs() {
            let bound = paths
                .distance(edge.source)
                .saturating_add(Distance::Finite(u64::from(edge.weight)));
            prop_assert!(
                paths.distance(edge.target) <= bound,
                "edge {edge:?} violates relaxation from source {source}"
            );
        }
    }
    Ok(())
}

fn run_path_reconstruction_property(graph: &Graph) -> TestCaseResult {
    let paths = dijkstra(graph, 0)
        .map_err(|err| TestCaseError::fail(format!("dijkstra failed: {err}")))?;
    let reachable = bfs_reachable(graph, 0);

    for (node, &expected) in reachable.iter().enumerate() {
        let Some(path) = paths.path_to(node) else {
            prop_assert!(!expected, "node {node} is reachable but has no path");
            continue;
        };
        prop_assert!(expected, "node {node} is unreachable but has a path");
        prop_assert_eq!(path.first().copied(), Some(0));
        prop_assert_eq!(path.last().copied(), Some(node));

        let mut length = 0_u64;
        for hop in path.windows(2) {
            let weight = graph
                .weight(hop[0], hop[1])
                .ok_or_else(|| TestCaseError::fail(format!("hop {hop:?} is not an edge")))?;
            length += u64::from(weight);
        }
        prop_assert_eq!(Distance::Finite(length), paths.distance(node));
    }
    Ok(())
}

fn run_floyd_warshall_matches_dijkstra_property(graph: &Graph) -> TestCaseResult {
    let matrix = floyd_warshall(graph);
    prop_assert_eq!(matrix.size(), graph.node_count());
    for source in 0..graph.node_count() {
        let paths = dijkstra(graph, source)
            .map_err(|err| TestCaseError::fail(format!("dijkstra failed: {err}")))?;
        prop_assert_eq!(matrix.row(source), Some(paths.distances()));
    }
    Ok(())
}

fn run_matrix_shape_property(graph: &Graph) -> TestCaseResult {
    let matrix = floyd_warshall(graph);
    let size = matrix.size();
    for via in 0..size {
        for source in 0..size {
            for target in 0..size {
                let direct = matrix.get(source, target);
                let detour = matrix
                    .get(source, via)
                    .zip(matrix.get(via, target))
                    .map(|(left, right)| left.saturating_add(right));
                prop_assert!(
                    direct <= detour,
                    "triangle inequality fails for ({source}, {via}, {target})"
                );
            }
        }
    }
    if !graph.is_directed() {
        prop_assert!(matrix.is_symmetric());
    }
    Ok(())
}

fn run_closure_matches_bfs_property(graph: &Graph) -> TestCaseResult {
    let closure = transitive_closure(graph);
    for source in 0..graph.node_count() {
        for (target, &reachable) in bfs_reachable(graph, source).iter().enumerate() {
            prop_assert_eq!(
                closure.is_reachable(source, target),
                reachable,
                "closure disagrees with BFS for ({}, {})",
                source,
                target
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(96))]

    #[test]
    fn dijkstra_satisfies_relaxation(graph in graph_strategy()) {
        run_dijkstra_relaxation_property(&graph)?;
    }

    #[test]
    fn dijkstra_paths_sum_to_distances(graph in graph_strategy()) {
        run_path_reconstruction_property(&graph)?;
    }

    #[test]
    fn floyd_warshall_rows_match_dijkstra(graph in graph_strategy()) {
        run_floyd_warshall_matches_dijkstra_property(&graph)?;
    }

    #[test]
    fn floyd_warshall_is_converged(graph in graph_strategy()) {
        run_matrix_shape_property(&graph)?;
    }

    #[test]
    fn closure_matches_breadth_first_search(graph in graph_strategy()) {
        run_closure_matches_bfs_property(&graph)?;
    }
}

#[test]
fn bfs_oracle_respects_direction() {
    let graph = build_simple(3, true, &[(0, 1, 1), (2, 1, 1)]);
    assert_eq!(bfs_reachable(&graph, 0), vec![true, true, false]);
    assert_eq!(bfs_reachable(&graph, 1), vec![false, true, false]);
}

#[test]
fn simple_builder_drops_loops_and_duplicates() {
    let graph = build_simple(3, false, &[(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 2, 4)]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.weight(1, 0), Some(2));
}
