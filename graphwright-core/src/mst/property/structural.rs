//! Property 2: structural invariant verification.
//!
//! For any forest produced by Kruskal or Prim, verifies:
//!
//! - **Acyclicity**: no cycles (union-find based detection).
//! - **Connectivity**: connected input produces a spanning tree.
//! - **Edge count**: `V - C` edges for `C` components.
//! - **Provenance**: every forest edge exists in the input with the same
//!   weight, and is stored in both directions.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::Graph;
use crate::mst::{SpanningForest, kruskal, prim};

use super::helpers::count_components;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let by_prim = prim(graph, 0).map_err(|e| TestCaseError::fail(format!("prim failed: {e}")))?;

    for (name, forest) in [("kruskal", kruskal(graph)), ("prim", by_prim)] {
        validate_provenance(name, graph, &forest)?;
        validate_acyclicity(name, &forest)?;
        validate_edge_count(name, graph.node_count(), &forest)?;
    }
    validate_connectivity(fixture)?;
    Ok(())
}

fn validate_provenance(name: &str, input: &Graph, forest: &SpanningForest) -> TestCaseResult {
    for edge in forest.graph().arcs() {
        if input.weight(edge.source, edge.target) != Some(edge.weight) {
            return Err(TestCaseError::fail(format!(
                "{name}: edge ({}, {}, {}) is not in the input",
                edge.source, edge.target, edge.weight,
            )));
        }
        if forest.graph().weight(edge.target, edge.source) != Some(edge.weight) {
            return Err(TestCaseError::fail(format!(
                "{name}: edge ({}, {}) is missing its mirror",
                edge.source, edge.target,
            )));
        }
    }
    Ok(())
}

/// An undirected graph is a forest exactly when `edges == nodes - components`;
/// every extra edge closes a cycle.
fn validate_acyclicity(name: &str, forest: &SpanningForest) -> TestCaseResult {
    let tree = forest.graph();
    let components = count_components(tree);
    let limit = tree.node_count().saturating_sub(components);
    if tree.edge_count() > limit {
        return Err(TestCaseError::fail(format!(
            "{name}: {} edges over {components} components closes {} cycle(s)",
            tree.edge_count(),
            tree.edge_count() - limit,
        )));
    }
    Ok(())
}

fn validate_edge_count(name: &str, node_count: usize, forest: &SpanningForest) -> TestCaseResult {
    let expected = node_count.saturating_sub(forest.component_count());
    if forest.edge_count() != expected {
        return Err(TestCaseError::fail(format!(
            "{name}: edge count {}, expected n - c = {expected}",
            forest.edge_count(),
        )));
    }
    Ok(())
}

fn validate_connectivity(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let input_components = count_components(graph);
    let forest = kruskal(graph);
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "input has {input_components} components but kruskal produced {} (distribution={:?})",
            forest.component_count(),
            fixture.distribution,
        )));
    }
    if input_components == 1 {
        let by_prim =
            prim(graph, 0).map_err(|e| TestCaseError::fail(format!("prim failed: {e}")))?;
        if !by_prim.is_tree() {
            return Err(TestCaseError::fail(format!(
                "input is connected but prim produced {} components",
                by_prim.component_count(),
            )));
        }
    }
    Ok(())
}
