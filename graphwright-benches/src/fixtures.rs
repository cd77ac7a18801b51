//! Seeded graph fixtures for benchmarks.

use graphwright_core::{Graph, GraphGeneratorBuilder, NodeId, max_density};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use crate::error::BenchSetupError;
use crate::params::GraphBenchParams;

/// Generates the graph described by `params` from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for an empty graph and
/// [`BenchSetupError::Generator`] when generation fails.
pub fn seeded_graph(params: &GraphBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    if params.node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }
    let density = fill_density(params);
    let graph = GraphGeneratorBuilder::new()
        .with_seed(seed)
        .build()?
        .generate(params.node_count, density, params.directedness)?;
    Ok(graph)
}

/// Picks up to `count` distinct nodes of `graph` to use as search sources.
#[must_use]
pub fn sample_sources(graph: &Graph, count: usize, seed: u64) -> Vec<NodeId> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let amount = count.min(graph.node_count());
    let mut sources = index::sample(&mut rng, graph.node_count(), amount).into_vec();
    sources.sort_unstable();
    sources
}

#[expect(
    clippy::float_arithmetic,
    reason = "densities are edges-per-node ratios"
)]
fn fill_density(params: &GraphBenchParams) -> f64 {
    max_density(params.node_count, params.directedness) * f64::from(params.fill_percent) / 100.0
}
