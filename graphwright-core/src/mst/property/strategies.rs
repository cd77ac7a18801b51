//! Strategy builders for MST property-based tests.
//!
//! Each generator builds an undirected [`Graph`] from a seeded
//! [`SmallRng`] so failing cases shrink to a reproducible seed.

use std::ops::RangeInclusive;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::generator::GraphGeneratorBuilder;
use crate::graph::{Directedness, Graph};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 4;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 40;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 20;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let graph = match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_with_density(rng, MAX_NODES, 1.0..=2.0),
        WeightDistribution::Dense => generate_with_density(rng, DENSE_MAX_NODES, 6.0..=10.0),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    MstFixture {
        graph,
        distribution,
    }
}

/// Random pairs with a shuffled, collision-free weight for every edge.
fn generate_unique_weights(rng: &mut SmallRng) -> Graph {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edge_probability: f64 = rng.gen_range(0.2..=0.6);
    let pairs: Vec<(usize, usize)> = all_pairs(0, node_count)
        .into_iter()
        .filter(|_| rng.gen_bool(edge_probability))
        .collect();

    let mut weights: Vec<u32> = (1..=u32::try_from(pairs.len()).unwrap_or(u32::MAX)).collect();
    weights.shuffle(rng);

    let mut graph = Graph::new(node_count, Directedness::Undirected);
    for ((source, target), weight) in pairs.into_iter().zip(weights) {
        graph
            .add_edge(source, target, weight)
            .expect("pairs are distinct and canonical");
    }
    graph
}

/// Random pairs drawing from a pool of one to three weights.
fn generate_identical_weights(rng: &mut SmallRng) -> Graph {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edge_probability: f64 = rng.gen_range(0.3..=0.7);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<u32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();

    let mut graph = Graph::new(node_count, Directedness::Undirected);
    for (source, target) in all_pairs(0, node_count) {
        if rng.gen_bool(edge_probability) {
            let weight = pool[rng.gen_range(0..pool.len())];
            graph
                .add_edge(source, target, weight)
                .expect("pairs are distinct and canonical");
        }
    }
    graph
}

/// Delegates to the engine's own generator, which guarantees connectivity.
fn generate_with_density(
    rng: &mut SmallRng,
    max_nodes: usize,
    density_range: RangeInclusive<f64>,
) -> Graph {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let density = rng.gen_range(density_range);
    GraphGeneratorBuilder::new()
        .with_seed(rng.r#gen())
        .build()
        .expect("default weight range is valid")
        .generate(node_count, density, Directedness::Undirected)
        .expect("generator parameters are valid")
}

/// Two to five components, each internally random, with no cross edges.
fn generate_disconnected(rng: &mut SmallRng) -> Graph {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let node_count = sizes.iter().sum();
    let mut graph = Graph::new(node_count, Directedness::Undirected);

    let mut offset = 0;
    for size in sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                graph
                    .add_edge(source, target, rng.gen_range(1..=100))
                    .expect("pairs are distinct and canonical");
            }
        }
        offset += size;
    }
    graph
}

/// Returns all unique undirected pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

impl Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
        .boxed()
    }
}
