//! Random connected graph generation.
//!
//! Graphs start from a Hamiltonian-path backbone `0 - 1 - ... - (n-1)` so
//! they are always (weakly) connected, then receive extra random edges until
//! `floor(density * n)` edges exist. Targets beyond the completeness bound are
//! clamped so generation always terminates.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{Span, debug, field, instrument, warn};

use crate::{
    error::GeneratorError,
    graph::{Directedness, Graph, NodeId, Weight},
};

/// Smallest weight drawn by a default generator.
pub const DEFAULT_MIN_WEIGHT: Weight = 1;
/// Largest weight drawn by a default generator.
pub const DEFAULT_MAX_WEIGHT: Weight = 100;

/// Maximum number of logical edges a simple graph on `node_count` nodes can
/// hold: `n(n-1)` arcs when directed, `n(n-1)/2` pairs when undirected.
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, max_edge_count};
///
/// assert_eq!(max_edge_count(5, Directedness::Directed), 20);
/// assert_eq!(max_edge_count(5, Directedness::Undirected), 10);
/// assert_eq!(max_edge_count(1, Directedness::Undirected), 0);
/// ```
#[must_use]
pub fn max_edge_count(node_count: usize, directedness: Directedness) -> usize {
    let ordered = node_count.saturating_mul(node_count.saturating_sub(1));
    if directedness.is_directed() {
        ordered
    } else {
        ordered / 2
    }
}

/// Density at which a graph on `node_count` nodes becomes complete, expressed
/// as edges per node.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "densities are edges-per-node ratios over small node counts"
)]
pub fn max_density(node_count: usize, directedness: Directedness) -> f64 {
    if node_count == 0 {
        return 0.0;
    }
    max_edge_count(node_count, directedness) as f64 / node_count as f64
}

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, GraphGeneratorBuilder};
///
/// let mut generator = GraphGeneratorBuilder::new()
///     .with_seed(7)
///     .with_weight_range(1, 10)
///     .build()
///     .expect("configuration is valid");
/// let graph = generator
///     .generate(6, 1.5, Directedness::Undirected)
///     .expect("parameters are valid");
/// assert_eq!(graph.edge_count(), 9);
/// assert!(graph.arcs().all(|edge| (1..=10).contains(&edge.weight)));
/// ```
#[derive(Clone, Debug)]
pub struct GraphGeneratorBuilder {
    seed: Option<u64>,
    min_weight: Weight,
    max_weight: Weight,
}

impl Default for GraphGeneratorBuilder {
    fn default() -> Self {
        Self {
            seed: None,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl GraphGeneratorBuilder {
    /// Creates a builder with an entropy seed and weights in `[1, 100]`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the RNG seed so generated graphs are reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Overrides the inclusive weight range.
    #[must_use]
    pub const fn with_weight_range(mut self, min: Weight, max: Weight) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Returns the configured inclusive weight range as `(min, max)`.
    #[must_use]
    pub const fn weight_range(&self) -> (Weight, Weight) {
        (self.min_weight, self.max_weight)
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidWeightRange`] unless
    /// `1 <= min <= max`.
    pub fn build(self) -> Result<GraphGenerator, GeneratorError> {
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(GeneratorError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        debug!(seed, "graph generator seeded");
        Ok(GraphGenerator {
            rng: SmallRng::seed_from_u64(seed),
            seed,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
        })
    }
}

/// Builds random connected graphs at a requested edge density.
#[derive(Clone, Debug)]
pub struct GraphGenerator {
    rng: SmallRng,
    seed: u64,
    min_weight: Weight,
    max_weight: Weight,
}

impl GraphGenerator {
    /// Seed the generator's RNG was initialised with. Rebuilding with this
    /// seed replays the same sequence of graphs.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a connected graph with `num_nodes` nodes and
    /// `max(n - 1, min(floor(density * n), max_edge_count))` edges.
    ///
    /// # Errors
    /// Returns [`GeneratorError::NoNodes`] when `num_nodes == 0` and
    /// [`GeneratorError::InvalidDensity`] when `density` is negative or not
    /// finite.
    #[instrument(
        name = "generator.generate",
        err,
        skip(self),
        fields(target_edges = field::Empty),
    )]
    pub fn generate(
        &mut self,
        num_nodes: usize,
        density: f64,
        directedness: Directedness,
    ) -> Result<Graph, GeneratorError> {
        if num_nodes == 0 {
            return Err(GeneratorError::NoNodes);
        }
        if !density.is_finite() || density < 0.0 {
            return Err(GeneratorError::InvalidDensity { density });
        }

        let mut graph = Graph::new(num_nodes, directedness);
        for node in 1..num_nodes {
            let weight = self.draw_weight();
            graph.add_edge(node - 1, node, weight)?;
        }

        let backbone = num_nodes - 1;
        let target = target_edge_count(num_nodes, density, directedness);
        Span::current().record("target_edges", target);

        let missing = target.saturating_sub(backbone);
        if missing > 0 {
            let max_edges = max_edge_count(num_nodes, directedness);
            if target.saturating_mul(2) >= max_edges {
                self.fill_from_complement(&mut graph, missing)?;
            } else {
                self.fill_by_rejection(&mut graph, missing)?;
            }
        }

        debug!(edges = graph.edge_count(), "graph generated");
        Ok(graph)
    }

    fn draw_weight(&mut self) -> Weight {
        self.rng.gen_range(self.min_weight..=self.max_weight)
    }

    /// Draws random ordered pairs until `missing` new edges exist. Only used
    /// while at least half of the possible edges are still absent, so the
    /// expected number of rejected draws per edge stays below two.
    fn fill_by_rejection(
        &mut self,
        graph: &mut Graph,
        mut missing: usize,
    ) -> Result<(), GeneratorError> {
        let node_count = graph.node_count();
        while missing > 0 {
            let start = self.rng.gen_range(0..node_count);
            let end = self.rng.gen_range(0..node_count);
            if start != end && !graph.has_edge(start, end) {
                let weight = self.draw_weight();
                graph.add_edge(start, end, weight)?;
                missing -= 1;
            }
        }
        Ok(())
    }

    /// Picks `missing` edges uniformly without replacement from the pairs
    /// that are still absent.
    fn fill_from_complement(
        &mut self,
        graph: &mut Graph,
        missing: usize,
    ) -> Result<(), GeneratorError> {
        let mut absent = absent_pairs(graph);
        let (chosen, _) = absent.partial_shuffle(&mut self.rng, missing);
        for &(start, end) in chosen.iter() {
            let weight = self.draw_weight();
            graph.add_edge(start, end, weight)?;
        }
        Ok(())
    }
}

/// Generates a graph with an entropy-seeded generator and the default
/// weight range.
///
/// # Errors
/// See [`GraphGenerator::generate`].
///
/// # Examples
/// ```
/// use graphwright_core::{Directedness, generate};
///
/// let graph = generate(10, 2.0, Directedness::Directed).expect("parameters are valid");
/// assert_eq!(graph.edge_count(), 20);
/// assert!(graph.is_weakly_connected());
/// ```
pub fn generate(
    num_nodes: usize,
    density: f64,
    directedness: Directedness,
) -> Result<Graph, GeneratorError> {
    GraphGeneratorBuilder::new()
        .build()?
        .generate(num_nodes, density, directedness)
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "density is validated finite and non-negative and the result is clamped"
)]
fn target_edge_count(num_nodes: usize, density: f64, directedness: Directedness) -> usize {
    let backbone = num_nodes.saturating_sub(1);
    let max_edges = max_edge_count(num_nodes, directedness);
    let requested = (density * num_nodes as f64).floor();

    let target = if requested > max_edges as f64 {
        warn!(
            requested,
            max_edges,
            ?directedness,
            "density exceeds the completeness bound; clamping edge target"
        );
        max_edges
    } else {
        requested as usize
    };
    target.max(backbone)
}

fn absent_pairs(graph: &Graph) -> Vec<(NodeId, NodeId)> {
    let node_count = graph.node_count();
    let directed = graph.is_directed();
    let mut pairs = Vec::new();
    for start in 0..node_count {
        let first_end = if directed { 0 } else { start + 1 };
        for end in first_end..node_count {
            if start != end && !graph.has_edge(start, end) {
                pairs.push((start, end));
            }
        }
    }
    pairs
}
