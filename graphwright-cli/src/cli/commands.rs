//! Command implementations and argument parsing for the graphwright CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphwright_core::{
    DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, Directedness, GeneratorError, Graph, GraphError,
    GraphGenerator, GraphGeneratorBuilder, NodeId, Weight, dijkstra, floyd_warshall, kruskal,
    max_density, prim, transitive_closure,
};
use thiserror::Error;
use tracing::{Span, debug, error, field, info, instrument};

const DEFAULT_NODES: usize = 10;
const DEFAULT_DENSITY: f64 = 2.0;
const DEFAULT_STEPS: u32 = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphwright",
    about = "Generate random weighted graphs and run MST, shortest-path and closure algorithms."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run every algorithm over a grid of graph sizes and densities.
    Sweep(SweepCommand),
    /// Print one generated graph, or a tree derived from it, as DOT.
    Dot(DotCommand),
    /// Print a matrix view of one generated graph.
    Matrix(MatrixCommand),
}

/// Generator settings shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GeneratorArgs {
    /// Seed for reproducible graphs; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generate directed graphs instead of undirected ones.
    #[arg(long)]
    pub directed: bool,

    /// Smallest edge weight.
    #[arg(long = "min-weight", default_value_t = DEFAULT_MIN_WEIGHT)]
    pub min_weight: Weight,

    /// Largest edge weight.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: Weight,
}

impl GeneratorArgs {
    fn directedness(&self) -> Directedness {
        if self.directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }

    fn build(&self) -> Result<GraphGenerator, CliError> {
        let mut builder =
            GraphGeneratorBuilder::new().with_weight_range(self.min_weight, self.max_weight);
        if let Some(seed) = self.seed {
            builder = builder.with_seed(seed);
        }
        Ok(builder.build()?)
    }
}

/// Size and density of a single generated graph.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Target edges per node.
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Generator settings.
    #[command(flatten)]
    pub generator: GeneratorArgs,
}

impl GraphArgs {
    fn generate(&self) -> Result<Graph, CliError> {
        let mut generator = self.generator.build()?;
        Ok(generator.generate(self.nodes, self.density, self.generator.directedness())?)
    }
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Comma-separated node counts to visit.
    #[arg(long, value_delimiter = ',', default_values_t = [10, 20, 30, 40, 50])]
    pub sizes: Vec<usize>,

    /// Density steps per size; step `i` uses `i / steps` of the maximum
    /// undirected density.
    #[arg(
        long,
        default_value_t = DEFAULT_STEPS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub steps: u32,

    /// Generator settings.
    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Options accepted by the `dot` command.
#[derive(Debug, Args, Clone)]
pub struct DotCommand {
    /// What to render.
    #[arg(long, value_enum, default_value_t = DotView::Graph)]
    pub algorithm: DotView,

    /// Start node for Prim and source node for Dijkstra.
    #[arg(long, default_value_t = 0)]
    pub start: NodeId,

    /// Graph settings.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Graph views the `dot` command can render.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum DotView {
    /// The generated graph itself.
    Graph,
    /// Minimum spanning forest built by Kruskal's algorithm.
    Kruskal,
    /// Minimum spanning tree grown by Prim's algorithm from `--start`.
    Prim,
    /// Shortest-path tree rooted at `--start`.
    Dijkstra,
}

/// Options accepted by the `matrix` command.
#[derive(Debug, Args, Clone)]
pub struct MatrixCommand {
    /// Which matrix to print.
    #[arg(long, value_enum, default_value_t = MatrixKind::Adjacency)]
    pub kind: MatrixKind,

    /// Graph settings.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Matrices the `matrix` command can print.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum MatrixKind {
    /// Edge weights, `0` where no edge exists.
    Adjacency,
    /// All-pairs shortest distances, `inf` where unreachable.
    FloydWarshall,
    /// Hop count from row node to column node when the column node is
    /// reachable from the row node, `inf` otherwise.
    Closure,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generator configuration or generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// An algorithm rejected its input, e.g. an unknown start node.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Stable code of the underlying engine error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Generator(err) => err.code().as_str(),
            Self::Graph(err) => err.code().as_str(),
        }
    }
}

/// One line of `sweep` output.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    /// Nodes in the generated graph.
    pub nodes: usize,
    /// Requested density.
    pub density: f64,
    /// Logical edges generated.
    pub edges: usize,
    /// Weight of the Kruskal forest.
    pub kruskal_weight: u64,
    /// Weight of the Prim tree grown from node `0`.
    pub prim_weight: u64,
    /// Nodes reachable from node `0`, itself included.
    pub reachable: usize,
    /// Ordered pairs of distinct nodes connected in the closure.
    pub closure_pairs: usize,
    /// Longest finite shortest path, if any pair is connected.
    pub diameter: Option<u64>,
}

/// Result of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Rows produced by `sweep`.
    Sweep(Vec<SweepRow>),
    /// Preformatted text produced by `dot` or `matrix`.
    Text(String),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or an algorithm fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use clap::Parser;
/// # use graphwright_cli::cli::{Cli, CommandOutput, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli::try_parse_from(["graphwright", "dot", "--nodes", "3", "--density", "0", "--seed", "1"])?;
/// let CommandOutput::Text(text) = run_cli(cli)? else {
///     unreachable!("dot renders text");
/// };
/// assert!(text.starts_with("strict graph G {"));
/// assert_eq!(text.lines().count(), 4);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Sweep(command) => {
            span.record("command", "sweep");
            run_sweep(&command).map(CommandOutput::Sweep)
        }
        Command::Dot(command) => {
            span.record("command", "dot");
            run_dot(&command).map(CommandOutput::Text)
        }
        Command::Matrix(command) => {
            span.record("command", "matrix");
            run_matrix(&command).map(CommandOutput::Text)
        }
    }
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(command),
    fields(sizes = ?command.sizes, steps = command.steps, rows = field::Empty),
)]
pub(super) fn run_sweep(command: &SweepCommand) -> Result<Vec<SweepRow>, CliError> {
    let mut generator = command.generator.build()?;
    let directedness = command.generator.directedness();
    let mut rows = Vec::new();

    for &nodes in &command.sizes {
        let ceiling = max_density(nodes, Directedness::Undirected);
        for step in 1..=command.steps {
            let density = step_density(ceiling, step, command.steps);
            let graph = generator.generate(nodes, density, directedness)?;
            rows.push(analyse(&graph, density)?);
        }
    }

    Span::current().record("rows", rows.len());
    info!(seed = generator.seed(), rows = rows.len(), "sweep completed");
    Ok(rows)
}

#[expect(
    clippy::float_arithmetic,
    reason = "densities are edges-per-node ratios"
)]
fn step_density(ceiling: f64, step: u32, steps: u32) -> f64 {
    f64::from(step) * ceiling / f64::from(steps)
}

fn analyse(graph: &Graph, density: f64) -> Result<SweepRow, CliError> {
    let by_prim = prim(graph, 0)?;
    let by_kruskal = kruskal(graph);
    let paths = dijkstra(graph, 0)?;
    let distances = floyd_warshall(graph);
    let closure = transitive_closure(graph);

    let row = SweepRow {
        nodes: graph.node_count(),
        density,
        edges: graph.edge_count(),
        kruskal_weight: by_kruskal.total_weight(),
        prim_weight: by_prim.total_weight(),
        reachable: paths.reachable_count(),
        closure_pairs: closure.reachable_pairs(),
        diameter: distances.diameter(),
    };

    if row.kruskal_weight != row.prim_weight {
        error!(
            nodes = row.nodes,
            density,
            kruskal = row.kruskal_weight,
            prim = row.prim_weight,
            "minimum spanning tree weights disagree"
        );
    }
    debug!(nodes = row.nodes, density, edges = row.edges, "sweep point completed");
    Ok(row)
}

#[instrument(
    name = "cli.dot",
    err,
    skip(command),
    fields(algorithm = ?command.algorithm, nodes = command.graph.nodes),
)]
pub(super) fn run_dot(command: &DotCommand) -> Result<String, CliError> {
    let graph = command.graph.generate()?;
    let text = match command.algorithm {
        DotView::Graph => graph.to_dot(),
        DotView::Kruskal => kruskal(&graph).graph().to_dot(),
        DotView::Prim => prim(&graph, command.start)?.graph().to_dot(),
        DotView::Dijkstra => dijkstra(&graph, command.start)?.tree().to_dot(),
    };
    Ok(text)
}

#[instrument(
    name = "cli.matrix",
    err,
    skip(command),
    fields(kind = ?command.kind, nodes = command.graph.nodes),
)]
pub(super) fn run_matrix(command: &MatrixCommand) -> Result<String, CliError> {
    let graph = command.graph.generate()?;
    let text = match command.kind {
        MatrixKind::Adjacency => graph.render_adjacency_matrix(),
        MatrixKind::FloydWarshall => floyd_warshall(&graph).to_string(),
        MatrixKind::Closure => transitive_closure(&graph).to_string(),
    };
    Ok(text)
}

/// Renders `output` to `writer`: a header plus one tab-separated line per
/// sweep row, or the text verbatim.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphwright_cli::cli::{CommandOutput, SweepRow, render_output};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Sweep(vec![SweepRow {
///     nodes: 3,
///     density: 0.5,
///     edges: 2,
///     kruskal_weight: 5,
///     prim_weight: 5,
///     reachable: 3,
///     closure_pairs: 6,
///     diameter: Some(5),
/// }]);
/// let mut buffer = Vec::new();
/// render_output(&output, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert_eq!(text.lines().nth(1), Some("3\t0.50\t2\t5\t5\t3\t6\t5"));
/// # Ok(())
/// # }
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Sweep(rows) => {
            writeln!(
                writer,
                "nodes\tdensity\tedges\tkruskal\tprim\treachable\tclosure_pairs\tdiameter"
            )?;
            for row in rows {
                let diameter = row
                    .diameter
                    .map_or_else(|| "-".to_owned(), |value| value.to_string());
                writeln!(
                    writer,
                    "{}\t{:.2}\t{}\t{}\t{}\t{}\t{}\t{diameter}",
                    row.nodes,
                    row.density,
                    row.edges,
                    row.kruskal_weight,
                    row.prim_weight,
                    row.reachable,
                    row.closure_pairs,
                )?;
            }
            Ok(())
        }
        CommandOutput::Text(text) => writer.write_all(text.as_bytes()),
    }
}
