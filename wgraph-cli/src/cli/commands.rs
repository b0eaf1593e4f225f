//! Command implementations and argument parsing for the wgraph CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use wgraph_benches::error::BenchSetupError;
use wgraph_benches::workload::{
    DEFAULT_INSERTS_PER_ROUND, DEFAULT_SEED, SpeedConfig, SpeedTotals, run_speed,
};
use wgraph_core::{GraphError, SpanningTree, WeightedGraph};

use super::edge_list::parse_edge_line;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "wgraph",
    about = "Build dense weighted graphs and compute their minimum spanning trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Replay the seeded random insert-then-MST workload.
    Speed(SpeedCommand),
    /// Compute the minimum spanning forest of an edge-list file.
    Mst(MstCommand),
}

/// Options accepted by the `speed` command.
#[derive(Debug, Args, Clone)]
pub struct SpeedCommand {
    /// Number of vertices in the workload graph.
    pub vertices: usize,

    /// Seed for the `drand48` stream.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Number of rounds (defaults to vertices squared).
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Random insertions attempted before each spanning-tree computation.
    #[arg(long = "inserts-per-round", default_value_t = DEFAULT_INSERTS_PER_ROUND)]
    pub inserts_per_round: usize,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to a whitespace-separated `left right weight` edge list.
    pub path: PathBuf,

    /// Vertex capacity of the graph the edges are loaded into.
    #[arg(long)]
    pub vertices: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading an edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An edge-list line could not be parsed.
    #[error("{path}:{line}: {reason}")]
    Parse {
        /// Path of the edge list.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Description of the problem.
        reason: String,
    },
    /// A graph operation rejected its arguments.
    #[error(transparent)]
    Core(#[from] GraphError),
    /// The random workload could not be run.
    #[error(transparent)]
    Bench(#[from] BenchSetupError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Accumulated totals from the `speed` workload.
    Speed(SpeedTotals),
    /// Spanning forest computed by the `mst` command.
    Mst(SpanningTree),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading input or a graph operation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wgraph_cli::cli::{Cli, Command, ExecutionSummary, SpeedCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Speed(SpeedCommand {
///         vertices: 5,
///         seed: 10,
///         rounds: Some(4),
///         inserts_per_round: 10,
///     }),
/// };
/// let ExecutionSummary::Speed(totals) = run_cli(cli)? else {
///     panic!("speed command yields totals");
/// };
/// assert_eq!(totals.rounds, 4);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Speed(speed) => {
            Span::current().record("command", field::display("speed"));
            run_speed_command(&speed).map(ExecutionSummary::Speed)
        }
        Command::Mst(mst) => {
            Span::current().record("command", field::display("mst"));
            run_mst_command(&mst).map(ExecutionSummary::Mst)
        }
    }
}

#[instrument(
    name = "cli.speed",
    err,
    skip(command),
    fields(vertices = command.vertices, seed = command.seed),
)]
pub(super) fn run_speed_command(command: &SpeedCommand) -> Result<SpeedTotals, CliError> {
    let config = SpeedConfig {
        vertices: command.vertices,
        rounds: command.rounds,
        inserts_per_round: command.inserts_per_round,
        seed: command.seed,
    };
    let totals = run_speed(&config)?;
    info!(
        rounds = totals.rounds,
        examined = totals.edges_examined,
        "speed command completed"
    );
    Ok(totals)
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(path = field::Empty, vertices = command.vertices, loaded = field::Empty),
)]
pub(super) fn run_mst_command(command: &MstCommand) -> Result<SpanningTree, CliError> {
    let span = Span::current();
    span.record("path", field::display(command.path.display()));

    let reader = open_edge_list(&command.path)?;
    let mut graph = WeightedGraph::new(command.vertices);
    let loaded = load_edges(&command.path, reader, &mut graph)?;
    span.record("loaded", loaded);

    let tree = graph.minimum_spanning_tree()?;
    info!(
        edges = graph.edge_count(),
        sets = tree.set_count(),
        "mst command completed"
    );
    Ok(tree)
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Inserts every record from `reader` into `graph`, returning the number of
/// records read.
pub(super) fn load_edges(
    path: &Path,
    reader: impl BufRead,
    graph: &mut WeightedGraph,
) -> Result<usize, CliError> {
    let mut loaded = 0;
    for (index, line) in reader.lines().enumerate() {
        let text = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let record = parse_edge_line(&text).map_err(|reason| CliError::Parse {
            path: path.to_path_buf(),
            line: index.saturating_add(1),
            reason,
        })?;
        if let Some(edge) = record {
            graph.insert_edge(edge.left, edge.right, edge.weight)?;
            loaded += 1;
        }
    }
    Ok(loaded)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// `speed` results print as `<total_weight>, <edges_examined>`. `mst`
/// results print the weight, examined-edge count and set count, then one
/// tab-separated line per accepted edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wgraph_cli::cli::{ExecutionSummary, render_summary};
/// # use wgraph_core::WeightedGraph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = WeightedGraph::new(3);
/// graph.insert_edge(0, 1, 2.0)?;
/// graph.insert_edge(1, 2, 0.5)?;
/// let summary = ExecutionSummary::Mst(graph.minimum_spanning_tree()?);
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "weight: 2.5\nexamined: 2\nsets: 1\n1\t2\t0.5\n0\t1\t2\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Speed(totals) => writeln!(writer, "{totals}"),
        ExecutionSummary::Mst(tree) => {
            writeln!(writer, "weight: {}", tree.total_weight())?;
            writeln!(writer, "examined: {}", tree.edges_examined())?;
            writeln!(writer, "sets: {}", tree.set_count())?;
            for edge in tree.edges() {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    edge.source(),
                    edge.target(),
                    edge.weight()
                )?;
            }
            Ok(())
        }
    }
}
