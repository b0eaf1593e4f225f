//! Random-edge workloads driving the dense graph and its MST engine.
//!
//! [`run_speed`] replays the historical timing driver: a `drand48` stream
//! seeded with `srand48(seed)`, `rounds` rounds of random insertions each
//! followed by a fresh spanning-tree computation, and the accumulated
//! weight and examined-edge count. [`random_graph`] builds a one-off graph
//! for Criterion fixtures from any [`rand::Rng`].

use std::fmt;

use rand::Rng;
use tracing::{Span, field, info, instrument};
use wgraph_core::WeightedGraph;

use crate::drand48::Drand48;
use crate::error::BenchSetupError;

/// Seed used by the reference timing runs.
pub const DEFAULT_SEED: u32 = 10;
/// Insertions attempted between consecutive spanning-tree computations.
pub const DEFAULT_INSERTS_PER_ROUND: usize = 10;

/// Configuration for a [`run_speed`] workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeedConfig {
    /// Vertex capacity of the workload graph.
    pub vertices: usize,
    /// Number of rounds; `None` runs `vertices * vertices` rounds.
    pub rounds: Option<usize>,
    /// Random insertions attempted per round.
    pub inserts_per_round: usize,
    /// Seed handed to the `drand48` stream.
    pub seed: u32,
}

impl SpeedConfig {
    /// Builds the reference configuration for `vertices` vertices.
    #[must_use]
    pub const fn new(vertices: usize) -> Self {
        Self {
            vertices,
            rounds: None,
            inserts_per_round: DEFAULT_INSERTS_PER_ROUND,
            seed: DEFAULT_SEED,
        }
    }

    /// Number of rounds the workload will run.
    #[must_use]
    pub const fn effective_rounds(&self) -> usize {
        match self.rounds {
            Some(rounds) => rounds,
            None => self.vertices.saturating_mul(self.vertices),
        }
    }
}

/// Aggregated results of a [`run_speed`] workload.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpeedTotals {
    /// Sum of every round's spanning-forest weight.
    pub total_weight: f64,
    /// Sum of every round's examined-edge count.
    pub edges_examined: u64,
    /// Number of rounds that ran.
    pub rounds: usize,
}

impl fmt::Display for SpeedTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.total_weight, self.edges_examined)
    }
}

/// Runs the random insert-then-MST workload.
///
/// Each round draws `inserts_per_round` triples `(lrand48() % n,
/// lrand48() % n, drand48())` and offers them to
/// [`WeightedGraph::insert_edge`]; self-loops and zero weights are dropped
/// by the graph. The spanning tree is then recomputed and its weight and
/// examined-edge count are added to the totals.
///
/// # Errors
///
/// Returns [`BenchSetupError::ZeroValue`] when `vertices` is zero and
/// propagates any [`wgraph_core::GraphError`] raised by the graph.
///
/// # Examples
/// ```
/// use wgraph_benches::workload::{SpeedConfig, run_speed};
///
/// let totals = run_speed(&SpeedConfig::new(6)).expect("workload runs");
/// assert_eq!(totals.rounds, 36);
/// assert!(totals.total_weight > 0.0);
/// ```
#[instrument(
    name = "workload.speed",
    err,
    skip(config),
    fields(
        vertices = config.vertices,
        seed = config.seed,
        rounds = field::Empty,
        examined = field::Empty,
    ),
)]
pub fn run_speed(config: &SpeedConfig) -> Result<SpeedTotals, BenchSetupError> {
    if config.vertices == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "workload vertex count",
        });
    }

    let rounds = config.effective_rounds();
    Span::current().record("rounds", rounds);

    let mut rng = Drand48::new(config.seed);
    let mut graph = WeightedGraph::new(config.vertices);
    let mut totals = SpeedTotals {
        rounds,
        ..SpeedTotals::default()
    };

    for _ in 0..rounds {
        for _ in 0..config.inserts_per_round {
            let (left, right, weight) = draw_triple(&mut rng, config.vertices)?;
            graph.insert_edge(left, right, weight)?;
        }
        let tree = graph.minimum_spanning_tree()?;
        accumulate(&mut totals, tree.total_weight(), tree.edges_examined());
    }

    Span::current().record("examined", totals.edges_examined);
    info!(
        total_weight = totals.total_weight,
        edges = graph.edge_count(),
        "speed workload finished"
    );
    Ok(totals)
}

fn draw_triple(
    rng: &mut Drand48,
    vertices: usize,
) -> Result<(usize, usize, f64), BenchSetupError> {
    let missing = || BenchSetupError::ZeroValue {
        context: "workload vertex count",
    };
    let left = rng.below(vertices).ok_or_else(missing)?;
    let right = rng.below(vertices).ok_or_else(missing)?;
    Ok((left, right, rng.drand48()))
}

#[expect(
    clippy::float_arithmetic,
    reason = "the workload reports a running sum of tree weights"
)]
fn accumulate(totals: &mut SpeedTotals, weight: f64, examined: usize) {
    totals.total_weight += weight;
    let widened = u64::try_from(examined).unwrap_or(u64::MAX);
    totals.edges_examined = totals.edges_examined.saturating_add(widened);
}

/// Builds a graph with `insertions` random edges drawn from `rng`.
///
/// Endpoints are uniform over `0..vertices` and weights uniform over
/// `[0, 1)`; draws that land on a self-loop or a zero weight are skipped by
/// the graph, so the edge count may be lower than `insertions`.
///
/// # Errors
///
/// Returns [`BenchSetupError::ZeroValue`] when `vertices` is zero.
pub fn random_graph<R: Rng + ?Sized>(
    rng: &mut R,
    vertices: usize,
    insertions: usize,
) -> Result<WeightedGraph, BenchSetupError> {
    if vertices == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "graph vertex count",
        });
    }
    let mut graph = WeightedGraph::new(vertices);
    for _ in 0..insertions {
        let left = rng.gen_range(0..vertices);
        let right = rng.gen_range(0..vertices);
        graph.insert_edge(left, right, rng.gen_range(0.0..1.0))?;
    }
    Ok(graph)
}
