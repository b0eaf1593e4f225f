//! Benchmark parameter types.

use std::fmt;

/// Parameters for an MST benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Vertex capacity of the generated graph.
    pub vertices: usize,
    /// Number of random insertions performed before the MST is timed.
    pub insertions: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.vertices, self.insertions)
    }
}

/// Parameters for a speed workload benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SpeedBenchParams {
    /// Vertex capacity of the workload graph.
    pub vertices: usize,
    /// Rounds of insertion followed by an MST computation.
    pub rounds: usize,
}

impl fmt::Display for SpeedBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},rounds={}", self.vertices, self.rounds)
    }
}
