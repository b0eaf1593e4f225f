//! Benchmark setup error type.
//!
//! Collects the failures that can surface while preparing or replaying a
//! workload so drivers propagate them with `?`.

use wgraph_core::GraphError;

/// Errors that may occur while setting up or running a workload.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A graph operation rejected its arguments.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
