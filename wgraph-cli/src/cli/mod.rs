//! Command-line interface for the dense weighted graph.
//!
//! `speed` replays the seeded random insert-then-MST workload and `mst`
//! loads an edge list from disk and prints its minimum spanning forest.

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, MstCommand, SpeedCommand, render_summary, run_cli,
};
pub use edge_list::{EdgeRecord, parse_edge_line};

#[cfg(test)]
mod tests;
