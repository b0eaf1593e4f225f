//! Benchmark support crate for wgraph.
//!
//! Provides the POSIX-compatible `drand48` generator, the random-edge speed
//! workload and the parameter types used by the Criterion benchmarks.

pub mod drand48;
pub mod error;
pub mod params;
pub mod workload;
