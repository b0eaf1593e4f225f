//! Shared test utilities used across wgraph crates.
//!
//! - [`tracing`] captures spans and events so instrumentation can be asserted.
//! - [`ci`] reads the environment overrides that tune property-test runs.

pub mod ci;
pub mod tracing;
