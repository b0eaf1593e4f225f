//! Shared test utilities for `wgraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use wgraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::WeightedGraph;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph of `capacity` vertices from `(left, right, weight)` triples.
///
/// # Panics
/// Panics when an edge is rejected by [`WeightedGraph::insert_edge`].
pub(crate) fn graph_from_edges(capacity: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new(capacity);
    for &(left, right, weight) in edges {
        graph
            .insert_edge(left, right, weight)
            .expect("fixture edge must be valid");
    }
    graph
}
