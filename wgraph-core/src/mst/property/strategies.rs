//! Strategy builders for MST property-based tests.
//!
//! Fixtures are dense graphs of up to [`MAX_VERTICES`] vertices. Weights are
//! drawn either from a continuous range or from a handful of small integers
//! so that ties are common.

use proptest::prelude::*;

use crate::{WeightedGraph, mst::Edge};

/// Largest vertex capacity produced by the strategies.
const MAX_VERTICES: usize = 24;

/// How edge weights are sampled for a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Continuous weights in `[0.01, 100.0)`; ties are unlikely.
    Continuous,
    /// Weights from `{1, 2, 3}`; large tie groups.
    FewDistinct,
}

/// Graph fixture for MST properties.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// The generated graph.
    pub graph: WeightedGraph,
    /// Distribution used to sample the weights, kept for failure reports.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Returns the graph's edges as an owned list.
    pub(super) fn edges(&self) -> Vec<Edge> {
        self.graph.edges().collect()
    }
}

fn weight_strategy(distribution: WeightDistribution) -> BoxedStrategy<f64> {
    match distribution {
        WeightDistribution::Continuous => (0.01f64..100.0).boxed(),
        WeightDistribution::FewDistinct => (1u8..=3).prop_map(f64::from).boxed(),
    }
}

/// Generates graphs with a random capacity, density and weight distribution.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    let distribution = prop_oneof![
        Just(WeightDistribution::Continuous),
        Just(WeightDistribution::FewDistinct),
    ];

    (1usize..=MAX_VERTICES, distribution).prop_flat_map(|(capacity, distribution)| {
        let pair_count = capacity * capacity;
        let edge = (0..capacity, 0..capacity, weight_strategy(distribution));
        proptest::collection::vec(edge, 0..=pair_count).prop_map(move |edges| {
            let mut graph = WeightedGraph::new(capacity);
            for (left, right, weight) in edges {
                // Self-loops are skipped by the store itself.
                graph
                    .insert_edge(left, right, weight)
                    .expect("generated edge must be valid");
            }
            GraphFixture {
                graph,
                distribution,
            }
        })
    })
}
