//! Dense weighted graphs and their minimum spanning trees.
//!
//! [`WeightedGraph`] stores an undirected graph as an adjacency matrix with a
//! fixed vertex capacity. [`WeightedGraph::minimum_spanning_tree`] runs
//! Kruskal's algorithm over the current edges, using [`DisjointSets`] to
//! detect cycles.

mod disjoint_set;
mod error;
mod graph;
pub mod mst;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    disjoint_set::DisjointSets,
    error::{DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, Result},
    graph::WeightedGraph,
    mst::{Edge, SpanningTree, kruskal},
};
