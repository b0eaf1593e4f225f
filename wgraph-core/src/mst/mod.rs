//! Kruskal minimum spanning tree (MST) construction.
//!
//! Edges are sorted by weight and consumed in order against a fresh
//! [`DisjointSets`]. An edge joining two different sets is accepted; every
//! visited edge counts towards [`SpanningTree::edges_examined`]. Consumption
//! stops as soon as a single set remains.

use std::cmp::Ordering;

use tracing::{Span, debug, field, instrument};

use crate::{DisjointSets, Result};

/// An undirected weighted edge in canonical form (`source <= target`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge, ordering the endpoints so that `source <= target`.
    #[must_use]
    pub fn new(left: usize, right: usize, weight: f64) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

/// Outcome of a minimum spanning tree computation.
///
/// When the graph is disconnected the accepted edges form a spanning forest
/// and [`SpanningTree::set_count`] reports the number of trees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningTree {
    total_weight: f64,
    edges_examined: usize,
    edges: Vec<Edge>,
    set_count: usize,
}

impl SpanningTree {
    /// Sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Number of sorted edges visited before the computation stopped.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_examined(&self) -> usize { self.edges_examined }

    /// Accepted edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Number of disjoint sets left when the computation stopped.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.set_count }

    /// Returns `true` when the accepted edges connect every vertex.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.set_count <= 1
    }

    /// Returns the `(total_weight, edges_examined)` pair.
    #[must_use]
    pub fn as_pair(&self) -> (f64, usize) {
        (self.total_weight, self.edges_examined)
    }
}

/// Computes a minimum spanning tree over `vertex_count` vertices.
///
/// `edges` is sorted in place by weight; the relative order of equal weights
/// is unspecified and does not affect the total weight.
///
/// # Errors
/// Returns [`crate::GraphError::DisjointSet`] when an edge references a
/// vertex `>= vertex_count`.
///
/// # Examples
/// ```
/// use wgraph_core::mst::{Edge, kruskal};
///
/// let edges = vec![Edge::new(0, 1, 5.0)];
/// let forest = kruskal(4, edges)?;
/// assert_eq!(forest.as_pair(), (5.0, 1));
/// assert_eq!(forest.set_count(), 3);
/// # Ok::<(), wgraph_core::GraphError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    err,
    skip(edges),
    fields(
        vertices = vertex_count,
        edges = edges.len(),
        examined = field::Empty,
        total_weight = field::Empty,
    ),
)]
pub fn kruskal(vertex_count: usize, mut edges: Vec<Edge>) -> Result<SpanningTree> {
    if edges.is_empty() {
        return Ok(SpanningTree {
            set_count: vertex_count,
            ..SpanningTree::default()
        });
    }

    edges.sort_unstable_by(Edge::cmp_weight);

    let mut sets = DisjointSets::new(vertex_count);
    let mut tree = SpanningTree {
        edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
        ..SpanningTree::default()
    };

    for edge in &edges {
        if sets.union(edge.source, edge.target)? {
            tree.total_weight += edge.weight;
            tree.edges.push(*edge);
        }
        tree.edges_examined += 1;
        if sets.disjoint_set_count() == 1 {
            break;
        }
    }
    tree.set_count = sets.disjoint_set_count();

    let span = Span::current();
    span.record("examined", tree.edges_examined);
    span.record("total_weight", tree.total_weight);
    debug!(
        accepted = tree.edges.len(),
        sets = tree.set_count,
        "spanning tree computed"
    );
    Ok(tree)
}

#[cfg(test)]
mod property;
