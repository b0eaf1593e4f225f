//! Dense adjacency-matrix store for undirected weighted graphs.
//!
//! The matrix is held as a flat row-major buffer of `capacity * capacity`
//! optional weights. Both triangles are kept in sync so that lookups never
//! need to canonicalise the pair, and per-vertex degree counters are updated
//! alongside every mutation.

use tracing::{instrument, trace};

use crate::{
    Result,
    error::GraphError,
    mst::{self, Edge, SpanningTree},
};

/// Undirected weighted graph over a fixed number of vertices.
///
/// # Examples
/// ```
/// use wgraph_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(4);
/// assert!(graph.insert_edge(0, 1, 1.0)?);
/// assert!(graph.insert_edge(1, 2, 2.0)?);
/// assert!(graph.insert_edge(2, 3, 3.0)?);
/// assert!(graph.insert_edge(0, 3, 10.0)?);
///
/// let tree = graph.minimum_spanning_tree()?;
/// assert_eq!(tree.total_weight(), 6.0);
/// assert_eq!(tree.edges_examined(), 3);
/// # Ok::<(), wgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph {
    capacity: usize,
    weights: Vec<Option<f64>>,
    degrees: Vec<usize>,
    edge_count: usize,
}

impl WeightedGraph {
    /// Creates a graph with `capacity` vertices and no edges.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            weights: vec![None; capacity.saturating_mul(capacity)],
            degrees: vec![0; capacity],
            edge_count: 0,
        }
    }

    /// Creates a graph from a signed vertex count.
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeCapacity`] when `capacity < 0`.
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::{GraphError, WeightedGraph};
    ///
    /// assert_eq!(WeightedGraph::try_new(3)?.capacity(), 3);
    /// assert!(matches!(
    ///     WeightedGraph::try_new(-1),
    ///     Err(GraphError::NegativeCapacity { got: -1 })
    /// ));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn try_new(capacity: i64) -> Result<Self> {
        usize::try_from(capacity)
            .map(Self::new)
            .map_err(|_| GraphError::NegativeCapacity { got: capacity })
    }

    /// Returns the fixed vertex capacity.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Returns the number of undirected edges currently recorded.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the number of edges incident to `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex >= capacity`.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.ensure_vertex(vertex)?;
        Ok(self.degrees[vertex])
    }

    /// Inserts or reweights the edge between `left` and `right`.
    ///
    /// Returns `Ok(false)` without touching the graph for self-loops and
    /// zero-weight edges. Reweighting an existing edge keeps the degree and
    /// edge counters unchanged.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint outside the
    /// graph, [`GraphError::NonFiniteWeight`] for NaN or infinite weights, and
    /// [`GraphError::NegativeWeight`] for negative weights.
    pub fn insert_edge(&mut self, left: usize, right: usize, weight: f64) -> Result<bool> {
        self.ensure_vertex(left)?;
        self.ensure_vertex(right)?;
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { left, right });
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                left,
                right,
                weight,
            });
        }
        if left == right || weight == 0.0 {
            trace!(left, right, weight, "ignored self-loop or zero-weight edge");
            return Ok(false);
        }

        let forward = self.slot(left, right);
        let existed = self.weights[forward].replace(weight).is_some();
        let backward = self.slot(right, left);
        self.weights[backward] = Some(weight);

        if !existed {
            self.degrees[left] += 1;
            self.degrees[right] += 1;
            self.edge_count += 1;
        }
        trace!(left, right, weight, replaced = existed, "edge inserted");
        Ok(true)
    }

    /// Removes the edge between `left` and `right` if one is recorded.
    ///
    /// Returns whether an edge was removed. Both endpoint degrees and the edge
    /// count drop on removal.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint outside the
    /// graph.
    pub fn erase_edge(&mut self, left: usize, right: usize) -> Result<bool> {
        self.ensure_vertex(left)?;
        self.ensure_vertex(right)?;
        if left == right {
            return Ok(false);
        }

        let forward = self.slot(left, right);
        if self.weights[forward].take().is_none() {
            return Ok(false);
        }
        let backward = self.slot(right, left);
        self.weights[backward] = None;

        self.degrees[left] = self.degrees[left].saturating_sub(1);
        self.degrees[right] = self.degrees[right].saturating_sub(1);
        self.edge_count = self.edge_count.saturating_sub(1);
        trace!(left, right, "edge erased");
        Ok(true)
    }

    /// Returns `true` when an edge between `left` and `right` is recorded.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint outside the
    /// graph.
    pub fn check_edge(&self, left: usize, right: usize) -> Result<bool> {
        Ok(self.edge_weight(left, right)?.is_some())
    }

    /// Returns the weight recorded between `left` and `right`.
    ///
    /// The diagonal always reports `Some(0.0)`; a missing edge reports `None`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint outside the
    /// graph.
    pub fn weight(&self, left: usize, right: usize) -> Result<Option<f64>> {
        if left == right {
            self.ensure_vertex(left)?;
            return Ok(Some(0.0));
        }
        self.edge_weight(left, right)
    }

    /// Iterates over the recorded edges in upper-triangle row-major order.
    ///
    /// Every yielded edge satisfies `source < target`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.capacity).flat_map(move |source| {
            let row = self.row(source);
            row.iter()
                .enumerate()
                .skip(source + 1)
                .filter_map(move |(target, &slot)| {
                    slot.map(|weight| Edge::new(source, target, weight))
                })
        })
    }

    /// Removes every edge and resets the degree and edge counters.
    pub fn clear_edges(&mut self) {
        self.weights.fill(None);
        self.degrees.fill(0);
        self.edge_count = 0;
    }

    /// Computes the minimum spanning tree (or forest) of the current edges.
    ///
    /// The computation starts from scratch on every call; see
    /// [`mst::kruskal`] for the consumption rules.
    ///
    /// # Errors
    /// Propagates [`GraphError::DisjointSet`] if the union-find rejects an
    /// endpoint, which indicates a corrupted edge list.
    #[instrument(
        name = "graph.minimum_spanning_tree",
        level = "debug",
        err,
        skip(self),
        fields(capacity = self.capacity, edges = self.edge_count),
    )]
    pub fn minimum_spanning_tree(&self) -> Result<SpanningTree> {
        let mut edges = Vec::with_capacity(self.edge_count);
        edges.extend(self.edges());
        mst::kruskal(self.capacity, edges)
    }

    fn edge_weight(&self, left: usize, right: usize) -> Result<Option<f64>> {
        self.ensure_vertex(left)?;
        self.ensure_vertex(right)?;
        Ok(self.weights[self.slot(left, right)])
    }

    fn row(&self, vertex: usize) -> &[Option<f64>] {
        let start = vertex * self.capacity;
        &self.weights[start..start + self.capacity]
    }

    const fn slot(&self, row: usize, column: usize) -> usize {
        row * self.capacity + column
    }

    fn ensure_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.capacity {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                capacity: self.capacity,
            })
        }
    }
}
