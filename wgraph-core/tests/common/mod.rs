use wgraph_core::WeightedGraph;

/// Builds a graph from `(left, right, weight)` triples, panicking on invalid input.
#[must_use]
pub fn graph(capacity: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new(capacity);
    for &(left, right, weight) in edges {
        graph
            .insert_edge(left, right, weight)
            .expect("fixture edge must be valid");
    }
    graph
}
