//! Dense Prim oracle for MST property verification.
//!
//! Prim's algorithm grows each tree from its lowest unvisited vertex by
//! repeatedly taking the cheapest crossing edge. It shares no code with the
//! Kruskal engine, so agreement on the total weight is meaningful.

use crate::WeightedGraph;

/// Result of the Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct PrimResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of connected components, isolated vertices included.
    pub component_count: usize,
}

/// Computes a minimum spanning forest of `graph` in `O(capacity²)`.
pub(super) fn prim_forest(graph: &WeightedGraph) -> PrimResult {
    let capacity = graph.capacity();
    let mut visited = vec![false; capacity];
    let mut best: Vec<Option<f64>> = vec![None; capacity];
    let mut total_weight = 0.0;
    let mut component_count = 0;

    for start in 0..capacity {
        if visited[start] {
            continue;
        }
        component_count += 1;
        best[start] = Some(0.0);

        while let Some(next) = cheapest_frontier_vertex(&visited, &best) {
            visited[next] = true;
            total_weight += best[next].unwrap_or(0.0);
            relax_neighbours(graph, next, &visited, &mut best);
        }
    }

    PrimResult {
        total_weight,
        component_count,
    }
}

fn cheapest_frontier_vertex(visited: &[bool], best: &[Option<f64>]) -> Option<usize> {
    best.iter()
        .enumerate()
        .filter(|(vertex, _)| !visited[*vertex])
        .filter_map(|(vertex, weight)| weight.map(|weight| (vertex, weight)))
        .min_by(|left, right| left.1.total_cmp(&right.1))
        .map(|(vertex, _)| vertex)
}

fn relax_neighbours(
    graph: &WeightedGraph,
    vertex: usize,
    visited: &[bool],
    best: &mut [Option<f64>],
) {
    for neighbour in 0..graph.capacity() {
        if visited[neighbour] || neighbour == vertex {
            continue;
        }
        let Ok(Some(weight)) = graph.weight(vertex, neighbour) else {
            continue;
        };
        let improved = best[neighbour].is_none_or(|current| weight < current);
        if improved {
            best[neighbour] = Some(weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::graph_from_edges;

    use super::prim_forest;

    #[test]
    fn oracle_handles_triangle() {
        let graph = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
        let result = prim_forest(&graph);
        assert_eq!(result.total_weight, 3.0);
        assert_eq!(result.component_count, 1);
    }

    #[test]
    fn oracle_counts_isolated_vertices() {
        let graph = graph_from_edges(5, &[(0, 1, 2.5), (3, 4, 1.0)]);
        let result = prim_forest(&graph);
        assert_eq!(result.total_weight, 3.5);
        assert_eq!(result.component_count, 3);
    }
}
