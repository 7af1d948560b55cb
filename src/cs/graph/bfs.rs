use std::collections::VecDeque;

use crate::cs::graph::Graph;
use crate::error::{Error, Result};

/// Computes the minimum number of edges from `start` to every vertex using
/// breadth-first search.
///
/// Returns one entry per vertex: `Some(distance)` for reachable vertices
/// (`Some(0)` for `start` itself), `None` for unreachable ones.
///
/// # Errors
/// * `VertexNotFound` if `start` is outside the graph
///
/// # Examples
/// ```
/// use dac_algos::cs::graph::{shortest_paths, Graph};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(1, 2).unwrap();
/// let dist = shortest_paths(&graph, 0).unwrap();
/// assert_eq!(dist, vec![Some(0), Some(1), Some(2)]);
/// ```
///
/// # Complexity
/// * Time: O(V + E)
/// * Space: O(V)
pub fn shortest_paths(graph: &Graph, start: usize) -> Result<Vec<Option<usize>>> {
    if start >= graph.vertex_count() {
        return Err(Error::VertexNotFound(start));
    }

    let mut distances = vec![None; graph.vertex_count()];
    distances[start] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((vertex, distance)) = queue.pop_front() {
        for &neighbor in graph.neighbors(vertex)? {
            // Only newly discovered vertices enter the queue.
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(distance + 1);
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    Ok(distances)
}
