//! Single-source weighted shortest paths.
//!
//! Classic Dijkstra with a linear scan for the next vertex to settle: each
//! round picks the unsettled vertex with the smallest tentative distance,
//! finalizes it and relaxes its outgoing edges. The scan makes the whole
//! run O(V²), which is fine at this library's scale; swapping in a priority
//! queue would change the complexity to O((V + E) log V) without changing
//! any observable behavior.
//!
//! Settled distances never decrease, which is only sound for non-negative
//! weights; behavior with negative weights is unspecified.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::graph::Graph;

/// The result of a shortest-path computation for one destination vertex.
///
/// # Examples
///
/// ```rust
/// use trellis::graph::Graph;
///
/// let mut graph: Graph<&str> = Graph::directed();
/// graph.add_edge_weighted("a", "b", 2.0);
/// graph.add_edge_weighted("b", "c", 3.0);
///
/// let paths = graph.dijkstra(&"a");
/// assert_eq!(paths[&"c"].distance, 5.0);
/// assert_eq!(paths[&"c"].path, vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<V> {
    /// Total weight of the cheapest path from the source.
    pub distance: f64,
    /// The full vertex sequence, starting at the source and ending at the
    /// destination.
    pub path: Vec<V>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Computes the cheapest paths from `source` to every reachable vertex.
    ///
    /// The returned map contains one entry per reachable vertex, including
    /// the source itself at distance 0. Unreachable vertices are absent. An
    /// absent source yields an empty map.
    ///
    /// Weights must be non-negative; negative weights leave the result
    /// unspecified.
    ///
    /// # Complexity
    ///
    /// O(V²) - see the module docs for the selection-structure trade-off.
    #[must_use]
    pub fn dijkstra(&self, source: &V) -> HashMap<V, ShortestPath<V>> {
        let mut result = HashMap::new();
        let Some(source) = self.stored_vertex(source) else {
            return result;
        };

        let mut distance: HashMap<&V, f64> =
            self.vertices().map(|v| (v, f64::INFINITY)).collect();
        distance.insert(source, 0.0);
        let mut previous: HashMap<&V, &V> = HashMap::new();
        let mut unsettled: HashSet<&V> = self.vertices().collect();

        while !unsettled.is_empty() {
            // Linear scan for the unsettled vertex closest to the source.
            let mut current: Option<&V> = None;
            let mut best = f64::INFINITY;
            for &vertex in &unsettled {
                let d = distance[vertex];
                if d < best {
                    best = d;
                    current = Some(vertex);
                }
            }
            // Everything left is unreachable; stop expanding.
            let Some(current) = current else {
                break;
            };
            unsettled.remove(current);

            for edge in self.edges(current) {
                let next = &edge.destination;
                if !unsettled.contains(next) {
                    continue; // already settled; distances never decrease
                }
                let candidate = best + edge.weight;
                if candidate < distance[next] {
                    distance.insert(next, candidate);
                    previous.insert(next, current);
                }
            }
        }

        for (&vertex, &dist) in &distance {
            if !dist.is_finite() {
                continue;
            }
            let mut path = vec![vertex];
            let mut cursor = vertex;
            while let Some(&step) = previous.get(cursor) {
                path.push(step);
                cursor = step;
            }
            path.reverse();
            result.insert(
                vertex.clone(),
                ShortestPath {
                    distance: dist,
                    path: path.into_iter().cloned().collect(),
                },
            );
        }
        result
    }
}
