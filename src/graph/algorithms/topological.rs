//! Topological ordering via Kahn's algorithm.
//!
//! Repeatedly emits a vertex with in-degree zero and lowers the in-degree
//! of its successors. If the queue runs dry before every vertex is emitted,
//! the leftover vertices all sit on cycles and no ordering exists.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::graph::Graph;

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Computes a topological ordering of the vertices.
    ///
    /// Returns `None` immediately for an undirected graph (the question is
    /// only meaningful for directed edges) and `None` for a directed graph
    /// whose cycles prevent a complete ordering. Otherwise every vertex
    /// appears exactly once, each before all of its successors.
    ///
    /// # Complexity
    ///
    /// O(V + E).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis::graph::Graph;
    ///
    /// let mut graph: Graph<&str> = Graph::directed();
    /// graph.add_edge("build", "test");
    /// graph.add_edge("test", "release");
    ///
    /// let order = graph.topological_sort().unwrap();
    /// assert_eq!(order, vec!["build", "test", "release"]);
    /// ```
    #[must_use]
    pub fn topological_sort(&self) -> Option<Vec<V>> {
        if !self.is_directed() {
            return None;
        }

        let mut in_degree: HashMap<&V, usize> = self.vertices().map(|v| (v, 0)).collect();
        for vertex in self.vertices() {
            for edge in self.edges(vertex) {
                if let Some(degree) = in_degree.get_mut(&edge.destination) {
                    *degree += 1;
                }
            }
        }

        let mut ready: VecDeque<&V> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&vertex, _)| vertex)
            .collect();
        let mut order: Vec<&V> = Vec::with_capacity(self.vertex_count());

        while let Some(vertex) = ready.pop_front() {
            order.push(vertex);
            for edge in self.edges(vertex) {
                if let Some(degree) = in_degree.get_mut(&edge.destination) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(&edge.destination);
                    }
                }
            }
        }

        // Vertices still holding in-degree sit on cycles.
        if order.len() < self.vertex_count() {
            return None;
        }
        Some(order.into_iter().cloned().collect())
    }
}
