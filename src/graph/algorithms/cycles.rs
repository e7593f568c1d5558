//! Cycle detection.
//!
//! Depth-first search with an explicit "on current path" set: an edge
//! reaching a vertex that is already on the active path is a back edge,
//! and a back edge is a cycle. Every vertex is used as a search root once,
//! so disconnected components are covered.
//!
//! # Undirected Graphs
//!
//! In an undirected graph every stored edge has a mirror, and the naive
//! back-edge rule would report the two-vertex path `a - b` as a cycle the
//! moment the search walks `b`'s mirror edge back to `a`. The search
//! therefore skips exactly one reverse edge per arrival - the edge it came
//! in on. Parallel undirected edges between the same endpoints still count
//! as a cycle, because only the first reverse edge is exempt.

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::Graph;

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Returns `true` if the graph contains at least one cycle.
    ///
    /// Works for directed and undirected graphs; self-loops and parallel
    /// undirected edges are cycles, a single undirected edge is not.
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
    /// graph.add_edge("a", "b");
    /// graph.add_edge("b", "c");
    /// assert!(!graph.has_cycle());
    ///
    /// graph.add_edge("c", "a");
    /// assert!(graph.has_cycle());
    /// ```
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<&V> = HashSet::new();
        let mut on_path: HashSet<&V> = HashSet::new();
        for vertex in self.vertices() {
            if !visited.contains(vertex)
                && self.cycle_from(vertex, None, &mut visited, &mut on_path)
            {
                return true;
            }
        }
        false
    }

    fn cycle_from<'a>(
        &'a self,
        vertex: &'a V,
        parent: Option<&'a V>,
        visited: &mut HashSet<&'a V>,
        on_path: &mut HashSet<&'a V>,
    ) -> bool {
        visited.insert(vertex);
        on_path.insert(vertex);

        let mut arrival_edge_skipped = false;
        for edge in self.edges(vertex) {
            let next = &edge.destination;
            // Skip the one mirror of the edge used to reach this vertex.
            if !self.is_directed() && !arrival_edge_skipped && Some(next) == parent {
                arrival_edge_skipped = true;
                continue;
            }
            if on_path.contains(next) {
                return true;
            }
            if !visited.contains(next) && self.cycle_from(next, Some(vertex), visited, on_path) {
                return true;
            }
        }

        on_path.remove(vertex);
        false
    }
}
