//! Adjacency-list graphs over hashable vertex values.
//!
//! This module provides [`Graph`], a mutable multigraph keyed directly by
//! vertex values (anything `Eq + Hash + Clone`); there is no separate vertex
//! object and no index indirection at the API surface. Each vertex maps to
//! the ordered list of its outgoing [`Edge`]s.
//!
//! # Directed vs. Undirected
//!
//! The [`GraphKind`] chosen at construction is fixed for the life of the
//! graph. An undirected graph stores every logical edge as a mirrored pair -
//! one stored edge per direction, always added and removed together - and
//! reports [`Graph::edge_count`] as the number of pairs.
//!
//! # Multigraph Semantics
//!
//! Adding the same edge twice creates parallel edges; nothing deduplicates.
//! [`Graph::remove_edge`] removes all parallel edges between its endpoints.
//!
//! # Algorithms
//!
//! Traversal (BFS/DFS with early-stop visitors, unweighted shortest path,
//! connectivity) lives in this module's `traversal` submodule; weighted
//! shortest paths, cycle detection and topological ordering live under
//! [`algorithms`]. Graphviz export is provided by [`Graph::to_dot`] and
//! [`Graph::write_dot`].

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

pub mod algorithms;
mod dot;
mod edge;
mod traversal;

pub use algorithms::ShortestPath;
pub use dot::escape_dot;
pub use edge::{Edge, DEFAULT_WEIGHT};

/// Whether a graph interprets its edges as one-way or two-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Edges point from source to destination only.
    Directed,
    /// Every edge is stored as a mirrored pair and traversable both ways.
    Undirected,
}

/// A mutable adjacency-list multigraph.
///
/// Vertices are identified by value; edges carry an `f64` weight defaulting
/// to 1.0. Absent vertices never cause failures: queries against them return
/// empty slices, `None` or zero, and traversals from them are no-ops.
///
/// # Examples
///
/// ```rust
/// use trellis::graph::Graph;
///
/// let mut graph: Graph<&str> = Graph::undirected();
/// graph.add_edge("a", "b");
/// graph.add_edge_weighted("b", "c", 4.0);
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2); // mirrored pairs count once
/// assert!(graph.has_edge(&"b", &"a"));
/// ```
///
/// # Thread Safety
///
/// `Graph<V>` is `Send` and `Sync` when `V` is; there is no internal
/// synchronization.
#[derive(Clone)]
pub struct Graph<V>
where
    V: Eq + Hash + Clone,
{
    kind: GraphKind,
    adjacency: HashMap<V, Vec<Edge<V>>>,
    /// Count of stored directed edges (mirrored pairs count twice).
    stored_edges: usize,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty graph of the given kind.
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            adjacency: HashMap::new(),
            stored_edges: 0,
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Creates an empty graph with pre-allocated room for `vertices` entries.
    #[must_use]
    pub fn with_capacity(kind: GraphKind, vertices: usize) -> Self {
        Graph {
            kind,
            adjacency: HashMap::with_capacity(vertices),
            stored_edges: 0,
        }
    }

    /// Returns the kind fixed at construction.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns `true` for a directed graph.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Adds a vertex with no edges. Idempotent: re-adding is a no-op.
    ///
    /// # Complexity
    ///
    /// O(1).
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Adds an edge with the default weight of 1.0.
    ///
    /// Both endpoints are inserted as vertices if absent. In an undirected
    /// graph the mirrored edge is stored too. Duplicate calls create
    /// parallel edges.
    ///
    /// # Complexity
    ///
    /// O(1).
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_edge_weighted(from, to, DEFAULT_WEIGHT);
    }

    /// Adds an edge with an explicit weight.
    ///
    /// See [`Graph::add_edge`] for the endpoint and mirroring semantics.
    pub fn add_edge_weighted(&mut self, from: V, to: V, weight: f64) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(Edge::new(from.clone(), to.clone(), weight));
        self.stored_edges += 1;
        if !self.is_directed() {
            self.adjacency
                .entry(to.clone())
                .or_default()
                .push(Edge::new(to, from, weight));
            self.stored_edges += 1;
        }
    }

    /// Removes a vertex and every edge that touches it.
    ///
    /// Returns `false` if the vertex was not present. The vertex's own
    /// adjacency entry is dropped and every other vertex's list is scrubbed
    /// of edges targeting it.
    ///
    /// # Complexity
    ///
    /// O(V + E).
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(own_edges) = self.adjacency.remove(vertex) else {
            return false;
        };
        self.stored_edges -= own_edges.len();
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|edge| edge.destination != *vertex);
            self.stored_edges -= before - edges.len();
        }
        true
    }

    /// Removes every edge between `from` and `to`.
    ///
    /// Returns `false` if no such edge existed. All parallel edges between
    /// the endpoints are removed; in an undirected graph both directions
    /// are cleared together.
    ///
    /// # Complexity
    ///
    /// O(degree).
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let mut removed = 0;
        if let Some(edges) = self.adjacency.get_mut(from) {
            let before = edges.len();
            edges.retain(|edge| edge.destination != *to);
            removed += before - edges.len();
        }
        // A self-loop's mirror lives in the same list and is already gone.
        if !self.is_directed() && from != to {
            if let Some(edges) = self.adjacency.get_mut(to) {
                let before = edges.len();
                edges.retain(|edge| edge.destination != *from);
                removed += before - edges.len();
            }
        }
        self.stored_edges -= removed;
        removed > 0
    }

    /// Returns `true` if the vertex is present.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the outgoing edges of a vertex; empty for an absent vertex.
    #[must_use]
    pub fn edges(&self, from: &V) -> &[Edge<V>] {
        self.adjacency.get(from).map_or(&[], Vec::as_slice)
    }

    /// Returns an iterator over the direct successors of a vertex.
    ///
    /// Parallel edges yield their destination once per edge.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> {
        self.edges(vertex).iter().map(|edge| &edge.destination)
    }

    /// Returns `true` if at least one edge runs from `from` to `to`.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edges(from).iter().any(|edge| edge.destination == *to)
    }

    /// Returns the weight of the first stored edge from `from` to `to`.
    #[must_use]
    pub fn weight(&self, from: &V, to: &V) -> Option<f64> {
        self.edges(from)
            .iter()
            .find(|edge| edge.destination == *to)
            .map(|edge| edge.weight)
    }

    /// Returns the number of outgoing edges of a vertex; 0 when absent.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        self.edges(vertex).len()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    ///
    /// In an undirected graph each mirrored pair counts as one edge.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        if self.is_directed() {
            self.stored_edges
        } else {
            self.stored_edges / 2
        }
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns an iterator over all vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Looks up the stored key equal to `vertex`, tying the returned
    /// reference to the graph's lifetime for use in traversal bookkeeping.
    pub(crate) fn stored_vertex(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(key, _)| key)
    }
}

impl<V> fmt::Debug for Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.kind)
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

impl<V> fmt::Display for Graph<V>
where
    V: Eq + Hash + Clone + fmt::Display,
{
    /// Formats the adjacency structure for diagnostics, one vertex per line.
    ///
    /// Vertex order follows the internal hash map and is not stable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            GraphKind::Directed => "directed",
            GraphKind::Undirected => "undirected",
        };
        writeln!(
            f,
            "{kind} graph: {} vertices, {} edges",
            self.vertex_count(),
            self.edge_count()
        )?;
        for (vertex, edges) in &self.adjacency {
            write!(f, "  {vertex} ->")?;
            if edges.is_empty() {
                write!(f, " (none)")?;
            }
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {} ({})", edge.destination, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_vertex("a");
        graph.add_vertex("a");
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.contains_vertex(&"a"));
    }

    #[test]
    fn test_add_edge_inserts_endpoints() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_edge("a", "b");
        assert!(graph.contains_vertex(&"a"));
        assert!(graph.contains_vertex(&"b"));
        assert!(graph.has_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"b", &"a"));
    }

    #[test]
    fn test_undirected_edge_is_mirrored() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge_weighted("a", "b", 2.0);
        assert!(graph.has_edge(&"a", &"b"));
        assert!(graph.has_edge(&"b", &"a"));
        assert_eq!(graph.weight(&"a", &"b"), Some(2.0));
        assert_eq!(graph.weight(&"b", &"a"), Some(2.0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_edge("a", "b");
        graph.add_edge("a", "b");
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(&"a"), 2);
    }

    #[test]
    fn test_remove_edge_clears_parallels_and_mirror() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge("a", "b");
        graph.add_edge("a", "b");
        assert_eq!(graph.edge_count(), 2);

        assert!(graph.remove_edge(&"a", &"b"));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"b", &"a"));

        assert!(!graph.remove_edge(&"a", &"b"));
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_edge("a", "b");
        graph.add_edge("c", "b");
        graph.add_edge("b", "d");

        assert!(graph.remove_vertex(&"b"));
        assert!(!graph.contains_vertex(&"b"));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(&"a"), 0);
        assert_eq!(graph.degree(&"c"), 0);

        assert!(!graph.remove_vertex(&"b"));
    }

    #[test]
    fn test_remove_vertex_undirected_counts() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        graph.add_edge("a", "c");
        assert_eq!(graph.edge_count(), 3);

        assert!(graph.remove_vertex(&"b"));
        assert_eq!(graph.edge_count(), 1); // only a-c survives
        assert!(graph.has_edge(&"a", &"c"));
    }

    #[test]
    fn test_absent_vertex_queries_are_empty() {
        let graph: Graph<&str> = Graph::directed();
        assert!(graph.edges(&"missing").is_empty());
        assert_eq!(graph.neighbors(&"missing").count(), 0);
        assert_eq!(graph.weight(&"a", &"b"), None);
        assert_eq!(graph.degree(&"missing"), 0);
        assert!(!graph.has_edge(&"a", &"b"));
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge("a", "a");
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(&"a", &"a"));
        assert!(graph.remove_edge(&"a", &"a"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_clone_preserves_structure() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge_weighted("a", "b", 2.0);
        graph.add_edge("b", "c");

        let copy = graph.clone();
        assert_eq!(copy.vertex_count(), graph.vertex_count());
        assert_eq!(copy.edge_count(), graph.edge_count());
        for vertex in graph.vertices() {
            assert_eq!(copy.edges(vertex), graph.edges(vertex));
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_edge("a", "b");
        let copy = graph.clone();
        graph.add_edge("b", "c");
        assert_eq!(copy.vertex_count(), 2);
        assert_eq!(copy.edge_count(), 1);
    }

    #[test]
    fn test_display_mentions_kind_and_counts() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_edge("a", "b");
        let rendered = format!("{graph}");
        assert!(rendered.starts_with("directed graph: 2 vertices, 1 edges"));
        assert!(rendered.contains("a -> b (1)"));
    }
}
