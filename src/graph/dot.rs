//! DOT format export for graph visualization.
//!
//! Renders a graph in the DOT language understood by Graphviz tools. This
//! is a diagnostic surface, not a machine-parseable interchange format; the
//! vertex order follows the internal hash map and is not stable between
//! runs.

use std::collections::HashMap;
use std::hash::Hash;
use std::io::Write;

use crate::graph::{Graph, GraphKind};
use crate::Result;

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// Handles the characters with special meaning in DOT: quotes, backslashes,
/// newlines and angle brackets.
///
/// # Examples
///
/// ```rust
/// use trellis::graph::escape_dot;
///
/// assert_eq!(escape_dot("node \"x\""), "node \\\"x\\\"");
/// assert_eq!(escape_dot("List<T>"), "List\\<T\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + std::fmt::Display,
{
    /// Renders the graph as a DOT document.
    ///
    /// Directed graphs produce a `digraph` with `->` edges; undirected
    /// graphs produce a `graph` with `--` edges, emitting each mirrored
    /// pair exactly once. Edge weights become `label` attributes.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let (header, arrow) = match self.kind() {
            GraphKind::Directed => ("digraph", "->"),
            GraphKind::Undirected => ("graph", "--"),
        };
        let mut out = String::new();
        out.push_str(header);
        out.push_str(" {\n");

        for vertex in self.vertices() {
            out.push_str(&format!("    \"{}\";\n", escape_dot(&vertex.to_string())));
        }

        // For undirected graphs each stored edge is half of a mirrored
        // pair; emitting one half marks the reverse half for skipping.
        let mut skip: HashMap<(&V, &V), usize> = HashMap::new();
        for vertex in self.vertices() {
            for edge in self.edges(vertex) {
                let pair = (&edge.source, &edge.destination);
                if !self.is_directed() {
                    if let Some(pending) = skip.get_mut(&pair) {
                        if *pending > 0 {
                            *pending -= 1;
                            continue;
                        }
                    }
                    *skip.entry((&edge.destination, &edge.source)).or_insert(0) += 1;
                }
                out.push_str(&format!(
                    "    \"{}\" {} \"{}\" [label=\"{}\"];\n",
                    escape_dot(&edge.source.to_string()),
                    arrow,
                    escape_dot(&edge.destination.to_string()),
                    edge.weight,
                ));
            }
        }

        out.push_str("}\n");
        out
    }

    /// Writes the DOT rendering of the graph to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the writer fails.
    pub fn write_dot<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dot_basic() {
        assert_eq!(escape_dot("hello"), "hello");
    }

    #[test]
    fn test_escape_dot_quotes_and_backslash() {
        assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_dot("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_dot_newlines() {
        assert_eq!(escape_dot("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_dot("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn test_escape_dot_angle_brackets() {
        assert_eq!(escape_dot("List<T>"), "List\\<T\\>");
    }

    #[test]
    fn test_directed_dot_output() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_edge_weighted("a", "b", 2.0);

        let dot = graph.to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("\"a\" -> \"b\" [label=\"2\"];"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_undirected_dot_emits_each_edge_once() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge("a", "b");

        let dot = graph.to_dot();
        assert!(dot.starts_with("graph {"));
        let edge_lines = dot.lines().filter(|line| line.contains("--")).count();
        assert_eq!(edge_lines, 1);
    }

    #[test]
    fn test_undirected_parallel_edges_all_emitted() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge("a", "b");
        graph.add_edge("a", "b");

        let dot = graph.to_dot();
        let edge_lines = dot.lines().filter(|line| line.contains("--")).count();
        assert_eq!(edge_lines, 2);
    }

    #[test]
    fn test_undirected_self_loop_emitted_once() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge("a", "a");

        let dot = graph.to_dot();
        let edge_lines = dot.lines().filter(|line| line.contains("--")).count();
        assert_eq!(edge_lines, 1);
    }

    #[test]
    fn test_write_dot_to_buffer() {
        let mut graph: Graph<&str> = Graph::directed();
        graph.add_edge("a", "b");

        let mut buffer = Vec::new();
        graph.write_dot(&mut buffer).expect("writing to Vec");
        assert_eq!(String::from_utf8(buffer).unwrap(), graph.to_dot());
    }
}
