//! Graphviz DOT export.
//!
//! Symmetric graphs are written as an undirected `graph` with one `--` edge
//! per vertex pair; anything else is written as a `digraph`.  Highlighted
//! vertices and edges are drawn in red.

use std::io;

use crate::{graph::WeightedGraph, highlight::Highlight};

const HIGHLIGHT_COLOR: &str = "red";

/// Errors that can occur during DOT generation.
#[derive(Debug, thiserror::Error)]
pub enum DotError {
    /// IO error during rendering.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Quotes a label as a DOT string id.
fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Writes `graph` in DOT format, emphasizing the parts named by `highlight`.
///
/// In an undirected rendering an edge counts as highlighted if either of its
/// directions is.
pub fn write_dot<G: WeightedGraph>(
    graph: &G,
    highlight: Option<&Highlight>,
    out: &mut impl io::Write,
) -> Result<(), DotError> {
    let empty = Highlight::default();
    let highlight = highlight.unwrap_or(&empty);
    let undirected = graph.is_symmetric();
    let (keyword, arrow) = if undirected {
        ("graph", "--")
    } else {
        ("digraph", "->")
    };

    writeln!(out, "{keyword} G {{")?;
    for label in graph.labels() {
        if highlight.has_vertex(label) {
            writeln!(out, "    {} [color={HIGHLIGHT_COLOR}];", quote(label))?;
        } else {
            writeln!(out, "    {};", quote(label))?;
        }
    }

    for edge in graph.edges() {
        if undirected && edge.from > edge.to {
            continue;
        }
        let (from, to) = (graph.label(edge.from), graph.label(edge.to));
        let marked =
            highlight.has_edge(from, to) || (undirected && highlight.has_edge(to, from));
        write!(
            out,
            "    {} {arrow} {} [label=\"{}\"",
            quote(from),
            quote(to),
            edge.weight
        )?;
        if marked {
            write!(out, ", color={HIGHLIGHT_COLOR}, penwidth=2")?;
        }
        writeln!(out, "];")?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Renders `graph` to a DOT string.
pub fn to_dot<G: WeightedGraph>(graph: &G, highlight: Option<&Highlight>) -> String {
    let mut output = Vec::new();
    // Writing to a Vec cannot fail.
    if write_dot(graph, highlight, &mut output).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&output).into_owned()
}
