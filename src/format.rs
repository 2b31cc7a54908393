use std::io::Write;

use crate::errors::Result;
use crate::graph::Graph;
use crate::types::SearchReport;

/// Formats the adjacency listing: one line per vertex in slot order, the
/// vertex followed by every vertex it has an edge to. Each vertex, the
/// listed vertex included, is followed by one space:
///
/// ```text
/// "[1, a]: [2, b] "
/// "[2, b]: [3, c] "
/// "[3, c]: "
/// ```
pub fn format_adjacency(graph: &Graph) -> String {
    let mut out = String::new();
    for (slot, vertex) in graph.vertices().iter().enumerate() {
        out.push_str(&format!("{}: ", vertex));
        for j in graph.neighbor_slots(slot) {
            out.push_str(&format!("{} ", graph.vertices()[j]));
        }
        out.push('\n');
    }
    out
}

/// Writes the adjacency listing to `out`.
///
/// Returns the number of non-whitespace characters written.
pub fn write_adjacency<W: Write>(out: &mut W, graph: &Graph) -> Result<usize> {
    let text = format_adjacency(graph);
    out.write_all(text.as_bytes())?;
    Ok(text.chars().filter(|c| *c != ' ' && *c != '\n').count())
}

/// Serializes the graph in the format read by [`crate::loader::parse_graph`].
///
/// Duplicate edge insertions are written once since the matrix stores
/// presence only.
pub fn to_listing(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", graph.vertex_count()));
    for vertex in graph.vertices() {
        out.push_str(&vertex.descriptor());
        out.push('\n');
    }
    for (orig, dest) in graph.edges() {
        out.push_str(&format!("{} {}\n", orig, dest));
    }
    out
}

/// Formats the body of a search section: each visited vertex on its own
/// line, then the result line.
pub fn format_report(report: &SearchReport) -> String {
    let mut out = String::new();
    for vertex in &report.visited {
        out.push_str(&format!("{}\n", vertex));
    }
    if report.outcome.is_found() {
        out.push_str(&format!("Path from {} to {} found\n", report.from, report.to));
    } else {
        out.push_str(&format!(
            "No path from {} to {}\n",
            report.from, report.to
        ));
    }
    out
}
