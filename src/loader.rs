//! Reads graphs from the plain-text adjacency format:
//!
//! ```text
//! <vertex_count>
//! id:<id> tag:<tag>
//! ...
//! <origId> <destId>
//! ...
//! ```
//!
//! Vertex lines are read until a line no longer starts with `id:`. The rest
//! is read as edge pairs until the input ends or a line is malformed. Edges
//! that name unknown ids, or that would be self-loops, are skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::GraphConfig;
use crate::errors::{GraphError, Result};
use crate::graph::Graph;
use crate::types::VertexId;

/// Parses a graph from text.
pub fn parse_graph(text: &str, config: &GraphConfig) -> Result<Graph> {
    let mut graph = Graph::with_config(config);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .peekable();

    let declared = match lines.next() {
        Some((number, header)) => header.parse::<usize>().map_err(|_| GraphError::Parse {
            message: format!("expected vertex count, got {:?}", header),
            line: Some(number),
        })?,
        None => {
            return Err(GraphError::Parse {
                message: "input is empty".to_string(),
                line: None,
            })
        }
    };

    let mut vertex_lines = 0usize;
    while let Some(&(number, line)) = lines.peek() {
        if !line.starts_with("id:") {
            break;
        }
        lines.next();
        graph.new_vertex(line).map_err(|e| match e {
            GraphError::InvalidDescriptor { message, .. } => GraphError::Parse {
                message,
                line: Some(number),
            },
            other => other,
        })?;
        vertex_lines += 1;
    }

    if vertex_lines != declared {
        warn!(
            declared,
            found = vertex_lines,
            "vertex count header does not match vertex lines"
        );
    }

    for (number, line) in lines {
        let Some((orig, dest)) = parse_edge(line) else {
            warn!(line = number, "malformed edge line, ignoring the rest of the input");
            break;
        };
        match graph.new_edge(orig, dest) {
            Ok(()) => {}
            Err(GraphError::VertexNotFound { id }) => {
                debug!(line = number, id, "edge references unknown vertex, skipped");
            }
            Err(GraphError::SelfLoop { id }) => {
                warn!(line = number, id, "self-loop edge skipped");
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Reads and parses a graph file.
pub fn read_graph_file(path: &Path, config: &GraphConfig) -> Result<Graph> {
    let text = fs::read_to_string(path).map_err(|e| GraphError::File {
        message: e.to_string(),
        path: path.display().to_string(),
    })?;
    parse_graph(&text, config)
}

fn parse_edge(line: &str) -> Option<(VertexId, VertexId)> {
    let mut tokens = line.split_whitespace();
    let orig = tokens.next()?.parse().ok()?;
    let dest = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((orig, dest))
}
