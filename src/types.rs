use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, Result};

/// External identifier of a vertex. May be negative or zero.
pub type VertexId = i64;

/// A labelled vertex. Uniqueness of `id` is enforced by the owning graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub tag: String,
}

impl Vertex {
    /// Creates a vertex after validating its tag.
    pub fn new(id: VertexId, tag: &str, max_tag_len: usize) -> Result<Self> {
        validate_tag(tag, max_tag_len).map_err(|message| GraphError::InvalidDescriptor {
            message,
            descriptor: format!("id:{id} tag:{tag}"),
        })?;
        Ok(Self {
            id,
            tag: tag.to_string(),
        })
    }

    /// Parses a descriptor of the form `id:<id> tag:<tag>`.
    pub fn from_descriptor(descriptor: &str, max_tag_len: usize) -> Result<Self> {
        let invalid = |message: &str| GraphError::InvalidDescriptor {
            message: message.to_string(),
            descriptor: descriptor.to_string(),
        };

        let mut tokens = descriptor.split_whitespace();
        let id_token = tokens.next().ok_or_else(|| invalid("empty descriptor"))?;
        let tag_token = tokens.next().ok_or_else(|| invalid("missing tag field"))?;
        if tokens.next().is_some() {
            return Err(invalid("unexpected trailing fields"));
        }

        let id = id_token
            .strip_prefix("id:")
            .ok_or_else(|| invalid("expected 'id:' field"))?
            .parse::<VertexId>()
            .map_err(|_| invalid("id is not an integer"))?;
        let tag = tag_token
            .strip_prefix("tag:")
            .ok_or_else(|| invalid("expected 'tag:' field"))?;

        validate_tag(tag, max_tag_len).map_err(|message| GraphError::InvalidDescriptor {
            message,
            descriptor: descriptor.to_string(),
        })?;

        Ok(Self {
            id,
            tag: tag.to_string(),
        })
    }

    /// Returns the descriptor form accepted by [`Vertex::from_descriptor`].
    pub fn descriptor(&self) -> String {
        format!("id:{} tag:{}", self.id, self.tag)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.id, self.tag)
    }
}

fn validate_tag(tag: &str, max_tag_len: usize) -> std::result::Result<(), String> {
    if tag.is_empty() {
        return Err("tag is empty".to_string());
    }
    if tag.chars().any(char::is_whitespace) {
        return Err("tag contains whitespace".to_string());
    }
    let len = tag.chars().count();
    if len > max_tag_len {
        return Err(format!("tag has {len} characters, limit is {max_tag_len}"));
    }
    Ok(())
}

/// Frontier discipline used by a reachability search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStrategy {
    BreadthFirst,
    DepthFirst,
}

#[allow(clippy::should_implement_trait)]
impl SearchStrategy {
    /// Returns the string representation of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::BreadthFirst => "bfs",
            SearchStrategy::DepthFirst => "dfs",
        }
    }

    /// Parses a string into a `SearchStrategy`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<SearchStrategy> {
        match s {
            "bfs" => Some(SearchStrategy::BreadthFirst),
            "dfs" => Some(SearchStrategy::DepthFirst),
            _ => None,
        }
    }
}

/// Result of a completed search. Not finding a path is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found,
    NotFound,
}

#[allow(clippy::should_implement_trait)]
impl SearchOutcome {
    /// Returns the string representation of this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOutcome::Found => "found",
            SearchOutcome::NotFound => "not_found",
        }
    }

    /// Parses a string into a `SearchOutcome`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<SearchOutcome> {
        match s {
            "found" => Some(SearchOutcome::Found),
            "not_found" => Some(SearchOutcome::NotFound),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found)
    }
}

/// Everything a search run reports back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub strategy: SearchStrategy,
    pub from: VertexId,
    pub to: VertexId,
    pub outcome: SearchOutcome,
    /// Vertices in the order they were taken off the frontier.
    pub visited: Vec<Vertex>,
}

/// Size summary of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
}
