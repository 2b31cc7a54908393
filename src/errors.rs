use thiserror::Error;

use crate::types::VertexId;

/// Errors that can occur while building or searching a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("capacity exhausted: {what} holds at most {limit} entries")]
    Capacity { what: &'static str, limit: usize },

    #[error("vertex not found: {id}")]
    VertexNotFound { id: VertexId },

    #[error("self-loop rejected on vertex {id}")]
    SelfLoop { id: VertexId },

    #[error("invalid vertex descriptor: {message} (descriptor: {descriptor:?})")]
    InvalidDescriptor { message: String, descriptor: String },

    #[error("parse error: {message} (line: {line:?})")]
    Parse { message: String, line: Option<usize> },

    #[error("file error: {message} (path: {path})")]
    File { message: String, path: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `GraphError`.
pub type Result<T> = std::result::Result<T, GraphError>;
