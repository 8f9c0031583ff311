//! Error types shared by the graph model, the estimators and the I/O helpers.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The graph cannot be used for cut estimation: too few vertices, asymmetric
    /// adjacency lists, self-loops or references to missing vertices.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A vertex id does not exist in the graph.
    #[error("vertex {0} not found")]
    VertexNotFound(usize),

    /// A parameter is outside of its valid range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed graph text.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn invalid_graph(msg: impl Into<String>) -> Self {
        Error::InvalidGraph(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub(crate) fn parse(line: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: msg.into(),
        }
    }
}

/// Result type for graph and cut estimation operations
pub type Result<T> = std::result::Result<T, Error>;
