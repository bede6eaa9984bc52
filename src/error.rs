//! Errors surfaced by generation runs and traversals.
//!
//! Misuse of the graph API itself (unknown IDs, connecting from an unsettled vertex)
//! is a bug in the caller and panics instead.

use crate::graph::VertexId;

/// Why a single shortest-path job produced no path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// The target cannot be reached from the source.
    #[error("no path from {from:?} to {to:?}")]
    Unreachable { from: VertexId, to: VertexId },

    /// The search panicked; the message is the panic payload if it was a string.
    #[error("search for a path to {to:?} panicked: {message}")]
    JobPanicked { to: VertexId, message: String },
}

impl TraversalError {
    /// The vertex the failed job was looking for.
    pub fn target(&self) -> VertexId {
        match self {
            TraversalError::Unreachable { to, .. } | TraversalError::JobPanicked { to, .. } => *to,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("generating graph #{index} panicked: {message}")]
    GenerationPanicked { index: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
