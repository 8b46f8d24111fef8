//! Error types for Deckhand

use thiserror::Error;

/// Result type alias for Deckhand operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Deckhand
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Tool argument decode error: {0}")]
    ToolDecode(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Handoff target not registered: {0}")]
    HandoffNotFound(String),

    #[error("Tool-reasoning round bound exceeded ({rounds} rounds)")]
    LoopExceeded { rounds: usize },

    #[error("Deck store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the dispatch loop may recover from this error by feeding it
    /// back to the model as a tool-error message. Store and transport
    /// failures are excluded: those propagate to the caller.
    pub fn is_tool_recoverable(&self) -> bool {
        matches!(self, Error::ToolDecode(_) | Error::Tool(_))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
