//! Corpdesk error type.

use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = std::result::Result<T, CorpdeskError>;

/// All errors the Corpdesk crates can surface.
///
/// The retrieval and composition path is deliberately infallible:
/// degenerate input produces an empty or generic output, not an error.
/// Only I/O and configuration parsing can fail.
#[derive(Debug, Error)]
pub enum CorpdeskError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),
}
