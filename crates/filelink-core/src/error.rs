//! Error types for filelink-core

use thiserror::Error;

/// Result type alias using filelink-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in filelink-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Account-management host callback failed
    #[error("Host error: {0}")]
    Host(String),
}
