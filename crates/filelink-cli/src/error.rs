use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] filelink_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(
        "No account selected. Pass --account or --page-url, set FILELINK_ACCOUNT, or run `filelink config init --default-account <ID>`."
    )]
    AccountNotSelected,
    #[error("{0}")]
    LoadFailed(String),
    #[error("{0}")]
    SaveFailed(String),
    #[error("{0}")]
    InvalidField(String),
}
