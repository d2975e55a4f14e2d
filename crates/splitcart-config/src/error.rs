use std::io;

use thiserror::Error;

/// Errors produced while loading, saving, or restoring configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("configuration is not valid JSON: {0}")]
    Serde(String),

    #[error("configuration backup `{0}` not found")]
    BackupMissing(String),
}
