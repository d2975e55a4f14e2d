use std::result::Result as StdResult;

use splitcart_config::ConfigError;
use splitcart_core::CoreError;
use thiserror::Error;

/// Unified error type for app-level state and persistence failures.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("List not loaded")]
    ListNotLoaded,
    #[error("Member not found: {0}")]
    MemberNotFound(String),
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, AppError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ListNotLoaded => AppError::ListNotLoaded,
            CoreError::ListNotFound(message)
            | CoreError::Storage(message)
            | CoreError::Serde(message) => AppError::StorageError(message),
            CoreError::MemberNotFound(message) => AppError::MemberNotFound(message),
            CoreError::ItemNotFound(id) => AppError::ItemNotFound(id.to_string()),
            CoreError::InvalidOperation(message) | CoreError::Validation(message) => {
                AppError::InvalidInput(message)
            }
            CoreError::Io(err) => AppError::StorageError(err.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => AppError::StorageError(io.to_string()),
            ConfigError::Serde(message) => AppError::ConfigError(message),
            missing @ ConfigError::BackupMissing(_) => AppError::ConfigError(missing.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(AppError::from(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(AppError::from(err))
    }
}
