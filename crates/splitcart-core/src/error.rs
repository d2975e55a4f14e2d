use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("List not loaded")]
    ListNotLoaded,
    #[error("List not found: {0}")]
    ListNotFound(String),
    #[error("Member not found: {0}")]
    MemberNotFound(String),
    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
