//! Storage error types for the workflow storage backends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage operation errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {entity_id}")]
    NotFound {
        entity_type: String,
        entity_id: String,
    },
    /// Unique key violation (duplicate review assignment, duplicate issue)
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Database connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
    /// General storage error
    #[error("Storage error: {0}")]
    Other(String),
}

impl StorageError {
    pub fn not_found(entity_type: &str, entity_id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
        }
    }
}
