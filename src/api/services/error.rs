//! Workflow error taxonomy.
//!
//! Authorization and input validation are checked synchronously before any
//! mutation; multi-row mutations either fully commit or fully abort, so a
//! returned error never means a half-applied transition.

use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by the workflow operation surface.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Role or ownership check failed.
    #[error("Forbidden")]
    Forbidden,
    /// Referenced entity absent.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
    /// Status outside the allowed domain for the operation.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    /// Recommendation outside the allowed domain.
    #[error("Invalid recommendation: {0}")]
    InvalidRecommendation(String),
    /// Featured image is neither a root-relative path nor an http(s) URL.
    #[error("Invalid image: {0}")]
    InvalidImage(String),
    /// Required field missing or malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Uniqueness or state-precondition violation.
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Backend failure; no partial state was committed.
    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for WorkflowError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound {
                entity_type,
                entity_id,
            } => Self::NotFound {
                entity: entity_type,
                id: entity_id,
            },
            StorageError::Conflict(msg) => Self::Conflict(msg),
            other => Self::Storage(other),
        }
    }
}

impl WorkflowError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}
