//! Storage module for the workflow core.
//!
//! Provides the `WorkflowStore` trait plus PostgreSQL and in-memory backends.

pub mod error;
pub mod traits;

// Storage backend implementations
pub mod memory;
pub mod postgres;

pub use error::StorageError;
pub use memory::MemoryWorkflowStore;
pub use postgres::PostgresWorkflowStore;
pub use traits::{NewIssue, NewNotification, ReviewSubmission, WorkflowStore};
