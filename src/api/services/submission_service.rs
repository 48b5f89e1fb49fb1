//! Submission lifecycle management.
//!
//! Owns submission creation and the administrative status override. The
//! override deliberately does not police transition edges: an ADMIN or
//! EDITOR may move a submission between any of the six editable statuses.
//! Component-triggered transitions (review assignment, decisions, issue
//! publication) live in their own services.

use super::error::WorkflowError;
use crate::models::{Actor, AppRole, NewSubmission, Submission, SubmissionStatus};
use crate::storage::WorkflowStore;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for submission creation and status management.
pub struct SubmissionService {
    store: Arc<dyn WorkflowStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn WorkflowStore>) -> Self {
        Self { store }
    }

    /// Create a manuscript submission in `SUBMITTED` status.
    ///
    /// The submission row and its contributor rows are written in one
    /// transaction; the actor becomes the submission's author.
    pub async fn create_submission(
        &self,
        submission: NewSubmission,
        actor: &Actor,
    ) -> Result<Submission, WorkflowError> {
        if !matches!(
            actor.role,
            AppRole::Admin | AppRole::Editor | AppRole::Author
        ) {
            return Err(WorkflowError::Forbidden);
        }

        if submission.title.trim().is_empty() || submission.r#abstract.trim().is_empty() {
            return Err(WorkflowError::InvalidInput(
                "Title and abstract are required".to_string(),
            ));
        }

        self.store
            .get_journal(submission.journal_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Journal", submission.journal_id))?;

        let created = self
            .store
            .create_submission(actor.id, submission, chrono::Utc::now())
            .await?;

        info!(
            "Submission {} created by {} for journal {}",
            created.id, actor.id, created.journal_id
        );
        Ok(created)
    }

    /// Administrative status override.
    ///
    /// `next_status` must be one of the six editable values (DRAFT is not
    /// settable). No notification is dispatched on this path; that is what
    /// distinguishes it from the decision-driven transitions.
    pub async fn set_status(
        &self,
        submission_id: Uuid,
        next_status: SubmissionStatus,
        actor: &Actor,
    ) -> Result<Submission, WorkflowError> {
        if !actor.is_editorial() {
            return Err(WorkflowError::Forbidden);
        }

        if !next_status.is_editable() {
            return Err(WorkflowError::InvalidStatus(
                next_status.as_str().to_string(),
            ));
        }

        let updated = self
            .store
            .update_submission_status(submission_id, next_status)
            .await?;

        info!(
            "Submission {} status set to {} by {}",
            submission_id,
            next_status.as_str(),
            actor.id
        );
        Ok(updated)
    }

    /// Fetch a submission by ID.
    pub async fn get_submission(&self, submission_id: Uuid) -> Result<Submission, WorkflowError> {
        self.store
            .get_submission(submission_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Submission", submission_id))
    }
}
