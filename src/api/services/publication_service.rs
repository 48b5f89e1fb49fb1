//! Issue creation, submission assignment, and publication.
//!
//! Publication is the one operation that mutates many submission rows at
//! once; the bulk flip runs inside the storage transaction and is guarded
//! by `status != PUBLISHED`, which is also what makes re-publishing safe.
//! Page-cache invalidation happens after commit and is fire-and-forget.

use super::error::WorkflowError;
use super::page_cache::PageInvalidator;
use crate::models::{
    Actor, AppRole, Issue, Journal, Submission, SubmissionStatus, normalize_issue_image_url,
};
use crate::storage::{NewIssue, WorkflowStore};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for issue and publication management.
pub struct PublicationService {
    store: Arc<dyn WorkflowStore>,
    pages: Arc<dyn PageInvalidator>,
}

impl PublicationService {
    pub fn new(store: Arc<dyn WorkflowStore>, pages: Arc<dyn PageInvalidator>) -> Self {
        Self { store, pages }
    }

    /// Resolve a journal and enforce ownership: ADMIN manages every journal,
    /// an EDITOR only the one whose `editor_id` matches.
    async fn owned_journal(
        &self,
        journal_id: Uuid,
        actor: &Actor,
    ) -> Result<Journal, WorkflowError> {
        if !actor.is_editorial() {
            return Err(WorkflowError::Forbidden);
        }

        let journal = self
            .store
            .get_journal(journal_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Journal", journal_id))?;

        if actor.role == AppRole::Editor && journal.editor_id != actor.id {
            return Err(WorkflowError::Forbidden);
        }

        Ok(journal)
    }

    /// Create a draft issue for a journal.
    ///
    /// Duplicate (journal, volume, number, year) surfaces as `Conflict`
    /// rather than being swallowed.
    pub async fn create_issue(
        &self,
        journal_id: Uuid,
        volume: i32,
        issue_number: i32,
        year: i32,
        title: Option<String>,
        featured_image: Option<&str>,
        actor: &Actor,
    ) -> Result<Issue, WorkflowError> {
        self.owned_journal(journal_id, actor).await?;

        let featured_image_url = match featured_image {
            Some(raw) if !raw.trim().is_empty() => Some(
                normalize_issue_image_url(raw)
                    .ok_or_else(|| WorkflowError::InvalidImage(raw.to_string()))?,
            ),
            _ => None,
        };

        let issue = self
            .store
            .create_issue(NewIssue {
                journal_id,
                volume,
                issue_number,
                year,
                title: title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
                featured_image_url,
            })
            .await?;

        info!(
            "Issue vol {} no {} ({}) created for journal {} by {}",
            volume, issue_number, year, journal_id, actor.id
        );
        Ok(issue)
    }

    /// Assign an accepted submission to an issue.
    ///
    /// The submission must be ACCEPTED or PUBLISHED and must belong to the
    /// issue's journal. Assigning to an already-published issue publishes
    /// the submission immediately.
    pub async fn assign_submission_to_issue(
        &self,
        issue_id: Uuid,
        submission_id: Uuid,
        actor: &Actor,
    ) -> Result<Submission, WorkflowError> {
        let issue = self
            .store
            .get_issue(issue_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Issue", issue_id))?;

        let journal = self.owned_journal(issue.journal_id, actor).await?;

        let submission = self
            .store
            .get_submission(submission_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Submission", submission_id))?;

        if !matches!(
            submission.status,
            SubmissionStatus::Accepted | SubmissionStatus::Published
        ) {
            return Err(WorkflowError::Conflict(format!(
                "Submission {} is {} and cannot be assigned to an issue",
                submission_id,
                submission.status.as_str()
            )));
        }

        if submission.journal_id != issue.journal_id {
            return Err(WorkflowError::Conflict(format!(
                "Submission {} belongs to a different journal than issue {}",
                submission_id, issue_id
            )));
        }

        let next_status = if issue.is_published() {
            SubmissionStatus::Published
        } else {
            SubmissionStatus::Accepted
        };

        let updated = self
            .store
            .set_submission_issue(submission_id, issue_id, next_status)
            .await?;

        info!(
            "Submission {} assigned to issue {} by {}",
            submission_id, issue_id, actor.id
        );

        if issue.is_published() {
            self.pages
                .invalidate_publication_paths(&journal.slug, issue.id);
        }

        Ok(updated)
    }

    /// Publish an issue: set `published_at` and flip every assigned
    /// submission that is not yet PUBLISHED to PUBLISHED, atomically.
    ///
    /// Publishing an already-published issue is a no-op that preserves the
    /// original timestamp.
    pub async fn publish_issue(
        &self,
        issue_id: Uuid,
        actor: &Actor,
    ) -> Result<Issue, WorkflowError> {
        let issue = self
            .store
            .get_issue(issue_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Issue", issue_id))?;

        let journal = self.owned_journal(issue.journal_id, actor).await?;

        let (published, flipped) = self
            .store
            .publish_issue(issue_id, chrono::Utc::now())
            .await?;

        info!(
            "Issue {} published by {} ({} submissions flipped to PUBLISHED)",
            issue_id, actor.id, flipped
        );

        self.pages
            .invalidate_publication_paths(&journal.slug, issue_id);

        Ok(published)
    }

    /// Replace an issue's featured image.
    ///
    /// Accepts a root-relative path or an http(s) URL; empty input clears
    /// the image. Not a workflow transition, but it shares the ownership
    /// check and invalidates public pages when the issue is already live.
    pub async fn update_issue_featured_image(
        &self,
        issue_id: Uuid,
        image: &str,
        actor: &Actor,
    ) -> Result<Issue, WorkflowError> {
        let issue = self
            .store
            .get_issue(issue_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Issue", issue_id))?;

        let journal = self.owned_journal(issue.journal_id, actor).await?;

        let normalized = normalize_issue_image_url(image);
        if !image.trim().is_empty() && normalized.is_none() {
            return Err(WorkflowError::InvalidImage(image.to_string()));
        }

        let updated = self
            .store
            .update_issue_featured_image(issue_id, normalized)
            .await?;

        if updated.is_published() {
            self.pages
                .invalidate_publication_paths(&journal.slug, issue_id);
        }

        Ok(updated)
    }

    /// Fetch an issue by ID.
    pub async fn get_issue(&self, issue_id: Uuid) -> Result<Issue, WorkflowError> {
        self.store
            .get_issue(issue_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Issue", issue_id))
    }

    /// List the submissions assigned to an issue.
    pub async fn list_issue_submissions(
        &self,
        issue_id: Uuid,
    ) -> Result<Vec<Submission>, WorkflowError> {
        Ok(self.store.list_submissions_for_issue(issue_id).await?)
    }
}
