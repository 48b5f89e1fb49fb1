//! Storage trait definitions for the workflow storage backends.
//!
//! The three compound operations (`create_submission`, `record_decision`,
//! `publish_issue`) touch more than one row and must be atomic inside the
//! backend: partial visibility of a multi-row write is a correctness
//! violation, not an implementation detail.

use crate::models::{
    AppRole, Contributor, DecisionStatus, EditorialDecision, Issue, Journal, NewSubmission,
    Notification, NotificationType, Review, ReviewRecommendation, Submission, SubmissionStatus,
    User,
};
use super::StorageError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fields a reviewer fills in when submitting a recommendation.
#[derive(Clone, Debug)]
pub struct ReviewSubmission {
    pub recommendation: ReviewRecommendation,
    /// Already parsed and clamped; None when no usable score was given.
    pub score: Option<i32>,
    pub comments_to_author: Option<String>,
    pub comments_to_editor: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Input for creating an issue.
#[derive(Clone, Debug)]
pub struct NewIssue {
    pub journal_id: Uuid,
    pub volume: i32,
    pub issue_number: i32,
    pub year: i32,
    pub title: Option<String>,
    pub featured_image_url: Option<String>,
}

/// Input for creating a notification row.
#[derive(Clone, Debug)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub r#type: NotificationType,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
}

/// Storage backend trait for workflow database operations.
#[async_trait::async_trait]
pub trait WorkflowStore: Send + Sync {
    // --- users ---

    /// Create a user (registration itself is out of scope; used by seeding
    /// and by the user-administration surface).
    async fn create_user(
        &self,
        email: String,
        name: Option<String>,
        role: AppRole,
    ) -> Result<User, StorageError>;

    /// Get a user by ID.
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, StorageError>;

    // --- journals ---

    /// Create a journal managed by the given editor.
    async fn create_journal(
        &self,
        name: String,
        slug: String,
        editor_id: Uuid,
    ) -> Result<Journal, StorageError>;

    /// Get a journal by ID.
    async fn get_journal(&self, journal_id: Uuid) -> Result<Option<Journal>, StorageError>;

    // --- submissions ---

    /// Create a submission and its contributor rows in one transaction.
    async fn create_submission(
        &self,
        author_id: Uuid,
        submission: NewSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<Submission, StorageError>;

    /// Get a submission (with contributors) by ID.
    async fn get_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Option<Submission>, StorageError>;

    /// Overwrite a submission's status.
    async fn update_submission_status(
        &self,
        submission_id: Uuid,
        status: SubmissionStatus,
    ) -> Result<Submission, StorageError>;

    /// Set a submission's issue and status together.
    async fn set_submission_issue(
        &self,
        submission_id: Uuid,
        issue_id: Uuid,
        status: SubmissionStatus,
    ) -> Result<Submission, StorageError>;

    /// List submissions assigned to an issue.
    async fn list_submissions_for_issue(
        &self,
        issue_id: Uuid,
    ) -> Result<Vec<Submission>, StorageError>;

    // --- reviews ---

    /// Create a pending review assignment. Duplicate (submission, reviewer)
    /// pairs surface as `Conflict` from the unique key.
    async fn create_review(
        &self,
        submission_id: Uuid,
        reviewer_id: Uuid,
    ) -> Result<Review, StorageError>;

    /// Get a review by ID.
    async fn get_review(&self, review_id: Uuid) -> Result<Option<Review>, StorageError>;

    /// Fill in a review's recommendation fields and set `submitted_at`.
    async fn submit_review(
        &self,
        review_id: Uuid,
        fields: ReviewSubmission,
    ) -> Result<Review, StorageError>;

    /// List reviews for a submission.
    async fn list_reviews_for_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<Review>, StorageError>;

    // --- editorial decisions ---

    /// Atomically update the submission status and append a decision row.
    /// Both writes commit together or neither does.
    async fn record_decision(
        &self,
        submission_id: Uuid,
        decided_by_id: Uuid,
        status: DecisionStatus,
        notes: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> Result<(EditorialDecision, Submission), StorageError>;

    /// List decisions for a submission, newest first.
    async fn list_decisions(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<EditorialDecision>, StorageError>;

    // --- issues ---

    /// Create an issue. Duplicate (journal, volume, issue_number, year)
    /// surfaces as `Conflict` from the unique key.
    async fn create_issue(&self, issue: NewIssue) -> Result<Issue, StorageError>;

    /// Get an issue by ID.
    async fn get_issue(&self, issue_id: Uuid) -> Result<Option<Issue>, StorageError>;

    /// Replace an issue's featured image (already normalized by the caller).
    async fn update_issue_featured_image(
        &self,
        issue_id: Uuid,
        featured_image_url: Option<String>,
    ) -> Result<Issue, StorageError>;

    /// Atomically set `published_at` and flip every assigned submission that
    /// is not yet PUBLISHED to PUBLISHED. Returns the issue and the number of
    /// submissions flipped. Publishing an already-published issue is a no-op
    /// that preserves the original timestamp and returns a zero count.
    async fn publish_issue(
        &self,
        issue_id: Uuid,
        published_at: DateTime<Utc>,
    ) -> Result<(Issue, u64), StorageError>;

    // --- notifications ---

    /// Create a notification row.
    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, StorageError>;

    /// Mark one notification as read; owner only.
    async fn mark_notification_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Notification, StorageError>;

    /// Mark all of a user's unread notifications as read; returns the count.
    async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<u64, StorageError>;

    /// Count unread notifications for a user.
    async fn unread_notification_count(&self, user_id: Uuid) -> Result<i64, StorageError>;

    /// List a user's notifications, newest first.
    async fn list_notifications(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Notification>, StorageError>;
}

/// Re-validate a submission's contributor ordering after a read: rows come
/// back sorted by sequence, and the sequence values are made dense again.
pub fn normalize_contributor_order(contributors: &mut Vec<Contributor>) {
    contributors.sort_by_key(|c| c.sequence);
    for (idx, contributor) in contributors.iter_mut().enumerate() {
        contributor.sequence = idx as i32;
    }
}
