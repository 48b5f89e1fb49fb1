//! In-memory storage backend implementation.
//!
//! Used by tests and by DB-less development mode when `DATABASE_URL` is not
//! set. Every operation takes the single state lock, so the compound
//! operations are trivially atomic: a failure before the final write leaves
//! the maps untouched because mutations are staged on owned values and only
//! inserted once all checks have passed.

use super::{
    StorageError,
    traits::{NewIssue, NewNotification, ReviewSubmission, WorkflowStore},
};
use crate::models::{
    AppRole, DecisionStatus, EditorialDecision, Issue, Journal, NewSubmission, Notification,
    Review, Submission, SubmissionStatus, User,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct MemoryState {
    users: HashMap<Uuid, User>,
    journals: HashMap<Uuid, Journal>,
    submissions: HashMap<Uuid, Submission>,
    reviews: HashMap<Uuid, Review>,
    decisions: Vec<EditorialDecision>,
    issues: HashMap<Uuid, Issue>,
    notifications: HashMap<Uuid, Notification>,
}

/// In-memory storage backend.
#[derive(Default)]
pub struct MemoryWorkflowStore {
    state: Mutex<MemoryState>,
}

impl MemoryWorkflowStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A poisoned lock means a panic mid-mutation; tests should fail loudly.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl WorkflowStore for MemoryWorkflowStore {
    async fn create_user(
        &self,
        email: String,
        name: Option<String>,
        role: AppRole,
    ) -> Result<User, StorageError> {
        let mut state = self.lock();

        if state.users.values().any(|u| u.email == email) {
            return Err(StorageError::Conflict(format!(
                "User with email {} already exists",
                email
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            email,
            name,
            role,
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, StorageError> {
        Ok(self.lock().users.get(&user_id).cloned())
    }

    async fn create_journal(
        &self,
        name: String,
        slug: String,
        editor_id: Uuid,
    ) -> Result<Journal, StorageError> {
        let mut state = self.lock();

        if state.journals.values().any(|j| j.slug == slug) {
            return Err(StorageError::Conflict(format!(
                "Journal with slug {} already exists",
                slug
            )));
        }

        let now = Utc::now();
        let journal = Journal {
            id: Uuid::new_v4(),
            name,
            slug,
            editor_id,
            created_at: now,
            updated_at: now,
        };
        state.journals.insert(journal.id, journal.clone());
        Ok(journal)
    }

    async fn get_journal(&self, journal_id: Uuid) -> Result<Option<Journal>, StorageError> {
        Ok(self.lock().journals.get(&journal_id).cloned())
    }

    async fn create_submission(
        &self,
        author_id: Uuid,
        submission: NewSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<Submission, StorageError> {
        let mut state = self.lock();

        if !state.journals.contains_key(&submission.journal_id) {
            return Err(StorageError::not_found("Journal", submission.journal_id));
        }

        let mut contributors = submission.contributors;
        super::traits::normalize_contributor_order(&mut contributors);

        let row = Submission {
            id: Uuid::new_v4(),
            journal_id: submission.journal_id,
            author_id,
            title: submission.title,
            r#abstract: submission.r#abstract,
            keywords: submission.keywords,
            manuscript_url: submission.manuscript_url,
            doi: None,
            status: SubmissionStatus::Submitted,
            issue_id: None,
            contributors,
            submitted_at: Some(submitted_at),
            created_at: submitted_at,
            updated_at: submitted_at,
        };
        state.submissions.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Option<Submission>, StorageError> {
        Ok(self.lock().submissions.get(&submission_id).cloned())
    }

    async fn update_submission_status(
        &self,
        submission_id: Uuid,
        status: SubmissionStatus,
    ) -> Result<Submission, StorageError> {
        let mut state = self.lock();
        let submission = state
            .submissions
            .get_mut(&submission_id)
            .ok_or_else(|| StorageError::not_found("Submission", submission_id))?;

        submission.status = status;
        submission.updated_at = Utc::now();
        Ok(submission.clone())
    }

    async fn set_submission_issue(
        &self,
        submission_id: Uuid,
        issue_id: Uuid,
        status: SubmissionStatus,
    ) -> Result<Submission, StorageError> {
        let mut state = self.lock();

        if !state.issues.contains_key(&issue_id) {
            return Err(StorageError::not_found("Issue", issue_id));
        }

        let submission = state
            .submissions
            .get_mut(&submission_id)
            .ok_or_else(|| StorageError::not_found("Submission", submission_id))?;

        submission.issue_id = Some(issue_id);
        submission.status = status;
        submission.updated_at = Utc::now();
        Ok(submission.clone())
    }

    async fn list_submissions_for_issue(
        &self,
        issue_id: Uuid,
    ) -> Result<Vec<Submission>, StorageError> {
        let state = self.lock();
        let mut rows: Vec<Submission> = state
            .submissions
            .values()
            .filter(|s| s.issue_id == Some(issue_id))
            .cloned()
            .collect();
        rows.sort_by_key(|s| s.created_at);
        Ok(rows)
    }

    async fn create_review(
        &self,
        submission_id: Uuid,
        reviewer_id: Uuid,
    ) -> Result<Review, StorageError> {
        let mut state = self.lock();

        if !state.submissions.contains_key(&submission_id) {
            return Err(StorageError::not_found("Submission", submission_id));
        }

        let duplicate = state
            .reviews
            .values()
            .any(|r| r.submission_id == submission_id && r.reviewer_id == reviewer_id);
        if duplicate {
            return Err(StorageError::Conflict(format!(
                "Reviewer {} is already assigned to submission {}",
                reviewer_id, submission_id
            )));
        }

        let review = Review {
            id: Uuid::new_v4(),
            submission_id,
            reviewer_id,
            recommendation: None,
            score: None,
            comments_to_author: None,
            comments_to_editor: None,
            submitted_at: None,
            created_at: Utc::now(),
        };
        state.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn get_review(&self, review_id: Uuid) -> Result<Option<Review>, StorageError> {
        Ok(self.lock().reviews.get(&review_id).cloned())
    }

    async fn submit_review(
        &self,
        review_id: Uuid,
        fields: ReviewSubmission,
    ) -> Result<Review, StorageError> {
        let mut state = self.lock();
        let review = state
            .reviews
            .get_mut(&review_id)
            .ok_or_else(|| StorageError::not_found("Review", review_id))?;

        review.recommendation = Some(fields.recommendation);
        review.score = fields.score;
        review.comments_to_author = fields.comments_to_author;
        review.comments_to_editor = fields.comments_to_editor;
        review.submitted_at = Some(fields.submitted_at);
        Ok(review.clone())
    }

    async fn list_reviews_for_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<Review>, StorageError> {
        let state = self.lock();
        let mut rows: Vec<Review> = state
            .reviews
            .values()
            .filter(|r| r.submission_id == submission_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.created_at);
        Ok(rows)
    }

    async fn record_decision(
        &self,
        submission_id: Uuid,
        decided_by_id: Uuid,
        status: DecisionStatus,
        notes: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> Result<(EditorialDecision, Submission), StorageError> {
        let mut state = self.lock();

        // Status update and decision append under one lock; a missing
        // submission aborts before either write.
        let submission = state
            .submissions
            .get_mut(&submission_id)
            .ok_or_else(|| StorageError::not_found("Submission", submission_id))?;

        submission.status = status.as_submission_status();
        submission.updated_at = decided_at;
        let submission = submission.clone();

        let decision = EditorialDecision {
            id: Uuid::new_v4(),
            submission_id,
            decided_by_id,
            status,
            notes,
            decided_at,
        };
        state.decisions.push(decision.clone());

        Ok((decision, submission))
    }

    async fn list_decisions(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<EditorialDecision>, StorageError> {
        let state = self.lock();
        let mut rows: Vec<EditorialDecision> = state
            .decisions
            .iter()
            .filter(|d| d.submission_id == submission_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.decided_at.cmp(&a.decided_at));
        Ok(rows)
    }

    async fn create_issue(&self, issue: NewIssue) -> Result<Issue, StorageError> {
        let mut state = self.lock();

        if !state.journals.contains_key(&issue.journal_id) {
            return Err(StorageError::not_found("Journal", issue.journal_id));
        }

        let duplicate = state.issues.values().any(|i| {
            i.journal_id == issue.journal_id
                && i.volume == issue.volume
                && i.issue_number == issue.issue_number
                && i.year == issue.year
        });
        if duplicate {
            return Err(StorageError::Conflict(format!(
                "Issue vol {} no {} ({}) already exists for journal {}",
                issue.volume, issue.issue_number, issue.year, issue.journal_id
            )));
        }

        let row = Issue {
            id: Uuid::new_v4(),
            journal_id: issue.journal_id,
            volume: issue.volume,
            issue_number: issue.issue_number,
            year: issue.year,
            title: issue.title,
            featured_image_url: issue.featured_image_url,
            published_at: None,
            created_at: Utc::now(),
        };
        state.issues.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_issue(&self, issue_id: Uuid) -> Result<Option<Issue>, StorageError> {
        Ok(self.lock().issues.get(&issue_id).cloned())
    }

    async fn update_issue_featured_image(
        &self,
        issue_id: Uuid,
        featured_image_url: Option<String>,
    ) -> Result<Issue, StorageError> {
        let mut state = self.lock();
        let issue = state
            .issues
            .get_mut(&issue_id)
            .ok_or_else(|| StorageError::not_found("Issue", issue_id))?;

        issue.featured_image_url = featured_image_url;
        Ok(issue.clone())
    }

    async fn publish_issue(
        &self,
        issue_id: Uuid,
        published_at: DateTime<Utc>,
    ) -> Result<(Issue, u64), StorageError> {
        let mut state = self.lock();

        let issue = state
            .issues
            .get_mut(&issue_id)
            .ok_or_else(|| StorageError::not_found("Issue", issue_id))?;

        // Idempotency guard: the first publish wins and keeps its timestamp.
        if issue.published_at.is_some() {
            return Ok((issue.clone(), 0));
        }

        issue.published_at = Some(published_at);
        let issue = issue.clone();

        let mut flipped = 0u64;
        for submission in state.submissions.values_mut() {
            if submission.issue_id == Some(issue_id)
                && submission.status != SubmissionStatus::Published
            {
                submission.status = SubmissionStatus::Published;
                submission.updated_at = published_at;
                flipped += 1;
            }
        }

        Ok((issue, flipped))
    }

    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, StorageError> {
        let mut state = self.lock();
        let row = Notification {
            id: Uuid::new_v4(),
            user_id: notification.user_id,
            r#type: notification.r#type,
            title: notification.title,
            message: notification.message,
            link: notification.link,
            read: false,
            created_at: Utc::now(),
        };
        state.notifications.insert(row.id, row.clone());
        Ok(row)
    }

    async fn mark_notification_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Notification, StorageError> {
        let mut state = self.lock();
        let notification = state
            .notifications
            .get_mut(&notification_id)
            .filter(|n| n.user_id == user_id)
            .ok_or_else(|| StorageError::not_found("Notification", notification_id))?;

        notification.read = true;
        Ok(notification.clone())
    }

    async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<u64, StorageError> {
        let mut state = self.lock();
        let mut updated = 0u64;
        for notification in state.notifications.values_mut() {
            if notification.user_id == user_id && !notification.read {
                notification.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn unread_notification_count(&self, user_id: Uuid) -> Result<i64, StorageError> {
        let state = self.lock();
        Ok(state
            .notifications
            .values()
            .filter(|n| n.user_id == user_id && !n.read)
            .count() as i64)
    }

    async fn list_notifications(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Notification>, StorageError> {
        let state = self.lock();
        let mut rows: Vec<Notification> = state
            .notifications
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}
