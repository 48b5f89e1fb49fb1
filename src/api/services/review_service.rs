//! Reviewer assignment and recommendation collection.

use super::error::WorkflowError;
use super::notification_service::NotificationService;
use crate::models::{Actor, AppRole, NotificationType, Review, SubmissionStatus, parse_score};
use crate::storage::{ReviewSubmission, WorkflowStore};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Service for reviewer assignment and review submission.
pub struct ReviewService {
    store: Arc<dyn WorkflowStore>,
    notifications: Arc<NotificationService>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn WorkflowStore>, notifications: Arc<NotificationService>) -> Self {
        Self {
            store,
            notifications,
        }
    }

    /// Assign a reviewer to a submission.
    ///
    /// Creates a pending review and moves the submission to `UNDER_REVIEW`
    /// unconditionally: every assignment forces the status, not just the
    /// first. The reviewer's role is intentionally not validated, and
    /// duplicate pairs are rejected only by the storage unique key.
    pub async fn assign_reviewer(
        &self,
        submission_id: Uuid,
        reviewer_id: Uuid,
        actor: &Actor,
    ) -> Result<Review, WorkflowError> {
        if !actor.is_editorial() {
            return Err(WorkflowError::Forbidden);
        }

        let submission = self
            .store
            .get_submission(submission_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Submission", submission_id))?;

        let review = self.store.create_review(submission_id, reviewer_id).await?;

        self.store
            .update_submission_status(submission_id, SubmissionStatus::UnderReview)
            .await?;

        info!(
            "Reviewer {} assigned to submission {} by {}",
            reviewer_id, submission_id, actor.id
        );

        // Best-effort: an unsent notification never fails the assignment.
        if let Err(e) = self
            .notifications
            .notify(
                reviewer_id,
                NotificationType::ReviewAssigned,
                "Review Assignment".to_string(),
                format!("You have been assigned to review \"{}\".", submission.title),
                Some("/dashboard/reviews".to_string()),
            )
            .await
        {
            warn!(
                "Failed to notify reviewer {} of assignment: {}",
                reviewer_id, e
            );
        }

        Ok(review)
    }

    /// Submit a recommendation for an assigned review.
    ///
    /// Checked in order: existence, ownership + role, recommendation domain.
    /// The raw score string follows the submission form's rules: unparsable
    /// stores NULL, out-of-range is clamped into [1, 5]. Setting
    /// `submitted_at` is one-way; there is no un-submit.
    pub async fn submit_review(
        &self,
        review_id: Uuid,
        recommendation: &str,
        score: Option<&str>,
        comments_to_author: &str,
        comments_to_editor: &str,
        actor: &Actor,
    ) -> Result<Review, WorkflowError> {
        let review = self
            .store
            .get_review(review_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Review", review_id))?;

        if actor.role != AppRole::Reviewer || actor.id != review.reviewer_id {
            return Err(WorkflowError::Forbidden);
        }

        let recommendation = recommendation
            .parse()
            .map_err(|_| WorkflowError::InvalidRecommendation(recommendation.to_string()))?;

        let fields = ReviewSubmission {
            recommendation,
            score: score.and_then(parse_score),
            comments_to_author: none_if_empty(comments_to_author),
            comments_to_editor: none_if_empty(comments_to_editor),
            submitted_at: chrono::Utc::now(),
        };

        let updated = self.store.submit_review(review_id, fields).await?;
        info!("Review {} submitted by {}", review_id, actor.id);
        Ok(updated)
    }

    /// List a submission's reviews.
    pub async fn list_for_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<Review>, WorkflowError> {
        Ok(self.store.list_reviews_for_submission(submission_id).await?)
    }
}
