//! Editorial decision recording.
//!
//! Decisions are append-only; the status update and the decision insert
//! commit in one transaction. Notification and email dispatch happen after
//! commit and are best-effort: the decision stands even when neither can be
//! delivered.

use super::error::WorkflowError;
use super::mailer::Mailer;
use super::notification_service::{NotificationService, decision_notice};
use crate::models::{Actor, DecisionStatus, EditorialDecision, NotificationType, Submission};
use crate::storage::WorkflowStore;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Service for recording editorial decisions.
pub struct DecisionService {
    store: Arc<dyn WorkflowStore>,
    notifications: Arc<NotificationService>,
    mailer: Arc<Mailer>,
}

impl DecisionService {
    pub fn new(
        store: Arc<dyn WorkflowStore>,
        notifications: Arc<NotificationService>,
        mailer: Arc<Mailer>,
    ) -> Self {
        Self {
            store,
            notifications,
            mailer,
        }
    }

    /// Record an accept/reject/revision ruling on a submission.
    ///
    /// No precondition requires a submitted review to exist first; decisions
    /// with zero reviews are allowed.
    pub async fn record_decision(
        &self,
        submission_id: Uuid,
        status: DecisionStatus,
        notes: Option<String>,
        actor: &Actor,
    ) -> Result<(EditorialDecision, Submission), WorkflowError> {
        if !actor.is_editorial() {
            return Err(WorkflowError::Forbidden);
        }

        let notes = notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());

        let (decision, submission) = self
            .store
            .record_decision(submission_id, actor.id, status, notes, chrono::Utc::now())
            .await?;

        info!(
            "Decision {} recorded on submission {} by {}",
            status.as_str(),
            submission_id,
            actor.id
        );

        self.dispatch_decision_notice(&decision, &submission).await;

        Ok((decision, submission))
    }

    /// List the decision history for a submission, newest first.
    pub async fn list_decisions(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<EditorialDecision>, WorkflowError> {
        Ok(self.store.list_decisions(submission_id).await?)
    }

    /// Post-commit fan-out to the author: in-app notification plus email.
    /// Failures are logged and swallowed.
    async fn dispatch_decision_notice(
        &self,
        decision: &EditorialDecision,
        submission: &Submission,
    ) {
        let (title, message) = decision_notice(decision.status, &submission.title);

        if let Err(e) = self
            .notifications
            .notify(
                submission.author_id,
                NotificationType::DecisionRecorded,
                title,
                message,
                Some("/dashboard/submissions".to_string()),
            )
            .await
        {
            warn!(
                "Failed to create decision notification for author {}: {}",
                submission.author_id, e
            );
        }

        match self.store.get_user(submission.author_id).await {
            Ok(Some(author)) => {
                if let Err(e) = self.mailer.send_decision_email(
                    &author.email,
                    &submission.title,
                    decision.status,
                    decision.notes.as_deref(),
                ) {
                    warn!("Failed to send decision email to {}: {}", author.email, e);
                }
            }
            Ok(None) => {
                warn!(
                    "Author {} not found; decision email skipped",
                    submission.author_id
                );
            }
            Err(e) => {
                warn!(
                    "Failed to load author {} for decision email: {}",
                    submission.author_id, e
                );
            }
        }
    }
}
