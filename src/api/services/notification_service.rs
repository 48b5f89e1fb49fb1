//! Notification dispatcher for workflow lifecycle events.
//!
//! Writes in-app notification rows and exposes the read-tracking surface.
//! Dispatch from the workflow services is fire-and-forget: a failed write is
//! logged and never propagated into the triggering operation.

use super::error::WorkflowError;
use crate::models::{DecisionStatus, Notification, NotificationType};
use crate::storage::{NewNotification, WorkflowStore};
use std::sync::Arc;
use uuid::Uuid;

/// Default page size for the notification inbox.
const DEFAULT_LIMIT: i64 = 50;

/// Title and message for a decision-driven notification, keyed by status.
pub fn decision_notice(status: DecisionStatus, submission_title: &str) -> (String, String) {
    let title = match status {
        DecisionStatus::Accepted => "Manuscript Accepted",
        DecisionStatus::RevisionRequired => "Revisions Requested",
        DecisionStatus::Rejected => "Manuscript Rejected",
    };
    let message = format!(
        "An editorial decision ({}) has been recorded for \"{}\".",
        status.as_str(),
        submission_title
    );
    (title.to_string(), message)
}

/// Service for creating and reading in-app notifications.
pub struct NotificationService {
    store: Arc<dyn WorkflowStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn WorkflowStore>) -> Self {
        Self { store }
    }

    /// Create a notification row for a user.
    pub async fn notify(
        &self,
        user_id: Uuid,
        r#type: NotificationType,
        title: String,
        message: String,
        link: Option<String>,
    ) -> Result<Notification, WorkflowError> {
        let notification = self
            .store
            .create_notification(NewNotification {
                user_id,
                r#type,
                title,
                message,
                link,
            })
            .await?;
        Ok(notification)
    }

    /// Mark one notification as read. Only the owning user may do this;
    /// anyone else sees `NotFound` rather than learning the row exists.
    pub async fn mark_as_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Notification, WorkflowError> {
        Ok(self
            .store
            .mark_notification_read(notification_id, user_id)
            .await?)
    }

    /// Mark all of a user's unread notifications as read.
    pub async fn mark_all_as_read(&self, user_id: Uuid) -> Result<u64, WorkflowError> {
        Ok(self.store.mark_all_notifications_read(user_id).await?)
    }

    /// Count a user's unread notifications.
    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64, WorkflowError> {
        Ok(self.store.unread_notification_count(user_id).await?)
    }

    /// List a user's notifications, newest first.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<Notification>, WorkflowError> {
        Ok(self
            .store
            .list_notifications(user_id, limit.unwrap_or(DEFAULT_LIMIT))
            .await?)
    }
}
