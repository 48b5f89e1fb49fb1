use super::enums::AppRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user carrying a single application role.
///
/// Registration and credential handling live outside the core; the workflow
/// reads users to resolve authors and reviewers and to address notifications.
/// Role changes are an ADMIN-only concern and never self-service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: AppRole,
    pub created_at: DateTime<Utc>,
}
