use super::enums::DecisionStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of an accept/reject/revision ruling.
///
/// A submission accumulates decisions over rounds; the most recent by
/// `decided_at` is the current one. Rows are never updated or deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorialDecision {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub decided_by_id: Uuid,
    pub status: DecisionStatus,
    pub notes: Option<String>,
    pub decided_at: DateTime<Utc>,
}
