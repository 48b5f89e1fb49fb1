use super::enums::ReviewRecommendation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One reviewer's assignment for one submission.
///
/// Created by an editorial actor with `submitted_at = None`; only the
/// assigned reviewer may fill in the recommendation. Submitting is one-way.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub reviewer_id: Uuid,
    pub recommendation: Option<ReviewRecommendation>,
    /// 1-5, clamped on submission. None when no numeric score was given.
    pub score: Option<i32>,
    pub comments_to_author: Option<String>,
    pub comments_to_editor: Option<String>,
    /// None while the review is pending.
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn is_pending(&self) -> bool {
        self.submitted_at.is_none()
    }
}

/// Parse a raw score string the way the submission form does: unparsable
/// input stores no score, out-of-range input is clamped into [1, 5].
pub fn parse_score(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().map(|n| n.clamp(1, 5))
}
