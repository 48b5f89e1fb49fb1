use super::enums::SubmissionStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A manuscript tracked through the editorial workflow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub journal_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub r#abstract: String,
    pub keywords: Vec<String>,
    pub manuscript_url: Option<String>,
    pub doi: Option<String>,
    pub status: SubmissionStatus,
    /// Set when the submission is assigned to an issue. Invariant: the issue
    /// must belong to the same journal.
    pub issue_id: Option<Uuid>,
    pub contributors: Vec<Contributor>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry in a submission's ordered contributor list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contributor {
    pub given_name: String,
    pub family_name: String,
    pub email: Option<String>,
    pub affiliation: Option<String>,
    pub orcid: Option<String>,
    /// Zero-based position in the byline.
    pub sequence: i32,
}

/// Input for creating a submission. The row and its contributors are written
/// in one transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewSubmission {
    pub journal_id: Uuid,
    pub title: String,
    pub r#abstract: String,
    pub keywords: Vec<String>,
    pub manuscript_url: Option<String>,
    pub contributors: Vec<Contributor>,
}
