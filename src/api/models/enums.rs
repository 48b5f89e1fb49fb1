use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppRole {
    Admin,
    Editor,
    Reviewer,
    Author,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
            Self::Reviewer => "REVIEWER",
            Self::Author => "AUTHOR",
        }
    }

    /// Roles allowed to manage submission status, reviewer assignment,
    /// editorial decisions, and publications.
    pub fn is_editorial(&self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }
}

impl std::str::FromStr for AppRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "EDITOR" => Ok(Self::Editor),
            "REVIEWER" => Ok(Self::Reviewer),
            "AUTHOR" => Ok(Self::Author),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    UnderReview,
    RevisionRequired,
    Accepted,
    Rejected,
    Published,
}

impl SubmissionStatus {
    /// Statuses an ADMIN/EDITOR may set directly. DRAFT exists in the domain
    /// but is not reachable through the manual override.
    pub const EDITABLE: [Self; 6] = [
        Self::Submitted,
        Self::UnderReview,
        Self::RevisionRequired,
        Self::Accepted,
        Self::Rejected,
        Self::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::UnderReview => "UNDER_REVIEW",
            Self::RevisionRequired => "REVISION_REQUIRED",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Published => "PUBLISHED",
        }
    }

    pub fn is_editable(&self) -> bool {
        Self::EDITABLE.contains(self)
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "SUBMITTED" => Ok(Self::Submitted),
            "UNDER_REVIEW" => Ok(Self::UnderReview),
            "REVISION_REQUIRED" => Ok(Self::RevisionRequired),
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            "PUBLISHED" => Ok(Self::Published),
            other => Err(format!("Unknown submission status: {}", other)),
        }
    }
}

/// Rulings an editor can record. A strict subset of the submission status
/// domain: decisions never move a submission to SUBMITTED or PUBLISHED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStatus {
    RevisionRequired,
    Accepted,
    Rejected,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RevisionRequired => "REVISION_REQUIRED",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }

    /// The submission status this decision drives.
    pub fn as_submission_status(&self) -> SubmissionStatus {
        match self {
            Self::RevisionRequired => SubmissionStatus::RevisionRequired,
            Self::Accepted => SubmissionStatus::Accepted,
            Self::Rejected => SubmissionStatus::Rejected,
        }
    }
}

impl std::str::FromStr for DecisionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REVISION_REQUIRED" => Ok(Self::RevisionRequired),
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(format!("Unknown decision status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewRecommendation {
    Accept,
    MinorRevision,
    MajorRevision,
    Reject,
}

impl ReviewRecommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "ACCEPT",
            Self::MinorRevision => "MINOR_REVISION",
            Self::MajorRevision => "MAJOR_REVISION",
            Self::Reject => "REJECT",
        }
    }
}

impl std::str::FromStr for ReviewRecommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCEPT" => Ok(Self::Accept),
            "MINOR_REVISION" => Ok(Self::MinorRevision),
            "MAJOR_REVISION" => Ok(Self::MajorRevision),
            "REJECT" => Ok(Self::Reject),
            other => Err(format!("Unknown recommendation: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    SubmissionReceived,
    ReviewAssigned,
    ReviewSubmitted,
    DecisionRecorded,
    IssuePublished,
    System,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubmissionReceived => "SUBMISSION_RECEIVED",
            Self::ReviewAssigned => "REVIEW_ASSIGNED",
            Self::ReviewSubmitted => "REVIEW_SUBMITTED",
            Self::DecisionRecorded => "DECISION_RECORDED",
            Self::IssuePublished => "ISSUE_PUBLISHED",
            Self::System => "SYSTEM",
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMISSION_RECEIVED" => Ok(Self::SubmissionReceived),
            "REVIEW_ASSIGNED" => Ok(Self::ReviewAssigned),
            "REVIEW_SUBMITTED" => Ok(Self::ReviewSubmitted),
            "DECISION_RECORDED" => Ok(Self::DecisionRecorded),
            "ISSUE_PUBLISHED" => Ok(Self::IssuePublished),
            "SYSTEM" => Ok(Self::System),
            other => Err(format!("Unknown notification type: {}", other)),
        }
    }
}
