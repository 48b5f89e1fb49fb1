use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A versioned, dated collection of submissions published together.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,
    pub journal_id: Uuid,
    pub volume: i32,
    pub issue_number: i32,
    pub year: i32,
    pub title: Option<String>,
    pub featured_image_url: Option<String>,
    /// None while the issue is a draft. Transitions to Some exactly once;
    /// re-publishing must never overwrite the original timestamp.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Issue {
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}

/// Normalize a featured image input the way the publication form does.
///
/// Empty input clears the image. A root-relative path is accepted as-is.
/// Anything else must parse as an absolute http(s) URL; other schemes and
/// unparsable values are rejected with `None`.
pub fn normalize_issue_image_url(value: &str) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('/') {
        return Some(trimmed.to_string());
    }

    match url::Url::parse(trimmed) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {
            Some(parsed.to_string())
        }
        _ => None,
    }
}
