use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A journal with exactly one managing editor.
///
/// Journal CRUD itself lives outside the workflow core; the core reads
/// journals only for ownership checks and the issue/journal invariant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Journal {
    pub id: Uuid,
    pub name: String,
    /// URL slug used by the public catalog pages (and their cache keys).
    pub slug: String,
    /// Managing editor. EDITOR actors may only operate on journals they manage.
    pub editor_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
