//! SQLite cache for rendered public catalog pages.
//!
//! The rendering layer (out of scope here) fills this cache; the workflow
//! core only needs to invalidate the affected paths when an issue is
//! published or a published issue changes. Invalidation is fire-and-forget:
//! failures are logged, never surfaced to the publishing operation.

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

/// Receives publication-visibility invalidation signals.
pub trait PageInvalidator: Send + Sync {
    /// Drop cached public pages for a journal and issue.
    fn invalidate_publication_paths(&self, journal_slug: &str, issue_id: Uuid);
}

/// The public paths affected by a publication change, mirroring the catalog
/// page routes.
pub fn publication_paths(journal_slug: &str, issue_id: Uuid) -> Vec<String> {
    vec![
        "/issues".to_string(),
        format!("/issues/{}", issue_id),
        "/journals".to_string(),
        format!("/journals/{}", journal_slug),
        format!("/journals/{}/current", journal_slug),
        format!("/journals/{}/archives", journal_slug),
    ]
}

/// SQLite-backed page cache.
pub struct PageCache {
    conn: Mutex<Connection>,
}

impl PageCache {
    /// Open (or create) a page cache at the given path.
    pub fn new(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open page cache database: {:?}", db_path))?;

        let cache = Self {
            conn: Mutex::new(conn),
        };
        cache.init_db()?;
        Ok(cache)
    }

    /// In-memory variant for tests and DB-less development.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory page cache")?;
        let cache = Self {
            conn: Mutex::new(conn),
        };
        cache.init_db()?;
        Ok(cache)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute(
            "CREATE TABLE IF NOT EXISTS pages_cache (
                path TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                cached_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;
        Ok(())
    }

    /// Store a rendered page body.
    pub fn put(&self, path: &str, body: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute(
            "INSERT INTO pages_cache (path, body) VALUES (?1, ?2)
             ON CONFLICT(path) DO UPDATE SET body = ?2, cached_at = CURRENT_TIMESTAMP",
            params![path, body],
        )?;
        Ok(())
    }

    /// Fetch a cached page body, if present.
    pub fn get(&self, path: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let mut stmt = conn.prepare("SELECT body FROM pages_cache WHERE path = ?1")?;
        let mut rows = stmt.query(params![path])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Delete the cache entries for the given paths; returns how many existed.
    pub fn invalidate(&self, paths: &[String]) -> Result<usize> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let mut removed = 0;
        for path in paths {
            removed += conn.execute("DELETE FROM pages_cache WHERE path = ?1", params![path])?;
        }
        Ok(removed)
    }
}

impl PageInvalidator for PageCache {
    fn invalidate_publication_paths(&self, journal_slug: &str, issue_id: Uuid) {
        let paths = publication_paths(journal_slug, issue_id);
        match self.invalidate(&paths) {
            Ok(removed) => {
                info!(
                    "Invalidated {} cached publication pages for journal {}",
                    removed, journal_slug
                );
            }
            Err(e) => {
                warn!("Page cache invalidation failed for {}: {}", journal_slug, e);
            }
        }
    }
}

/// Invalidator that only logs; used when no page cache is configured.
#[derive(Default)]
pub struct NoopInvalidator;

impl PageInvalidator for NoopInvalidator {
    fn invalidate_publication_paths(&self, journal_slug: &str, issue_id: Uuid) {
        info!(
            "Publication visibility changed for journal {} issue {} (no page cache configured)",
            journal_slug, issue_id
        );
    }
}
