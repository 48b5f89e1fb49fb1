//! Application state management.
//!
//! Defines the AppState struct that wires the storage backend, the workflow
//! services, the notification dispatcher, and the page cache together.

use crate::services::{
    DecisionService, Mailer, NoopInvalidator, NotificationService, PageCache, PageInvalidator,
    PublicationService, ReviewService, SubmissionService,
};
use crate::storage::{
    MemoryWorkflowStore, PostgresWorkflowStore, StorageError, WorkflowStore,
};
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend (PostgreSQL or in-memory)
    pub store: Arc<dyn WorkflowStore>,
    /// Submission lifecycle manager
    pub submissions: Arc<SubmissionService>,
    /// Review assignment and recommendation engine
    pub reviews: Arc<ReviewService>,
    /// Editorial decision recorder
    pub decisions: Arc<DecisionService>,
    /// Issue publication manager
    pub publications: Arc<PublicationService>,
    /// Notification dispatcher
    pub notifications: Arc<NotificationService>,
    /// PostgreSQL connection pool (None in memory mode)
    pub database: Option<PgPool>,
}

impl AppState {
    /// Build state on top of an arbitrary storage backend.
    pub fn with_store(
        store: Arc<dyn WorkflowStore>,
        pages: Arc<dyn PageInvalidator>,
        mailer: Arc<Mailer>,
    ) -> Self {
        let notifications = Arc::new(NotificationService::new(store.clone()));
        Self {
            submissions: Arc::new(SubmissionService::new(store.clone())),
            reviews: Arc::new(ReviewService::new(store.clone(), notifications.clone())),
            decisions: Arc::new(DecisionService::new(
                store.clone(),
                notifications.clone(),
                mailer,
            )),
            publications: Arc::new(PublicationService::new(store.clone(), pages)),
            notifications,
            store,
            database: None,
        }
    }

    /// In-memory state for tests and DB-less development.
    pub fn new() -> Self {
        Self::with_store(
            Arc::new(MemoryWorkflowStore::new()),
            Arc::new(NoopInvalidator),
            Arc::new(Mailer::from_env()),
        )
    }

    /// Initialize from environment configuration.
    ///
    /// Connects to PostgreSQL and runs migrations when `DATABASE_URL` is
    /// set, otherwise falls back to the in-memory backend. The page cache
    /// opens at `PAGE_CACHE_PATH` when configured.
    pub async fn from_env() -> Result<Self, StorageError> {
        let pages = page_invalidator_from_env();
        let mailer = Arc::new(Mailer::from_env());

        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            warn!("DATABASE_URL not set; using in-memory storage");
            return Ok(Self::with_store(
                Arc::new(MemoryWorkflowStore::new()),
                pages,
                mailer,
            ));
        };

        let pool = PgPool::connect(&database_url).await.map_err(|e| {
            StorageError::ConnectionError(format!("Failed to connect to database: {}", e))
        })?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StorageError::ConnectionError(format!("Migration failed: {}", e)))?;

        let store: Arc<dyn WorkflowStore> = Arc::new(PostgresWorkflowStore::new(pool.clone()));
        let mut state = Self::with_store(store, pages, mailer);
        state.database = Some(pool);
        Ok(state)
    }

    /// Get a reference to the database pool if available.
    pub fn database(&self) -> Option<&PgPool> {
        self.database.as_ref()
    }

    /// Check if PostgreSQL storage is enabled.
    pub fn is_postgres(&self) -> bool {
        self.database.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn page_invalidator_from_env() -> Arc<dyn PageInvalidator> {
    match std::env::var("PAGE_CACHE_PATH") {
        Ok(path) if !path.is_empty() => match PageCache::new(&PathBuf::from(&path)) {
            Ok(cache) => Arc::new(cache),
            Err(e) => {
                warn!("Failed to open page cache at {}: {}", path, e);
                Arc::new(NoopInvalidator)
            }
        },
        _ => Arc::new(NoopInvalidator),
    }
}
