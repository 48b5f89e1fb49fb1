//! API routes module - organizes all route handlers.

pub mod actor_context;
pub mod app_state;
pub mod decisions;
pub mod error;
pub mod notifications;
pub mod openapi;
pub mod publications;
pub mod reviews;
pub mod submissions;

use axum::Router;
pub use app_state::AppState;

/// Create the main API router combining all route modules.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/submissions", submissions::submissions_router())
        .nest("/reviews", reviews::reviews_router())
        .nest("/decisions", decisions::decisions_router())
        .nest("/publications", publications::publications_router())
        .nest("/notifications", notifications::notifications_router())
        .merge(openapi::openapi_router())
    // Note: State is applied by callers who need it (e.g., TestServer)
    // For production use, call .with_state(app_state) after creating the router
}

/// Create in-memory application state (synchronous, for tests and dev).
pub fn create_app_state() -> AppState {
    AppState::new()
}

/// Create the application state from environment configuration (async).
///
/// This is the preferred method for production use.
pub async fn create_app_state_with_storage() -> Result<AppState, crate::storage::StorageError> {
    AppState::from_env().await
}
