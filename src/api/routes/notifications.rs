//! Notification routes.
//!
//! Every endpoint is scoped to the acting user; there is no way to read or
//! mutate another user's notifications through this surface.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::actor_context::ActorContext;
use super::app_state::AppState;
use super::error::ApiError;
use crate::models::Notification;

#[derive(Deserialize)]
pub struct NotificationListQuery {
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

#[derive(Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

/// List the acting user's notifications, newest first.
#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (status = 200, description = "Most recent notifications for the acting user")
    )
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    ctx: ActorContext,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = state
        .notifications
        .list_for_user(ctx.actor.id, query.limit)
        .await?;
    Ok(Json(notifications))
}

/// Count the acting user's unread notifications.
#[utoipa::path(
    get,
    path = "/notifications/unread-count",
    responses(
        (status = 200, description = "Unread notification count")
    )
)]
pub async fn unread_count(
    State(state): State<AppState>,
    ctx: ActorContext,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let count = state.notifications.unread_count(ctx.actor.id).await?;
    Ok(Json(UnreadCountResponse { count }))
}

/// Mark one of the acting user's notifications as read.
#[utoipa::path(
    post,
    path = "/notifications/{id}/read",
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked read"),
        (status = 404, description = "Notification not found or owned by another user")
    )
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    ctx: ActorContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, ApiError> {
    let notification = state.notifications.mark_as_read(id, ctx.actor.id).await?;
    Ok(Json(notification))
}

/// Mark all of the acting user's notifications as read.
#[utoipa::path(
    post,
    path = "/notifications/read-all",
    responses(
        (status = 200, description = "All notifications marked read")
    )
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    ctx: ActorContext,
) -> Result<Json<MarkAllReadResponse>, ApiError> {
    let updated = state.notifications.mark_all_as_read(ctx.actor.id).await?;
    Ok(Json(MarkAllReadResponse { updated }))
}

/// Create the notifications router.
pub fn notifications_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/unread-count", get(unread_count))
        .route("/{id}/read", post(mark_notification_read))
        .route("/read-all", post(mark_all_notifications_read))
}
