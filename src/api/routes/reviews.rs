//! Peer review routes: reviewer assignment and recommendation submission.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::actor_context::ActorContext;
use super::app_state::AppState;
use super::error::ApiError;
use crate::models::Review;

#[derive(Deserialize, ToSchema)]
pub struct AssignReviewerRequest {
    pub submission_id: Uuid,
    pub reviewer_id: Uuid,
}

#[derive(Deserialize, ToSchema)]
pub struct SubmitReviewRequest {
    pub recommendation: String,
    /// Raw score input; unparsable values store no score, out-of-range
    /// values are clamped into 1-5.
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub comments_to_author: Option<String>,
    #[serde(default)]
    pub comments_to_editor: Option<String>,
}

/// Assign a reviewer to a submission (ADMIN/EDITOR only).
#[utoipa::path(
    post,
    path = "/reviews/assign",
    request_body = AssignReviewerRequest,
    responses(
        (status = 200, description = "Pending review created; submission moved to UNDER_REVIEW"),
        (status = 403, description = "Actor is not ADMIN or EDITOR"),
        (status = 404, description = "Submission not found"),
        (status = 409, description = "Reviewer already assigned to this submission")
    )
)]
pub async fn assign_reviewer(
    State(state): State<AppState>,
    ctx: ActorContext,
    Json(request): Json<AssignReviewerRequest>,
) -> Result<Json<Review>, ApiError> {
    let review = state
        .reviews
        .assign_reviewer(request.submission_id, request.reviewer_id, &ctx.actor)
        .await?;
    Ok(Json(review))
}

/// Submit a recommendation for an assigned review (assigned reviewer only).
#[utoipa::path(
    post,
    path = "/reviews/{id}/submit",
    params(("id" = Uuid, Path, description = "Review ID")),
    request_body = SubmitReviewRequest,
    responses(
        (status = 200, description = "Review submitted"),
        (status = 403, description = "Actor is not the assigned reviewer"),
        (status = 404, description = "Review not found"),
        (status = 422, description = "Recommendation outside the allowed domain")
    )
)]
pub async fn submit_review(
    State(state): State<AppState>,
    ctx: ActorContext,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitReviewRequest>,
) -> Result<Json<Review>, ApiError> {
    let review = state
        .reviews
        .submit_review(
            id,
            &request.recommendation,
            request.score.as_deref(),
            request.comments_to_author.as_deref().unwrap_or(""),
            request.comments_to_editor.as_deref().unwrap_or(""),
            &ctx.actor,
        )
        .await?;
    Ok(Json(review))
}

/// List the reviews for a submission.
#[utoipa::path(
    get,
    path = "/reviews/submission/{submission_id}",
    params(("submission_id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Reviews for the submission, oldest first")
    )
)]
pub async fn list_reviews_for_submission(
    State(state): State<AppState>,
    _ctx: ActorContext,
    Path(submission_id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.reviews.list_for_submission(submission_id).await?;
    Ok(Json(reviews))
}

/// Create the reviews router.
pub fn reviews_router() -> Router<AppState> {
    Router::new()
        .route("/assign", post(assign_reviewer))
        .route("/{id}/submit", post(submit_review))
        .route("/submission/{submission_id}", get(list_reviews_for_submission))
}
