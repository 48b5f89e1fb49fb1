//! Publication routes: issue creation, assignment, publishing.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::actor_context::ActorContext;
use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{Issue, Submission};

#[derive(Deserialize, ToSchema)]
pub struct CreateIssueRequest {
    pub journal_id: Uuid,
    pub volume: i32,
    pub issue_number: i32,
    pub year: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub featured_image_url: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct AssignSubmissionRequest {
    pub submission_id: Uuid,
}

#[derive(Deserialize, ToSchema)]
pub struct FeaturedImageRequest {
    pub featured_image_url: String,
}

#[derive(Serialize)]
pub struct IssueWithSubmissions {
    pub issue: Issue,
    pub submissions: Vec<Submission>,
}

/// Create a draft issue (ADMIN, or the journal's managing EDITOR).
#[utoipa::path(
    post,
    path = "/publications/issues",
    request_body = CreateIssueRequest,
    responses(
        (status = 200, description = "Draft issue created"),
        (status = 403, description = "Actor does not manage this journal"),
        (status = 404, description = "Journal not found"),
        (status = 409, description = "Duplicate volume/number/year for this journal"),
        (status = 422, description = "Featured image is not a valid path or http(s) URL")
    )
)]
pub async fn create_issue(
    State(state): State<AppState>,
    ctx: ActorContext,
    Json(request): Json<CreateIssueRequest>,
) -> Result<Json<Issue>, ApiError> {
    let issue = state
        .publications
        .create_issue(
            request.journal_id,
            request.volume,
            request.issue_number,
            request.year,
            request.title,
            request.featured_image_url.as_deref(),
            &ctx.actor,
        )
        .await?;
    Ok(Json(issue))
}

/// Get an issue with its assigned submissions.
#[utoipa::path(
    get,
    path = "/publications/issues/{id}",
    params(("id" = Uuid, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "Issue and its submissions"),
        (status = 404, description = "Issue not found")
    )
)]
pub async fn get_issue(
    State(state): State<AppState>,
    _ctx: ActorContext,
    Path(id): Path<Uuid>,
) -> Result<Json<IssueWithSubmissions>, ApiError> {
    let issue = state.publications.get_issue(id).await?;
    let submissions = state.publications.list_issue_submissions(id).await?;
    Ok(Json(IssueWithSubmissions { issue, submissions }))
}

/// Assign an accepted submission to an issue.
#[utoipa::path(
    post,
    path = "/publications/issues/{id}/assign",
    params(("id" = Uuid, Path, description = "Issue ID")),
    request_body = AssignSubmissionRequest,
    responses(
        (status = 200, description = "Submission assigned; published immediately if the issue is live"),
        (status = 403, description = "Actor does not manage this journal"),
        (status = 404, description = "Issue or submission not found"),
        (status = 409, description = "Submission not ACCEPTED/PUBLISHED or belongs to another journal")
    )
)]
pub async fn assign_submission_to_issue(
    State(state): State<AppState>,
    ctx: ActorContext,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignSubmissionRequest>,
) -> Result<Json<Submission>, ApiError> {
    let submission = state
        .publications
        .assign_submission_to_issue(id, request.submission_id, &ctx.actor)
        .await?;
    Ok(Json(submission))
}

/// Publish an issue, flipping its submissions to PUBLISHED atomically.
#[utoipa::path(
    post,
    path = "/publications/issues/{id}/publish",
    params(("id" = Uuid, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "Issue published (no-op if already published)"),
        (status = 403, description = "Actor does not manage this journal"),
        (status = 404, description = "Issue not found")
    )
)]
pub async fn publish_issue(
    State(state): State<AppState>,
    ctx: ActorContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Issue>, ApiError> {
    let issue = state.publications.publish_issue(id, &ctx.actor).await?;
    Ok(Json(issue))
}

/// Replace an issue's featured image.
#[utoipa::path(
    put,
    path = "/publications/issues/{id}/featured-image",
    params(("id" = Uuid, Path, description = "Issue ID")),
    request_body = FeaturedImageRequest,
    responses(
        (status = 200, description = "Featured image updated"),
        (status = 403, description = "Actor does not manage this journal"),
        (status = 404, description = "Issue not found"),
        (status = 422, description = "Image is not a valid path or http(s) URL")
    )
)]
pub async fn update_issue_featured_image(
    State(state): State<AppState>,
    ctx: ActorContext,
    Path(id): Path<Uuid>,
    Json(request): Json<FeaturedImageRequest>,
) -> Result<Json<Issue>, ApiError> {
    let issue = state
        .publications
        .update_issue_featured_image(id, &request.featured_image_url, &ctx.actor)
        .await?;
    Ok(Json(issue))
}

/// Create the publications router.
pub fn publications_router() -> Router<AppState> {
    Router::new()
        .route("/issues", post(create_issue))
        .route("/issues/{id}", get(get_issue))
        .route("/issues/{id}/assign", post(assign_submission_to_issue))
        .route("/issues/{id}/publish", post(publish_issue))
        .route("/issues/{id}/featured-image", put(update_issue_featured_image))
}
