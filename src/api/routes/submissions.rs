//! Submission routes.
//!
//! Creation is open to authors and editorial roles; the status override is
//! editorial-only and deliberately bypasses the component-triggered
//! transitions.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::actor_context::ActorContext;
use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{Contributor, NewSubmission, Submission, SubmissionStatus};
use crate::services::WorkflowError;

#[derive(Deserialize, ToSchema)]
pub struct ContributorInput {
    pub given_name: String,
    pub family_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub orcid: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateSubmissionRequest {
    pub journal_id: Uuid,
    pub title: String,
    pub r#abstract: String,
    /// Comma-separated keyword list, as entered on the submission form.
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub manuscript_url: Option<String>,
    #[serde(default)]
    pub contributors: Vec<ContributorInput>,
}

#[derive(Deserialize, ToSchema)]
pub struct SetStatusRequest {
    pub status: String,
}

/// Create a manuscript submission.
#[utoipa::path(
    post,
    path = "/submissions",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 200, description = "Submission created in SUBMITTED status"),
        (status = 403, description = "Actor may not create submissions"),
        (status = 404, description = "Journal not found"),
        (status = 422, description = "Missing title or abstract")
    )
)]
pub async fn create_submission(
    State(state): State<AppState>,
    ctx: ActorContext,
    Json(request): Json<CreateSubmissionRequest>,
) -> Result<Json<Submission>, ApiError> {
    let keywords = request
        .keywords
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    let contributors = request
        .contributors
        .into_iter()
        .enumerate()
        .map(|(idx, c)| Contributor {
            given_name: c.given_name,
            family_name: c.family_name,
            email: c.email,
            affiliation: c.affiliation,
            orcid: c.orcid,
            sequence: idx as i32,
        })
        .collect();

    let submission = state
        .submissions
        .create_submission(
            NewSubmission {
                journal_id: request.journal_id,
                title: request.title,
                r#abstract: request.r#abstract,
                keywords,
                manuscript_url: request.manuscript_url.filter(|u| !u.trim().is_empty()),
                contributors,
            },
            &ctx.actor,
        )
        .await?;

    Ok(Json(submission))
}

/// Get a submission.
#[utoipa::path(
    get,
    path = "/submissions/{id}",
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission with contributors"),
        (status = 404, description = "Submission not found")
    )
)]
pub async fn get_submission(
    State(state): State<AppState>,
    _ctx: ActorContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Submission>, ApiError> {
    let submission = state.submissions.get_submission(id).await?;
    Ok(Json(submission))
}

/// Administrative status override (ADMIN/EDITOR only).
#[utoipa::path(
    put,
    path = "/submissions/{id}/status",
    params(("id" = Uuid, Path, description = "Submission ID")),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 403, description = "Actor is not ADMIN or EDITOR"),
        (status = 404, description = "Submission not found"),
        (status = 422, description = "Status outside the editable domain")
    )
)]
pub async fn set_submission_status(
    State(state): State<AppState>,
    ctx: ActorContext,
    Path(id): Path<Uuid>,
    Json(request): Json<SetStatusRequest>,
) -> Result<Json<Submission>, ApiError> {
    let status: SubmissionStatus = request
        .status
        .parse()
        .map_err(|_| WorkflowError::InvalidStatus(request.status.clone()))?;

    let submission = state.submissions.set_status(id, status, &ctx.actor).await?;
    Ok(Json(submission))
}

/// Create the submissions router.
pub fn submissions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_submission))
        .route("/{id}", get(get_submission))
        .route("/{id}/status", put(set_submission_status))
}
