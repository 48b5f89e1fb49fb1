//! Editorial decision routes.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::actor_context::ActorContext;
use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{DecisionStatus, EditorialDecision, Submission};
use crate::services::WorkflowError;

#[derive(Deserialize, ToSchema)]
pub struct RecordDecisionRequest {
    pub submission_id: Uuid,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct RecordDecisionResponse {
    pub decision: EditorialDecision,
    pub submission: Submission,
}

/// Record an editorial decision (ADMIN/EDITOR only).
///
/// The status update and the decision row commit atomically; the author
/// notification and email are dispatched after commit and never fail the
/// operation.
#[utoipa::path(
    post,
    path = "/decisions",
    request_body = RecordDecisionRequest,
    responses(
        (status = 200, description = "Decision recorded; submission status updated"),
        (status = 403, description = "Actor is not ADMIN or EDITOR"),
        (status = 404, description = "Submission not found"),
        (status = 422, description = "Status is not a decision status")
    )
)]
pub async fn record_decision(
    State(state): State<AppState>,
    ctx: ActorContext,
    Json(request): Json<RecordDecisionRequest>,
) -> Result<Json<RecordDecisionResponse>, ApiError> {
    let status: DecisionStatus = request
        .status
        .parse()
        .map_err(|_| WorkflowError::InvalidStatus(request.status.clone()))?;

    let (decision, submission) = state
        .decisions
        .record_decision(request.submission_id, status, request.notes, &ctx.actor)
        .await?;

    Ok(Json(RecordDecisionResponse {
        decision,
        submission,
    }))
}

/// List the decision history for a submission, newest first.
#[utoipa::path(
    get,
    path = "/decisions/submission/{submission_id}",
    params(("submission_id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Decision history, newest first")
    )
)]
pub async fn list_decisions(
    State(state): State<AppState>,
    _ctx: ActorContext,
    Path(submission_id): Path<Uuid>,
) -> Result<Json<Vec<EditorialDecision>>, ApiError> {
    let decisions = state.decisions.list_decisions(submission_id).await?;
    Ok(Json(decisions))
}

/// Create the decisions router.
pub fn decisions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_decision))
        .route("/submission/{submission_id}", get(list_decisions))
}
