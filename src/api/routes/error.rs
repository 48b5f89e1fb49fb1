//! API error handling utilities.

use crate::services::WorkflowError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// API error response
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.message,
            "status": self.status.as_u16(),
        });

        (self.status, axum::Json(body)).into_response()
    }
}

impl From<WorkflowError> for ApiError {
    fn from(e: WorkflowError) -> Self {
        let status = match &e {
            WorkflowError::Forbidden => StatusCode::FORBIDDEN,
            WorkflowError::NotFound { .. } => StatusCode::NOT_FOUND,
            WorkflowError::InvalidStatus(_)
            | WorkflowError::InvalidRecommendation(_)
            | WorkflowError::InvalidImage(_)
            | WorkflowError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WorkflowError::Conflict(_) => StatusCode::CONFLICT,
            WorkflowError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Backend details stay in the logs, not in the response body.
        let message = match &e {
            WorkflowError::Storage(inner) => {
                tracing::error!("Storage failure: {}", inner);
                "Internal storage error".to_string()
            }
            other => other.to_string(),
        };

        Self { status, message }
    }
}
