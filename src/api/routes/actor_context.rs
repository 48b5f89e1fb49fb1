//! Actor context extraction.
//!
//! Authentication is owned by the surrounding platform; by the time a
//! request reaches this API the gateway has resolved the session and set
//! `x-user-id` / `x-user-role` headers. The extractor turns those into an
//! explicit `Actor` so no handler ever consults ambient session state.

use super::app_state::AppState;
use crate::models::{Actor, AppRole};
use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};
use uuid::Uuid;

/// Acting principal extracted from request headers.
#[derive(Clone, Copy, Debug)]
pub struct ActorContext {
    pub actor: Actor,
}

impl FromRequestParts<AppState> for ActorContext {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;

        let user_id = headers
            .get("x-user-id")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("No x-user-id header provided");
                StatusCode::UNAUTHORIZED
            })?;

        let role = headers
            .get("x-user-role")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("No x-user-role header provided");
                StatusCode::UNAUTHORIZED
            })?;

        let user_id: Uuid = user_id.parse().map_err(|_| {
            tracing::warn!("Malformed x-user-id header");
            StatusCode::BAD_REQUEST
        })?;

        let role: AppRole = role.parse().map_err(|_| {
            tracing::warn!("Malformed x-user-role header");
            StatusCode::BAD_REQUEST
        })?;

        Ok(Self {
            actor: Actor::new(user_id, role),
        })
    }
}
