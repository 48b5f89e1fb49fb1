//! The acting principal for every core operation.
//!
//! Identity resolution (sessions, tokens) is owned by the surrounding
//! platform; the workflow core only ever sees an explicit `Actor` and
//! never consults ambient request state.

use super::enums::AppRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated principal performing a workflow operation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub role: AppRole,
}

impl Actor {
    pub fn new(id: Uuid, role: AppRole) -> Self {
        Self { id, role }
    }

    /// True for the roles that may manage status, assignments, decisions
    /// and publications.
    pub fn is_editorial(&self) -> bool {
        self.role.is_editorial()
    }
}
