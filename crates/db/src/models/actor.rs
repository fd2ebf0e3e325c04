//! Actor entity model from the Sakila sample schema.

use roster_core::types::{ActorId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `actor` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub actor_id: ActorId,
    pub first_name: String,
    pub last_name: String,
    pub last_update: Timestamp,
}
