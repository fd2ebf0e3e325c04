//! Film entity model from the Sakila sample schema.

use roster_core::types::{FilmId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `film` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Film {
    pub film_id: FilmId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    /// Running time in minutes.
    pub length: Option<i16>,
    /// MPAA rating code, e.g. `PG-13`.
    pub rating: Option<String>,
    pub last_update: Timestamp,
}
