//! Route definitions for the `/film` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::film;
use crate::state::AppState;

/// Routes mounted at `/film`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(film::list))
        .route("/entities", get(film::list_entities))
        .route("/pageable", get(film::list_pageable))
        .route("/id/{id}", get(film::get_by_id))
}
