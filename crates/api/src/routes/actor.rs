//! Route definitions for the `/actor` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actor`.
///
/// ```text
/// GET /                          -> list
/// GET /entities                  -> list_entities
/// GET /pageable                  -> list_pageable
/// GET /id/{id}                   -> get_by_id
/// GET /id/{id}/films             -> list_films
/// GET /last-name/{last_name}     -> get_by_last_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list))
        .route("/entities", get(actor::list_entities))
        .route("/pageable", get(actor::list_pageable))
        .route("/id/{id}", get(actor::get_by_id))
        .route("/id/{id}/films", get(actor::list_films))
        .route("/last-name/{last_name}", get(actor::get_by_last_name))
}
