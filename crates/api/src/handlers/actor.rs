//! Handlers for the `/actor` resource.
//!
//! Every endpoint returns actors in the same shape; the paged endpoint wraps
//! them in a [`Page`].

use axum::extract::State;
use axum::Json;
use roster_core::pagination::Page;
use roster_core::types::ActorId;
use roster_db::models::actor::Actor;
use roster_db::models::film::Film;
use roster_db::repositories::{ActorRepo, FilmRepo};

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::query::{PageParams, PaginationParams};
use crate::state::AppState;

/// GET /actor
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Actor>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(actors))
}

/// GET /actor/entities?offset=&limit=
pub async fn list_entities(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<Vec<Actor>>> {
    let actors = ActorRepo::list_window(&state.pool, params.offset(), params.limit()).await?;
    Ok(Json(actors))
}

/// GET /actor/pageable?page=&size=
pub async fn list_pageable(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<Page<Actor>>> {
    let page = ActorRepo::list_page(&state.pool, params.page(), params.size()).await?;
    Ok(Json(page))
}

/// GET /actor/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<ActorId>,
) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(actor))
}

/// GET /actor/last-name/{last_name}
///
/// Returns the actor with the lowest id when several share the name.
pub async fn get_by_last_name(
    State(state): State<AppState>,
    AppPath(last_name): AppPath<String>,
) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_by_last_name(&state.pool, &last_name).await?;
    Ok(Json(actor))
}

/// GET /actor/id/{id}/films
pub async fn list_films(
    State(state): State<AppState>,
    AppPath(id): AppPath<ActorId>,
) -> AppResult<Json<Vec<Film>>> {
    ActorRepo::find_by_id(&state.pool, id).await?;
    let films = FilmRepo::list_by_actor(&state.pool, id).await?;
    Ok(Json(films))
}
