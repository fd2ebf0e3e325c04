//! Handlers for the `/film` resource.

use axum::extract::State;
use axum::Json;
use roster_core::pagination::Page;
use roster_core::types::FilmId;
use roster_db::models::film::Film;
use roster_db::repositories::FilmRepo;

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::query::{PageParams, PaginationParams};
use crate::state::AppState;

/// GET /film
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Film>>> {
    let films = FilmRepo::list(&state.pool).await?;
    Ok(Json(films))
}

/// GET /film/entities?offset=&limit=
pub async fn list_entities(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<Vec<Film>>> {
    let films = FilmRepo::list_window(&state.pool, params.offset(), params.limit()).await?;
    Ok(Json(films))
}

/// GET /film/pageable?page=&size=
pub async fn list_pageable(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<Page<Film>>> {
    let page = FilmRepo::list_page(&state.pool, params.page(), params.size()).await?;
    Ok(Json(page))
}

/// GET /film/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<FilmId>,
) -> AppResult<Json<Film>> {
    let film = FilmRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(film))
}
