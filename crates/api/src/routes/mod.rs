pub mod actor;
pub mod employee;
pub mod film;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /emp                                   list, create, update (?id=), delete (?id=)
/// /emp/{id}                              get
///
/// /actor                                 list
/// /actor/entities                        offset/limit window
/// /actor/pageable                        page/size with totals
/// /actor/id/{id}                         get
/// /actor/id/{id}/films                   films the actor appears in
/// /actor/last-name/{last_name}           first actor with that last name
///
/// /film                                  list
/// /film/entities                         offset/limit window
/// /film/pageable                         page/size with totals
/// /film/id/{id}                          get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/emp", employee::router())
        .nest("/actor", actor::router())
        .nest("/film", film::router())
}
