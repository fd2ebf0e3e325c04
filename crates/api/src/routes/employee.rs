//! Route definitions for the `/emp` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Routes mounted at `/emp`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// PUT    /?id={id}    -> update
/// DELETE /?id={id}    -> delete
/// GET    /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employee::list)
                .post(employee::create)
                .put(employee::update)
                .delete(employee::delete),
        )
        .route("/{id}", get(employee::get_by_id))
}
