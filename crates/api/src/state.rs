/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloning is cheap; the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roster_db::DbPool,
}
