//! Repository for the `film` table and its `film_actor` join.

use roster_core::pagination::Page;
use roster_core::types::{ActorId, FilmId};
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::film::Film;
use crate::reader::{Collection, CollectionReader};

/// Read-only access to films.
pub struct FilmRepo;

impl Collection for FilmRepo {
    const TABLE: &'static str = "film";
    const COLUMNS: &'static str =
        "film_id, title, description, release_year, length, rating, last_update";
    const KEY_COLUMN: &'static str = "film_id";
    const ENTITY: &'static str = "Film";
    type Row = Film;
    type Key = FilmId;
}

impl FilmRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Film>, sqlx::Error> {
        CollectionReader::<Self>::list_all(pool).await
    }

    pub async fn list_window(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Film>, RepoError> {
        CollectionReader::<Self>::find_by_offset_limit(pool, offset, limit).await
    }

    pub async fn list_page(pool: &PgPool, page: i64, size: i64) -> Result<Page<Film>, RepoError> {
        CollectionReader::<Self>::find_by_page(pool, page, size).await
    }

    pub async fn find_by_id(pool: &PgPool, id: FilmId) -> Result<Film, RepoError> {
        CollectionReader::<Self>::find_by_id(pool, id).await
    }

    /// Films the given actor appears in, ordered by `film_id`.
    ///
    /// Returns an empty list both for an actor with no films and for an
    /// unknown actor; callers that need to tell the two apart check the actor
    /// first.
    pub async fn list_by_actor(pool: &PgPool, actor_id: ActorId) -> Result<Vec<Film>, sqlx::Error> {
        sqlx::query_as::<_, Film>(
            "SELECT f.film_id, f.title, f.description, f.release_year, f.length, f.rating,
                    f.last_update
             FROM film f
             INNER JOIN film_actor fa ON fa.film_id = f.film_id
             WHERE fa.actor_id = $1
             ORDER BY f.film_id ASC",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }
}
