//! Repository for the `actor` table.

use roster_core::error::CoreError;
use roster_core::pagination::Page;
use roster_core::types::ActorId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::actor::Actor;
use crate::reader::{Collection, CollectionReader};

/// Read-only access to actors.
pub struct ActorRepo;

const LAST_NAME: &str = "last_name";

impl Collection for ActorRepo {
    const TABLE: &'static str = "actor";
    const COLUMNS: &'static str = "actor_id, first_name, last_name, last_update";
    const KEY_COLUMN: &'static str = "actor_id";
    const ENTITY: &'static str = "Actor";
    const UNIQUE_FIELDS: &'static [&'static str] = &[LAST_NAME];
    type Row = Actor;
    type Key = ActorId;
}

impl ActorRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        CollectionReader::<Self>::list_all(pool).await
    }

    pub async fn list_window(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Actor>, RepoError> {
        CollectionReader::<Self>::find_by_offset_limit(pool, offset, limit).await
    }

    pub async fn list_page(pool: &PgPool, page: i64, size: i64) -> Result<Page<Actor>, RepoError> {
        CollectionReader::<Self>::find_by_page(pool, page, size).await
    }

    pub async fn find_by_id(pool: &PgPool, id: ActorId) -> Result<Actor, RepoError> {
        CollectionReader::<Self>::find_by_id(pool, id).await
    }

    /// First actor with this exact last name, lowest `actor_id` first.
    pub async fn find_by_last_name(pool: &PgPool, last_name: &str) -> Result<Actor, RepoError> {
        CollectionReader::<Self>::find_by_unique_field(pool, LAST_NAME, last_name)
            .await?
            .ok_or_else(|| {
                RepoError::Core(CoreError::NotFoundBy {
                    entity: Self::ENTITY,
                    field: LAST_NAME,
                    value: last_name.to_string(),
                })
            })
    }
}
