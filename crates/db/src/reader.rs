//! Generic paginated reads over a single table.
//!
//! A table is described once by implementing [`Collection`]; every list,
//! window, page and key lookup for it then goes through [`CollectionReader`].
//! All reads are ordered by the key column ascending, so the same window over
//! an unchanged table always yields the same rows.
//!
//! Table, column and key names come from `const` items on the implementing
//! type and are interpolated into SQL. User input is only ever bound as a
//! parameter, with the one exception of the field name passed to
//! [`CollectionReader::find_by_unique_field`], which must appear in
//! [`Collection::UNIQUE_FIELDS`].

use std::marker::PhantomData;

use roster_core::error::CoreError;
use roster_core::pagination::{Page, Window};
use roster_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{Encode, FromRow, PgPool, Postgres, Type};

use crate::error::RepoError;

/// Static description of a table readable through [`CollectionReader`].
pub trait Collection {
    /// Table name.
    const TABLE: &'static str;

    /// Comma-separated column list matching [`Collection::Row`].
    const COLUMNS: &'static str;

    /// Primary key column; also the sort key.
    const KEY_COLUMN: &'static str;

    /// Human-readable entity name used in not-found errors.
    const ENTITY: &'static str;

    /// Text columns that may be used with `find_by_unique_field`.
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static;

    type Key: for<'q> Encode<'q, Postgres>
        + Type<Postgres>
        + Into<DbId>
        + Copy
        + Send
        + Sync
        + 'static;
}

/// Stateless reader for any [`Collection`]. Every method takes the pool
/// explicitly and issues independent queries.
pub struct CollectionReader<C>(PhantomData<C>);

impl<C: Collection> CollectionReader<C> {
    /// Every row, ordered by key ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<C::Row>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY {} ASC",
            C::COLUMNS,
            C::TABLE,
            C::KEY_COLUMN
        );
        sqlx::query_as::<_, C::Row>(&query).fetch_all(pool).await
    }

    /// Total number of rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(&count_sql::<C>())
            .fetch_one(pool)
            .await
    }

    /// At most `window.limit()` rows after skipping `window.offset()`.
    ///
    /// An offset past the end of the table yields an empty vector.
    pub async fn find_window(pool: &PgPool, window: Window) -> Result<Vec<C::Row>, sqlx::Error> {
        tracing::debug!(
            table = C::TABLE,
            offset = window.offset(),
            limit = window.limit(),
            "Reading window"
        );
        sqlx::query_as::<_, C::Row>(&window_sql::<C>())
            .bind(window.limit())
            .bind(window.offset())
            .fetch_all(pool)
            .await
    }

    /// Validate `(offset, limit)` and read that window.
    pub async fn find_by_offset_limit(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<C::Row>, RepoError> {
        let window = Window::new(offset, limit)?;
        Ok(Self::find_window(pool, window).await?)
    }

    /// Read page `page` of `size` rows, together with the table's row count.
    ///
    /// Items and count come from one repeatable-read transaction so
    /// `total_pages` describes the same snapshot as `items`.
    pub async fn find_by_page(
        pool: &PgPool,
        page: i64,
        size: i64,
    ) -> Result<Page<C::Row>, RepoError> {
        let window = Window::from_page(page, size)?;
        tracing::debug!(table = C::TABLE, page, size, "Reading page");

        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let items = sqlx::query_as::<_, C::Row>(&window_sql::<C>())
            .bind(window.limit())
            .bind(window.offset())
            .fetch_all(&mut *tx)
            .await?;
        let total = sqlx::query_scalar::<_, i64>(&count_sql::<C>())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Page::with_total(items, window, total))
    }

    /// Look a row up by key, returning `None` when absent.
    pub async fn find_optional(pool: &PgPool, id: C::Key) -> Result<Option<C::Row>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            C::COLUMNS,
            C::TABLE,
            C::KEY_COLUMN
        );
        sqlx::query_as::<_, C::Row>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look a row up by key; a missing row is [`CoreError::NotFound`].
    pub async fn find_by_id(pool: &PgPool, id: C::Key) -> Result<C::Row, RepoError> {
        Self::find_optional(pool, id).await?.ok_or_else(|| {
            RepoError::Core(CoreError::NotFound {
                entity: C::ENTITY,
                id: id.into(),
            })
        })
    }

    /// First row (lowest key) whose `field` equals `value`.
    ///
    /// Fields listed in [`Collection::UNIQUE_FIELDS`] are expected to be
    /// unique, but this is not enforced by every schema; if duplicates exist
    /// the lowest key wins.
    pub async fn find_by_unique_field(
        pool: &PgPool,
        field: &str,
        value: &str,
    ) -> Result<Option<C::Row>, RepoError> {
        let Some(column) = C::UNIQUE_FIELDS.iter().find(|f| **f == field) else {
            return Err(CoreError::InvalidArgument(format!(
                "{} cannot be looked up by '{field}'",
                C::ENTITY
            ))
            .into());
        };
        let query = format!(
            "SELECT {} FROM {} WHERE {column} = $1 ORDER BY {} ASC LIMIT 1",
            C::COLUMNS,
            C::TABLE,
            C::KEY_COLUMN
        );
        Ok(sqlx::query_as::<_, C::Row>(&query)
            .bind(value)
            .fetch_optional(pool)
            .await?)
    }
}

fn window_sql<C: Collection>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {} ASC LIMIT $1 OFFSET $2",
        C::COLUMNS,
        C::TABLE,
        C::KEY_COLUMN
    )
}

fn count_sql<C: Collection>() -> String {
    format!("SELECT COUNT(*) FROM {}", C::TABLE)
}
