//! Integration tests for windowed and paged reads over the `actor` and `film`
//! tables.

use assert_matches::assert_matches;
use roster_core::error::CoreError;
use roster_db::error::RepoError;
use roster_db::reader::CollectionReader;
use roster_db::repositories::{ActorRepo, FilmRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert actors with keys `1..=count`, highest key first, so any ordering the
/// reader returns must come from `ORDER BY` rather than insertion order.
async fn seed_actors(pool: &PgPool, count: i16) {
    for id in (1..=count).rev() {
        sqlx::query("INSERT INTO actor (actor_id, first_name, last_name) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(format!("First{id}"))
            .bind(format!("Last{id}"))
            .execute(pool)
            .await
            .unwrap();
    }
}

async fn seed_film(pool: &PgPool, id: i16, title: &str) {
    sqlx::query("INSERT INTO film (film_id, title, release_year) VALUES ($1, $2, 2006)")
        .bind(id)
        .bind(title)
        .execute(pool)
        .await
        .unwrap();
}

async fn cast(pool: &PgPool, actor_id: i16, film_id: i16) {
    sqlx::query("INSERT INTO film_actor (actor_id, film_id) VALUES ($1, $2)")
        .bind(actor_id)
        .bind(film_id)
        .execute(pool)
        .await
        .unwrap();
}

fn keys(actors: &[roster_db::models::actor::Actor]) -> Vec<i16> {
    actors.iter().map(|a| a.actor_id).collect()
}

// ---------------------------------------------------------------------------
// list / offset-limit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_every_actor_in_key_order(pool: PgPool) {
    seed_actors(&pool, 5).await;

    let actors = ActorRepo::list(&pool).await.unwrap();
    assert_eq!(keys(&actors), vec![1, 2, 3, 4, 5]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn offset_two_limit_two_returns_keys_three_and_four(pool: PgPool) {
    seed_actors(&pool, 5).await;

    let actors = ActorRepo::list_window(&pool, 2, 2).await.unwrap();
    assert_eq!(keys(&actors), vec![3, 4]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn window_never_exceeds_limit(pool: PgPool) {
    seed_actors(&pool, 5).await;

    for offset in 0..7 {
        for limit in 1..7 {
            let actors = ActorRepo::list_window(&pool, offset, limit).await.unwrap();
            assert!(
                (actors.len() as i64) <= limit,
                "offset={offset} limit={limit} returned {} rows",
                actors.len()
            );
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn offset_at_or_past_end_returns_empty(pool: PgPool) {
    seed_actors(&pool, 5).await;

    assert!(ActorRepo::list_window(&pool, 5, 10).await.unwrap().is_empty());
    assert!(ActorRepo::list_window(&pool, 500, 10).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_window_is_rejected(pool: PgPool) {
    let err = ActorRepo::list_window(&pool, -1, 10).await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::InvalidArgument(_)));

    let err = ActorRepo::list_window(&pool, 0, 0).await.unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::InvalidArgument(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_window_reads_are_identical(pool: PgPool) {
    seed_actors(&pool, 5).await;

    let first = ActorRepo::list_window(&pool, 1, 3).await.unwrap();
    let second = ActorRepo::list_window(&pool, 1, 3).await.unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// page / size
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_items_match_equivalent_window(pool: PgPool) {
    seed_actors(&pool, 5).await;

    for page in 0..4 {
        let paged = ActorRepo::list_page(&pool, page, 2).await.unwrap();
        let windowed = ActorRepo::list_window(&pool, page * 2, 2).await.unwrap();
        assert_eq!(paged.items, windowed, "page {page}");
        assert_eq!(paged.total, Some(5));
        assert_eq!(paged.total_pages, Some(3));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn last_page_is_partial_and_flagged(pool: PgPool) {
    seed_actors(&pool, 5).await;

    let page = ActorRepo::list_page(&pool, 2, 2).await.unwrap();
    assert_eq!(keys(&page.items), vec![5]);
    assert_eq!(page.offset, 4);
    assert_eq!(page.is_last(), Some(true));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_of_empty_table_reports_zero_pages(pool: PgPool) {
    let page = ActorRepo::list_page(&pool, 0, 10).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, Some(0));
    assert_eq!(page.total_pages, Some(0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_page_is_rejected(pool: PgPool) {
    assert_matches!(
        ActorRepo::list_page(&pool, -1, 10).await,
        Err(RepoError::Core(CoreError::InvalidArgument(_)))
    );
    assert_matches!(
        ActorRepo::list_page(&pool, 0, 0).await,
        Err(RepoError::Core(CoreError::InvalidArgument(_)))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn count_matches_seeded_rows(pool: PgPool) {
    seed_actors(&pool, 4).await;
    assert_eq!(CollectionReader::<ActorRepo>::count(&pool).await.unwrap(), 4);
}

// ---------------------------------------------------------------------------
// key and field lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_row_or_not_found(pool: PgPool) {
    seed_actors(&pool, 3).await;

    let actor = ActorRepo::find_by_id(&pool, 2).await.unwrap();
    assert_eq!(actor.first_name, "First2");

    let err = ActorRepo::find_by_id(&pool, 99).await.unwrap_err();
    assert_matches!(
        err,
        RepoError::Core(CoreError::NotFound {
            entity: "Actor",
            id: 99
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn last_name_lookup_takes_lowest_key_on_duplicates(pool: PgPool) {
    for (id, first) in [(7_i16, "Grace"), (3, "Penelope"), (5, "Nick")] {
        sqlx::query("INSERT INTO actor (actor_id, first_name, last_name) VALUES ($1, $2, 'GUINESS')")
            .bind(id)
            .bind(first)
            .execute(&pool)
            .await
            .unwrap();
    }

    let actor = ActorRepo::find_by_last_name(&pool, "GUINESS").await.unwrap();
    assert_eq!(actor.actor_id, 3);
    assert_eq!(actor.first_name, "Penelope");

    let err = ActorRepo::find_by_last_name(&pool, "NOBODY").await.unwrap_err();
    assert_matches!(
        err,
        RepoError::Core(CoreError::NotFoundBy {
            entity: "Actor",
            field: "last_name",
            ref value,
        }) if value == "NOBODY"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_by_undeclared_field_is_rejected(pool: PgPool) {
    let err = CollectionReader::<ActorRepo>::find_by_unique_field(&pool, "first_name; --", "x")
        .await
        .unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// films
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn films_by_actor_follow_join_table(pool: PgPool) {
    seed_actors(&pool, 2).await;
    seed_film(&pool, 10, "ACADEMY DINOSAUR").await;
    seed_film(&pool, 4, "AFFAIR PREJUDICE").await;
    seed_film(&pool, 20, "AMADEUS HOLY").await;
    cast(&pool, 1, 20).await;
    cast(&pool, 1, 4).await;
    cast(&pool, 2, 10).await;

    let films = FilmRepo::list_by_actor(&pool, 1).await.unwrap();
    let ids: Vec<i16> = films.iter().map(|f| f.film_id).collect();
    assert_eq!(ids, vec![4, 20]);

    assert!(FilmRepo::list_by_actor(&pool, 42).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn film_pages_use_same_reader(pool: PgPool) {
    for id in 1..=3 {
        seed_film(&pool, id, &format!("FILM {id}")).await;
    }

    let page = FilmRepo::list_page(&pool, 1, 2).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "FILM 3");
    assert_eq!(page.total_pages, Some(2));

    let window = FilmRepo::list_window(&pool, 0, 2).await.unwrap();
    assert_eq!(window.len(), 2);
    assert_eq!(FilmRepo::find_by_id(&pool, 2).await.unwrap().title, "FILM 2");
    assert_eq!(FilmRepo::list(&pool).await.unwrap().len(), 3);
}
