//! Integration tests for employee CRUD against a real database.

use assert_matches::assert_matches;
use roster_core::error::CoreError;
use roster_db::error::RepoError;
use roster_db::models::employee::{CreateEmployee, UpdateEmployee};
use roster_db::repositories::EmployeeRepo;
use sqlx::PgPool;

fn new_employee(id: i32, name: &str, department: &str) -> CreateEmployee {
    CreateEmployee {
        id,
        name: name.to_string(),
        department: department.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_find_by_id(pool: PgPool) {
    let created = EmployeeRepo::create(&pool, &new_employee(7, "Ada", "Engineering"))
        .await
        .unwrap();
    assert_eq!(created.id, 7);

    let found = EmployeeRepo::find_by_id(&pool, 7).await.unwrap();
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_existing_id_is_conflict(pool: PgPool) {
    EmployeeRepo::create(&pool, &new_employee(1, "Ada", "Engineering"))
        .await
        .unwrap();

    let err = EmployeeRepo::create(&pool, &new_employee(1, "Grace", "Research"))
        .await
        .unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::Conflict(_)));

    // The original row is untouched.
    let stored = EmployeeRepo::find_by_id(&pool, 1).await.unwrap();
    assert_eq!(stored.name, "Ada");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_ordered_by_id(pool: PgPool) {
    for id in [3, 1, 2] {
        EmployeeRepo::create(&pool, &new_employee(id, &format!("E{id}"), "Ops"))
            .await
            .unwrap();
    }

    let ids: Vec<i32> = EmployeeRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_given_fields(pool: PgPool) {
    EmployeeRepo::create(&pool, &new_employee(4, "Linus", "Kernel"))
        .await
        .unwrap();

    let input = UpdateEmployee {
        department: Some("Git".to_string()),
        ..Default::default()
    };
    let updated = EmployeeRepo::update(&pool, 4, &input).await.unwrap();
    assert_eq!(updated.name, "Linus");
    assert_eq!(updated.department, "Git");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_employee_is_not_found(pool: PgPool) {
    let err = EmployeeRepo::update(&pool, 404, &UpdateEmployee::default())
        .await
        .unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotFound { id: 404, .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_removed_row(pool: PgPool) {
    EmployeeRepo::create(&pool, &new_employee(9, "Barbara", "Languages"))
        .await
        .unwrap();

    let deleted = EmployeeRepo::delete(&pool, 9).await.unwrap();
    assert_eq!(deleted.name, "Barbara");

    assert_matches!(
        EmployeeRepo::find_by_id(&pool, 9).await,
        Err(RepoError::Core(CoreError::NotFound { .. }))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_employee_is_not_found(pool: PgPool) {
    let err = EmployeeRepo::delete(&pool, 12345).await.unwrap_err();
    assert_matches!(
        err,
        RepoError::Core(CoreError::NotFound {
            entity: "Employee",
            id: 12345
        })
    );
}
