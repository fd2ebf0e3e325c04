//! Repository for the `employee` table.

use roster_core::error::CoreError;
use roster_core::types::EmployeeId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::reader::{Collection, CollectionReader};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, department";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl Collection for EmployeeRepo {
    const TABLE: &'static str = "employee";
    const COLUMNS: &'static str = COLUMNS;
    const KEY_COLUMN: &'static str = "id";
    const ENTITY: &'static str = "Employee";
    type Row = Employee;
    type Key = EmployeeId;
}

impl EmployeeRepo {
    /// List every employee, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        CollectionReader::<Self>::list_all(pool).await
    }

    /// Find an employee by id; a missing row is `NotFound`.
    pub async fn find_by_id(pool: &PgPool, id: EmployeeId) -> Result<Employee, RepoError> {
        CollectionReader::<Self>::find_by_id(pool, id).await
    }

    /// Insert a new employee, returning the created row.
    ///
    /// Fails with `Conflict` if the id is already taken. The check and the
    /// insert are one statement, so two concurrent creates with the same id
    /// cannot both succeed.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, RepoError> {
        let query = format!(
            "INSERT INTO employee (id, name, department)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Employee>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.department)
            .fetch_optional(pool)
            .await?;

        created.ok_or_else(|| {
            CoreError::Conflict(format!("Employee with id {} already exists", input.id)).into()
        })
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: EmployeeId,
        input: &UpdateEmployee,
    ) -> Result<Employee, RepoError> {
        let query = format!(
            "UPDATE employee SET
                name = COALESCE($2, name),
                department = COALESCE($3, department)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.department)
            .fetch_optional(pool)
            .await?;

        updated.ok_or_else(|| not_found(id))
    }

    /// Delete an employee, returning the row as it was before deletion.
    pub async fn delete(pool: &PgPool, id: EmployeeId) -> Result<Employee, RepoError> {
        let query = format!("DELETE FROM employee WHERE id = $1 RETURNING {COLUMNS}");
        let deleted = sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        deleted.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: EmployeeId) -> RepoError {
    RepoError::Core(CoreError::NotFound {
        entity: EmployeeRepo::ENTITY,
        id: id.into(),
    })
}
