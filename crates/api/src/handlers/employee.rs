//! Handlers for the `/emp` resource.
//!
//! Update and delete select the target row with `?id=` rather than a path
//! segment, matching the employee UI's existing calls.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::employee;
use roster_core::types::EmployeeId;
use roster_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use roster_db::repositories::EmployeeRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::EmployeeIdParam;
use crate::state::AppState;

/// GET /emp
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    tracing::debug!(count = employees.len(), "Listed employees");
    Ok(Json(employees))
}

/// GET /emp/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EmployeeId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(employee))
}

/// POST /emp
///
/// Returns 409 if an employee with the same id already exists.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    employee::validate_id(input.id)?;
    employee::validate_name(&input.name)?;
    employee::validate_department(&input.department)?;

    let created = EmployeeRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /emp?id={id}
pub async fn update(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<EmployeeIdParam>,
    AppJson(input): AppJson<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    if let Some(name) = &input.name {
        employee::validate_name(name)?;
    }
    if let Some(department) = &input.department {
        employee::validate_department(department)?;
    }

    let updated = EmployeeRepo::update(&state.pool, params.id, &input).await?;
    tracing::info!(id = updated.id, "Employee updated");
    Ok(Json(updated))
}

/// DELETE /emp?id={id}
///
/// Responds with the deleted record.
pub async fn delete(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<EmployeeIdParam>,
) -> AppResult<Json<Employee>> {
    let deleted = EmployeeRepo::delete(&state.pool, params.id).await?;
    tracing::info!(id = deleted.id, "Employee deleted");
    Ok(Json(deleted))
}
