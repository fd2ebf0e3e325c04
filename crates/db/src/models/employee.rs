//! Employee entity model and DTOs.

use roster_core::types::EmployeeId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employee` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
}

/// DTO for creating an employee. The id is chosen by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
}

/// DTO for updating an employee. Omitted fields keep their stored value.
///
/// An `id` in the body is ignored; the target row comes from `?id=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub department: Option<String>,
}
