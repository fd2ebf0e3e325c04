//! Field rules for employee records.

use crate::error::CoreError;

/// Maximum length (in characters) for an employee name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length (in characters) for a department name.
pub const MAX_DEPARTMENT_LEN: usize = 100;

/// Validate an employee name: non-blank and within length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validate a department: non-blank and within length limit.
pub fn validate_department(department: &str) -> Result<(), CoreError> {
    validate_text("department", department, MAX_DEPARTMENT_LEN)
}

/// Employee ids are supplied by the client and must be positive.
pub fn validate_id(id: i32) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::InvalidArgument(format!(
            "Employee id must be positive, got {id}"
        )));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidArgument(format!(
            "Employee {field} must not be empty"
        )));
    }
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::InvalidArgument(format!(
            "Employee {field} too long: {len} chars (max {max})"
        )));
    }
    Ok(())
}
