//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row, plus `Deserialize` input DTOs for tables that accept writes.

pub mod actor;
pub mod employee;
pub mod film;
