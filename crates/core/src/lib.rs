//! Roster domain core.
//!
//! Pure types and rules with no I/O: key aliases, the error taxonomy shared by
//! the repository and HTTP layers, list windows and page results, and input
//! validation for writable records.

pub mod employee;
pub mod error;
pub mod pagination;
pub mod types;
