//! Shared query parameter types for API handlers.
//!
//! Missing values fall back to the defaults in
//! [`roster_core::pagination`]; out-of-range values are passed through so the
//! repository layer can reject them with a 400.

use roster_core::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use roster_core::types::EmployeeId;
use serde::Deserialize;

/// Offset pagination parameters (`?offset=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Page pagination parameters (`?page=&size=`), zero-based pages.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// `?id=` selector used by the employee update and delete endpoints.
#[derive(Debug, Deserialize)]
pub struct EmployeeIdParam {
    pub id: EmployeeId,
}
