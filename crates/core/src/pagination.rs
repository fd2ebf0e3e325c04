//! List windows and page results.
//!
//! Clients select a slice of an ordered collection either as `offset`/`limit`
//! or as `page`/`size`. Both vocabularies resolve to a single [`Window`]; the
//! page form is nothing more than `offset = page * size`.
//!
//! Unlike free-text search, out-of-range values are rejected rather than
//! clamped, so a caller never silently receives a different slice than the one
//! it asked for.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Offset used when `?offset=` is omitted.
pub const DEFAULT_OFFSET: i64 = 0;

/// Limit used when `?limit=` is omitted.
pub const DEFAULT_LIMIT: i64 = 10;

/// Page used when `?page=` is omitted (pages are zero-based).
pub const DEFAULT_PAGE: i64 = 0;

/// Page size used when `?size=` is omitted.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A validated `(offset, limit)` pair.
///
/// Invariant: `offset >= 0` and `limit > 0`. The only way to obtain a
/// `Window` is through [`Window::new`] or [`Window::from_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    offset: i64,
    limit: i64,
}

impl Window {
    /// Build a window from an explicit offset and limit.
    pub fn new(offset: i64, limit: i64) -> Result<Self, CoreError> {
        if offset < 0 {
            return Err(CoreError::InvalidArgument(format!(
                "offset must not be negative, got {offset}"
            )));
        }
        if limit <= 0 {
            return Err(CoreError::InvalidArgument(format!(
                "limit must be positive, got {limit}"
            )));
        }
        Ok(Self { offset, limit })
    }

    /// Build a window from a zero-based page number and a page size.
    pub fn from_page(page: i64, size: i64) -> Result<Self, CoreError> {
        if page < 0 {
            return Err(CoreError::InvalidArgument(format!(
                "page must not be negative, got {page}"
            )));
        }
        if size <= 0 {
            return Err(CoreError::InvalidArgument(format!(
                "size must be positive, got {size}"
            )));
        }
        let offset = page.checked_mul(size).ok_or_else(|| {
            CoreError::InvalidArgument(format!("page {page} with size {size} is out of range"))
        })?;
        Ok(Self {
            offset,
            limit: size,
        })
    }

    pub const fn offset(&self) -> i64 {
        self.offset
    }

    pub const fn limit(&self) -> i64 {
        self.limit
    }

    /// Zero-based page this window starts on, assuming pages of `limit` rows.
    pub const fn page(&self) -> i64 {
        self.offset / self.limit
    }
}

/// Number of pages of `size` rows needed to hold `total` rows (`ceil(total / size)`).
///
/// Returns 0 for an empty collection or a non-positive size.
pub fn total_pages(total: i64, size: i64) -> i64 {
    if total <= 0 || size <= 0 {
        return 0;
    }
    total / size + i64::from(total % size != 0)
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One window of an ordered collection plus the metadata a client needs to
/// ask for the next one.
///
/// `total` and `total_pages` are only known for page/size reads; offset/limit
/// reads skip the count query and leave them `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub offset: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
}

impl<T> Page<T> {
    /// A page without count metadata.
    pub fn new(items: Vec<T>, window: Window) -> Self {
        Self {
            items,
            page: window.page(),
            offset: window.offset(),
            limit: window.limit(),
            total: None,
            total_pages: None,
        }
    }

    /// A page that also reports the size of the whole collection.
    pub fn with_total(items: Vec<T>, window: Window, total: i64) -> Self {
        Self {
            total: Some(total),
            total_pages: Some(total_pages(total, window.limit())),
            ..Self::new(items, window)
        }
    }

    /// `Some(true)` when no rows exist past this page; `None` if the total is unknown.
    pub fn is_last(&self) -> Option<bool> {
        self.total.map(|total| self.offset.saturating_add(self.limit) >= total)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
