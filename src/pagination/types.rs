//! Pagination types
//!
//! Defines the pagination state, the actions that move it and the
//! per-request overrides callers may pass.

use serde::{Deserialize, Serialize};

/// Page shown before the first fetch completes
pub const DEFAULT_CURRENT: u32 = 1;

/// Page size used when nothing else is known
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page/size/total of a list, as of the last completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    pub current: u32,
    /// Rows per page
    pub page_size: u32,
    /// Total rows reported by the server
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: DEFAULT_CURRENT,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl Pagination {
    /// Create a pagination state
    pub fn new(current: u32, page_size: u32, total: u64) -> Self {
        Self {
            current: current.max(1),
            page_size: page_size.max(1),
            total,
        }
    }
}

/// Fields to overwrite on the current state. `None` keeps the old value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationPatch {
    pub current: Option<u32>,
    pub page_size: Option<u32>,
    pub total: Option<u64>,
}

/// Everything that may change a [`Pagination`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    /// A paged fetch completed; merge its page data into the state
    Update(PaginationPatch),
}

impl PaginationAction {
    /// Build the update dispatched after a paged fetch completes
    pub fn completed(current: u32, page_size: u32, total: u64) -> Self {
        Self::Update(PaginationPatch {
            current: Some(current),
            page_size: Some(page_size),
            total: Some(total),
        })
    }
}

/// Per-call overrides for a request. Unset fields fall back to the
/// current pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOverrides {
    /// Page to request
    pub current: Option<u32>,
    /// Page size to request
    pub size: Option<u32>,
}

impl PageOverrides {
    /// No overrides; re-request the current page
    pub fn none() -> Self {
        Self::default()
    }

    /// Request a specific page and size
    pub fn page(current: u32, size: u32) -> Self {
        Self {
            current: Some(current),
            size: Some(size),
        }
    }

    /// Resolve the effective page and size against a pagination state.
    /// Zero is treated as unset.
    pub fn resolve(&self, pagination: &Pagination) -> (u32, u32) {
        let current = self
            .current
            .filter(|c| *c > 0)
            .or(Some(pagination.current).filter(|c| *c > 0))
            .unwrap_or(DEFAULT_CURRENT);
        let size = self
            .size
            .filter(|s| *s > 0)
            .or(Some(pagination.page_size).filter(|s| *s > 0))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        (current, size)
    }
}
