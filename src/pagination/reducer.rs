//! Pagination reducer

use super::types::{Pagination, PaginationAction};

/// Apply an action to a pagination state and return the new state.
///
/// Patched values below 1 for `current` or `page_size` are clamped to 1.
pub fn reduce(state: Pagination, action: PaginationAction) -> Pagination {
    match action {
        PaginationAction::Update(patch) => Pagination {
            current: patch.current.unwrap_or(state.current).max(1),
            page_size: patch.page_size.unwrap_or(state.page_size).max(1),
            total: patch.total.unwrap_or(state.total),
        },
    }
}
