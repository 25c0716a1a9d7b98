//! Change notifications for the rendering layer
//!
//! The controller calls these hooks synchronously right after the state
//! they describe has changed.

use crate::pagination::Pagination;
use tracing::debug;

/// Receives list and loading changes
pub trait ListObserver: Send + Sync {
    /// Rows were replaced. `pagination` is the state after the change.
    fn on_list_change(&self, _pagination: &Pagination) {}

    /// The loading flag flipped
    fn on_loading_change(&self, _loading: bool) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ListObserver for NoopObserver {}

/// Observer that logs every notification at debug level
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    /// Label added to log lines
    pub name: String,
}

impl TracingObserver {
    /// Create a logging observer
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ListObserver for TracingObserver {
    fn on_list_change(&self, pagination: &Pagination) {
        debug!(
            list = %self.name,
            current = pagination.current,
            page_size = pagination.page_size,
            total = pagination.total,
            "List changed"
        );
    }

    fn on_loading_change(&self, loading: bool) {
        debug!(list = %self.name, loading, "Loading changed");
    }
}
