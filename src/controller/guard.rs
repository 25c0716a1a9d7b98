//! In-flight token

use crate::observer::ListObserver;
use std::sync::atomic::{AtomicBool, Ordering};

/// Holds a controller's single in-flight slot.
///
/// Acquiring flips the loading flag on and notifies the observer; dropping
/// flips it off and notifies again, on success, error and panic paths alike.
pub struct InflightGuard<'a> {
    flag: &'a AtomicBool,
    observer: &'a dyn ListObserver,
}

impl<'a> InflightGuard<'a> {
    /// Take the slot, or `None` if a fetch already holds it
    pub fn acquire(flag: &'a AtomicBool, observer: &'a dyn ListObserver) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        observer.on_loading_change(true);
        Some(Self { flag, observer })
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.observer.on_loading_change(false);
    }
}

impl std::fmt::Debug for InflightGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InflightGuard").finish_non_exhaustive()
    }
}
