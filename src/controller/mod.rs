//! Paginated list controller
//!
//! Owns the pagination, the rows and the loading flag of one list, and runs
//! at most one fetch at a time.
//!
//! # Overview
//!
//! ```text
//! init / refresh / page change
//!        │
//!        ▼
//!   outside data? ──yes──► Ok(Skipped)
//!        │
//!   validate ──✗──► Err(ValidationFailed)
//!        │
//!   in flight? ──yes──► Ok(Skipped)
//!        │
//!   rename query ─► add page fields ─► fetch ─► normalize ─► reduce ─► notify
//! ```

mod guard;
mod list;
mod types;

pub use guard::InflightGuard;
pub use list::{ControllerBuilder, PaginatedListController};
pub use types::{ListSnapshot, RequestOutcome};
