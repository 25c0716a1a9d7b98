// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagelist
//!
//! A reusable paginated-list controller. Give it a data fetcher and a static
//! query; it keeps page/size/total state, runs one fetch at a time, tracks
//! loading, and normalizes server responses into rows plus pagination.
//!
//! ## Features
//!
//! - **Single in-flight fetch**: overlapping requests resolve as no-ops
//! - **Parameter building**: static query + page fields, optional field renames
//! - **Response normalization**: `{ list, pageNo, totalCount }` or bare lists
//! - **Change notifications**: synchronous hooks after every list/loading change
//! - **HTTP fetcher**: ready-made `DataFetcher` over reqwest
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagelist::{ControllerConfig, PaginatedListController, Result};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ControllerConfig::builder()
//!         .row_key("id")
//!         .query("status", "open")
//!         .build();
//!
//!     let controller = PaginatedListController::new(config, |params| async move {
//!         // call your API with `params`
//!         Ok(json!({ "list": [{ "id": 1 }], "pageNo": 1, "totalCount": 1 }))
//!     });
//!
//!     controller.init().await?;
//!     controller.handle_page_change(2, 20).await?;
//!     println!("{:?}", controller.snapshot().await);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  PaginatedListController                     │
//! │   init()   refresh()   handle_page_change()   request_data() │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┼──────────────┬─────────────────┐
//! │   Query    │     Fetch      │   Decode     │   Pagination    │
//! ├────────────┼────────────────┼──────────────┼─────────────────┤
//! │ Merge      │ DataFetcher    │ Paged        │ Reducer         │
//! │ Rename     │ HttpFetcher    │ Unpaged      │ Overrides       │
//! │            │ Validator      │              │                 │
//! └────────────┴────────────────┴──────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document error variants and patch fields before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Controller configuration and loaders
pub mod config;

/// Pagination state and reducer
pub mod pagination;

/// Request parameter building
pub mod query;

/// Response normalization
pub mod decode;

/// Data fetcher and validator capabilities
pub mod fetch;

/// Change notifications
pub mod observer;

/// The list controller
pub mod controller;

/// HTTP data fetcher
pub mod http;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, ControllerConfig, ExtraPagination};
pub use controller::{ListSnapshot, PaginatedListController, RequestOutcome};
pub use fetch::{DataFetcher, RequestValidator};
pub use observer::ListObserver;
pub use pagination::{PageOverrides, Pagination};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
