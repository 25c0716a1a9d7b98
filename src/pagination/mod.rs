//! Pagination module
//!
//! Holds the page/size/total state of a list and the reducer that moves it.
//!
//! # Overview
//!
//! `Pagination` only changes through [`reduce`], which takes a closed
//! [`PaginationAction`]. The controller dispatches an action after a paged
//! fetch completes; nothing else writes to the state.

mod reducer;
mod types;

pub use reducer::reduce;
pub use types::{
    PageOverrides, Pagination, PaginationAction, PaginationPatch, DEFAULT_CURRENT,
    DEFAULT_PAGE_SIZE,
};

#[cfg(test)]
mod tests;
