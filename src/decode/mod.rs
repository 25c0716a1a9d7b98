//! Response normalization
//!
//! Turns whatever the data fetcher returned into rows plus optional page
//! data.
//!
//! # Canonical shape
//!
//! Paged results are objects with top-level fields:
//!
//! ```text
//! { "list": [...], "pageNo": 2, "totalCount": 41 }
//! ```
//!
//! `list` defaults to empty, `pageNo` to absent, `totalCount` to 0.
//! Unpaged results are a bare array (`null` reads as empty).

mod normalize;
mod types;

pub use normalize::{decode_paged, decode_unpaged};
pub use types::{DecodedResult, PageInfo, ResultShape};

#[cfg(test)]
mod tests;
