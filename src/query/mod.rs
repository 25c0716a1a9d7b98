//! Request parameter building
//!
//! Turns the static query, the effective page/size and the rename map into
//! the parameters handed to the data fetcher.

mod builder;
mod transform;

pub use builder::build_params;
pub use transform::{rename_keys, renamed_key, RenameMap};

#[cfg(test)]
mod tests;
