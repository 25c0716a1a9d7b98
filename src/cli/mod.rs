//! CLI module
//!
//! Command-line interface for driving a list controller against an HTTP
//! endpoint.
//!
//! # Commands
//!
//! - `fetch` - Load a page and print the resulting snapshot
//! - `params` - Print the parameters a fetch would send
//! - `validate` - Check a config file

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{parse_query_arg, Runner};
