//! CLI commands and argument parsing

use crate::types::{Method, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginated list controller CLI
#[derive(Parser, Debug)]
#[command(name = "pagelist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Controller configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page and print the list snapshot
    Fetch {
        /// Base URL of the API
        #[arg(long)]
        url: String,

        /// Path of the list endpoint
        #[arg(long, default_value = "")]
        path: String,

        /// HTTP method
        #[arg(long, default_value = "get")]
        method: Method,

        /// Page to fetch (defaults to the first page)
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        size: Option<u32>,

        /// Extra query field, KEY=VALUE (repeatable)
        #[arg(short, long = "query", value_name = "KEY=VALUE")]
        query: Vec<String>,

        /// Extra request header, KEY=VALUE (repeatable)
        #[arg(long = "header", value_name = "KEY=VALUE")]
        headers: Vec<String>,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },

    /// Print the parameters a fetch would send, without fetching
    Params {
        /// Page to request
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        size: Option<u32>,

        /// Extra query field, KEY=VALUE (repeatable)
        #[arg(short, long = "query", value_name = "KEY=VALUE")]
        query: Vec<String>,
    },

    /// Validate the configuration file
    Validate,
}
