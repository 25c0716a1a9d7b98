//! Common types used throughout pagelist
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Parameters handed to a data fetcher
pub type QueryParams = JsonObject;

/// A single list row. Opaque to the controller.
pub type Row = JsonValue;

// ============================================================================
// Page Parameter Naming
// ============================================================================

/// Name of the page-number field sent to the fetcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageParam {
    /// `pageNum`
    #[default]
    #[serde(alias = "pageNum")]
    PageNum,
    /// `current`
    Current,
}

impl PageParam {
    /// Field name used in outgoing parameters
    pub fn field_name(self) -> &'static str {
        match self {
            PageParam::PageNum => "pageNum",
            PageParam::Current => "current",
        }
    }
}

/// Field name of the page size in outgoing parameters
pub const PAGE_SIZE_FIELD: &str = "pageSize";

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method used by the HTTP fetcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Parameters go in the query string
    #[default]
    GET,
    /// Parameters go in a JSON body
    POST,
}

impl Method {
    /// Upper-case method name
    pub fn as_str(self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
        }
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// How snapshots are written by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    #[default]
    Json,
    /// Indented JSON
    Pretty,
}
