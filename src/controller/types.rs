//! Controller result types

use crate::pagination::Pagination;
use crate::types::{JsonObject, JsonValue, Row};
use serde::Serialize;

/// What a request call did
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// A fetch ran and its result was applied. Holds the raw result.
    Completed(JsonValue),
    /// Nothing was fetched: another fetch was in flight, or rows are
    /// supplied by the owner
    Skipped,
}

impl RequestOutcome {
    /// Whether the call was a no-op
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Raw fetch result, if a fetch ran
    pub fn result(&self) -> Option<&JsonValue> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Skipped => None,
        }
    }

    /// Take the raw fetch result
    pub fn into_result(self) -> Option<JsonValue> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Skipped => None,
        }
    }
}

/// Everything the render surface needs at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSnapshot {
    /// Pagination of the last completed fetch
    pub pagination: Pagination,
    /// Pagination props with display overrides, `None` when paging is off
    pub display_pagination: Option<JsonObject>,
    /// Rows to show
    pub rows: Vec<Row>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Row identity field
    pub row_key: String,
}
