//! Decoder types
//!
//! Defines the normalized result handed back to the controller.

use super::normalize::{decode_paged, decode_unpaged};
use crate::error::Result;
use crate::types::{JsonValue, Row};

/// Which shape a fetch result is expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultShape {
    /// `{ list, pageNo, totalCount }`
    #[default]
    Paged,
    /// A bare list of rows
    Unpaged,
}

impl ResultShape {
    /// Pick the shape for a no-paging flag
    pub fn from_un_need_paging(un_need_paging: bool) -> Self {
        if un_need_paging {
            Self::Unpaged
        } else {
            Self::Paged
        }
    }

    /// Normalize a raw result
    pub fn decode(self, raw: &JsonValue) -> Result<DecodedResult> {
        match self {
            Self::Paged => decode_paged(raw),
            Self::Unpaged => Ok(DecodedResult {
                rows: decode_unpaged(raw)?,
                page: None,
            }),
        }
    }
}

/// Page data reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    /// Page the server says it returned
    pub page_no: Option<u32>,
    /// Total rows across all pages
    pub total_count: u64,
}

/// A fetch result after normalization
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedResult {
    /// Rows of this page
    pub rows: Vec<Row>,
    /// Page data, `None` for unpaged results
    pub page: Option<PageInfo>,
}

impl DecodedResult {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows came back
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
