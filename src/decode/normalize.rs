//! Shape normalization for fetch results

use super::types::{DecodedResult, PageInfo};
use crate::error::{Error, Result};
use crate::types::{JsonValue, Row};

const LIST_FIELD: &str = "list";
const PAGE_NO_FIELD: &str = "pageNo";
const TOTAL_COUNT_FIELD: &str = "totalCount";

/// Normalize a paged result (`{ list, pageNo, totalCount }`)
pub fn decode_paged(raw: &JsonValue) -> Result<DecodedResult> {
    let JsonValue::Object(map) = raw else {
        return Err(Error::decode(format!(
            "expected an object with '{LIST_FIELD}', got {}",
            type_name(raw)
        )));
    };

    let rows = match map.get(LIST_FIELD) {
        None | Some(JsonValue::Null) => Vec::new(),
        Some(JsonValue::Array(items)) => items.clone(),
        Some(other) => {
            return Err(Error::decode(format!(
                "'{LIST_FIELD}' must be an array, got {}",
                type_name(other)
            )))
        }
    };

    let page_no = match map.get(PAGE_NO_FIELD) {
        None | Some(JsonValue::Null) => None,
        Some(value) => Some(
            read_u64(value)
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| invalid_number(PAGE_NO_FIELD, value))?,
        ),
    };

    let total_count = match map.get(TOTAL_COUNT_FIELD) {
        None | Some(JsonValue::Null) => 0,
        Some(value) => read_u64(value).ok_or_else(|| invalid_number(TOTAL_COUNT_FIELD, value))?,
    };

    Ok(DecodedResult {
        rows,
        page: Some(PageInfo {
            page_no,
            total_count,
        }),
    })
}

/// Normalize an unpaged result (a bare array, `null` reads as empty)
pub fn decode_unpaged(raw: &JsonValue) -> Result<Vec<Row>> {
    match raw {
        JsonValue::Null => Ok(Vec::new()),
        JsonValue::Array(items) => Ok(items.clone()),
        other => Err(Error::decode(format!(
            "expected a list of rows, got {}",
            type_name(other)
        ))),
    }
}

/// Read a non-negative integer, accepting numeric strings
fn read_u64(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(n) => n.as_u64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn invalid_number(field: &str, value: &JsonValue) -> Error {
    Error::decode(format!(
        "'{field}' must be a non-negative integer, got {value}"
    ))
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
