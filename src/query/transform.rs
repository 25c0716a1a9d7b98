//! Field-rename transform

use crate::types::QueryParams;
use std::collections::HashMap;

/// Outgoing field name -> name the server expects
pub type RenameMap = HashMap<String, String>;

/// Re-key `params` through `map`.
///
/// Keys present in `map` are renamed, other keys pass through untouched.
/// An empty map returns the input as is.
pub fn rename_keys(params: QueryParams, map: &RenameMap) -> QueryParams {
    if map.is_empty() {
        return params;
    }

    params
        .into_iter()
        .map(|(key, value)| (renamed_key(&key, map).to_string(), value))
        .collect()
}

/// Name `key` is sent under once `map` is applied
pub fn renamed_key<'a>(key: &'a str, map: &'a RenameMap) -> &'a str {
    match map.get(key) {
        Some(renamed) if !renamed.is_empty() => renamed,
        _ => key,
    }
}
