//! Tests for request parameter building

use super::*;
use crate::types::{PageParam, QueryParams};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn object(value: Value) -> QueryParams {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn renames(pairs: &[(&str, &str)]) -> RenameMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ============================================================================
// Rename Tests
// ============================================================================

#[test]
fn test_rename_empty_map_is_identity() {
    let params = object(json!({"a": 1, "b": "x"}));
    let out = rename_keys(params.clone(), &RenameMap::new());
    assert_eq!(out, params);
}

#[test]
fn test_rename_mapped_and_unmapped_keys() {
    let params = object(json!({"userName": "bob", "age": 3}));
    let out = rename_keys(params, &renames(&[("userName", "user_name")]));
    assert_eq!(out, object(json!({"user_name": "bob", "age": 3})));
}

#[test]
fn test_rename_ignores_keys_missing_from_params() {
    let params = object(json!({"a": 1}));
    let out = rename_keys(params, &renames(&[("zzz", "Z")]));
    assert_eq!(out, object(json!({"a": 1})));
}

#[test]
fn test_rename_empty_target_keeps_key() {
    let params = object(json!({"a": 1}));
    let out = rename_keys(params, &renames(&[("a", "")]));
    assert_eq!(out, object(json!({"a": 1})));
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_build_params_paged() {
    let base = object(json!({"status": "open"}));
    let params = build_params(&base, Some((2, 20)), PageParam::PageNum, &RenameMap::new());
    assert_eq!(
        params,
        object(json!({"status": "open", "pageNum": 2, "pageSize": 20}))
    );
}

#[test]
fn test_build_params_current_field() {
    let params = build_params(
        &QueryParams::new(),
        Some((1, 10)),
        PageParam::Current,
        &RenameMap::new(),
    );
    assert_eq!(params, object(json!({"current": 1, "pageSize": 10})));
}

#[test]
fn test_build_params_page_fields_win_over_base() {
    let base = object(json!({"pageSize": 999, "q": "x"}));
    let params = build_params(&base, Some((1, 10)), PageParam::PageNum, &RenameMap::new());
    assert_eq!(params["pageSize"], json!(10));
}

#[test]
fn test_build_params_unpaged_sends_base_unmodified() {
    let base = object(json!({"q": "x"}));
    let params = build_params(&base, None, PageParam::PageNum, &RenameMap::new());
    assert_eq!(params, base);
}

#[test]
fn test_build_params_renames_query_fields() {
    let base = object(json!({"a": 1}));
    let params = build_params(
        &base,
        Some((1, 10)),
        PageParam::PageNum,
        &renames(&[("a", "A")]),
    );
    assert_eq!(params, object(json!({"A": 1, "pageNum": 1, "pageSize": 10})));
}

#[test]
fn test_build_params_renames_page_fields() {
    let params = build_params(
        &QueryParams::new(),
        Some((3, 15)),
        PageParam::PageNum,
        &renames(&[("pageNum", "page"), ("pageSize", "per_page")]),
    );
    assert_eq!(params, object(json!({"page": 3, "per_page": 15})));
}

#[test]
fn test_build_params_page_field_wins_over_renamed_query_key() {
    // Query keys on both sides of "pageNum" in sort order
    for source in ["a", "z"] {
        let mut base = object(json!({"q": "x"}));
        base.insert(source.to_string(), json!(99));
        let params = build_params(
            &base,
            Some((3, 10)),
            PageParam::PageNum,
            &renames(&[(source, "pageNum")]),
        );
        assert_eq!(
            params,
            object(json!({"pageNum": 3, "pageSize": 10, "q": "x"})),
            "renaming '{source}'"
        );
    }
}

#[test]
fn test_renamed_key() {
    let map = renames(&[("a", "A"), ("b", "")]);
    assert_eq!(renamed_key("a", &map), "A");
    assert_eq!(renamed_key("b", &map), "b");
    assert_eq!(renamed_key("c", &map), "c");
}
