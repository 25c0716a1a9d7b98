//! Tests for response normalization

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Paged Results
// ============================================================================

#[test]
fn test_decode_paged_full() {
    let raw = json!({"list": [{"id": 1}, {"id": 2}], "pageNo": 3, "totalCount": 42});
    let decoded = decode_paged(&raw).unwrap();

    assert_eq!(decoded.rows, vec![json!({"id": 1}), json!({"id": 2})]);
    assert_eq!(
        decoded.page,
        Some(PageInfo {
            page_no: Some(3),
            total_count: 42
        })
    );
}

#[test]
fn test_decode_paged_defaults() {
    let decoded = decode_paged(&json!({})).unwrap();
    assert!(decoded.is_empty());
    assert_eq!(decoded.page, Some(PageInfo::default()));
}

#[test]
fn test_decode_paged_null_fields() {
    let raw = json!({"list": null, "pageNo": null, "totalCount": null});
    let decoded = decode_paged(&raw).unwrap();
    assert!(decoded.is_empty());
    assert_eq!(decoded.page, Some(PageInfo::default()));
}

#[test]
fn test_decode_paged_numeric_strings() {
    let raw = json!({"list": [], "pageNo": "2", "totalCount": " 17 "});
    let page = decode_paged(&raw).unwrap().page.unwrap();
    assert_eq!(page.page_no, Some(2));
    assert_eq!(page.total_count, 17);
}

#[test]
fn test_decode_paged_ignores_extra_fields() {
    let raw = json!({"list": [1], "pageNo": 1, "totalCount": 1, "code": 0, "msg": "ok"});
    assert_eq!(decode_paged(&raw).unwrap().len(), 1);
}

#[test_case(json!(null) ; "null")]
#[test_case(json!([1, 2]) ; "bare array")]
#[test_case(json!("oops") ; "string")]
#[test_case(json!({"list": {"id": 1}}) ; "list not an array")]
#[test_case(json!({"list": [], "totalCount": -1}) ; "negative total")]
#[test_case(json!({"list": [], "pageNo": "abc"}) ; "non numeric page")]
#[test_case(json!({"list": [], "pageNo": 1.5}) ; "fractional page")]
fn test_decode_paged_rejects(raw: serde_json::Value) {
    let err = decode_paged(&raw).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

// ============================================================================
// Unpaged Results
// ============================================================================

#[test]
fn test_decode_unpaged_array() {
    let rows = decode_unpaged(&json!(["x", "y"])).unwrap();
    assert_eq!(rows, vec![json!("x"), json!("y")]);
}

#[test]
fn test_decode_unpaged_null_is_empty() {
    assert!(decode_unpaged(&json!(null)).unwrap().is_empty());
}

#[test]
fn test_decode_unpaged_rejects_object() {
    let err = decode_unpaged(&json!({"list": []})).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

// ============================================================================
// ResultShape
// ============================================================================

#[test]
fn test_result_shape_from_flag() {
    assert_eq!(ResultShape::from_un_need_paging(true), ResultShape::Unpaged);
    assert_eq!(ResultShape::from_un_need_paging(false), ResultShape::Paged);
    assert_eq!(ResultShape::default(), ResultShape::Paged);
}

#[test]
fn test_result_shape_decode_unpaged_has_no_page() {
    let decoded = ResultShape::Unpaged.decode(&json!([1, 2, 3])).unwrap();
    assert_eq!(decoded.len(), 3);
    assert!(decoded.page.is_none());
}

#[test]
fn test_result_shape_decode_paged() {
    let decoded = ResultShape::Paged
        .decode(&json!({"list": [1], "pageNo": 1, "totalCount": 1}))
        .unwrap();
    assert!(decoded.page.is_some());
}
