//! Tests for pagination module

use super::*;
use test_case::test_case;

// ============================================================================
// Pagination Tests
// ============================================================================

#[test]
fn test_pagination_default() {
    let state = Pagination::default();
    assert_eq!(state.current, 1);
    assert_eq!(state.page_size, 10);
    assert_eq!(state.total, 0);
}

#[test]
fn test_pagination_new_clamps() {
    let state = Pagination::new(0, 0, 5);
    assert_eq!(state, Pagination::new(1, 1, 5));
}

#[test]
fn test_pagination_serializes_camel_case() {
    let json = serde_json::to_value(Pagination::new(2, 20, 41)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"current": 2, "pageSize": 20, "total": 41})
    );
}

// ============================================================================
// Reducer Tests
// ============================================================================

#[test]
fn test_reduce_completed_fetch() {
    let state = reduce(
        Pagination::default(),
        PaginationAction::completed(3, 20, 57),
    );
    assert_eq!(state, Pagination::new(3, 20, 57));
}

#[test]
fn test_reduce_partial_patch_keeps_other_fields() {
    let before = Pagination::new(2, 25, 100);
    let after = reduce(
        before,
        PaginationAction::Update(PaginationPatch {
            total: Some(7),
            ..Default::default()
        }),
    );
    assert_eq!(after, Pagination::new(2, 25, 7));
}

#[test]
fn test_reduce_clamps_zero_page() {
    let state = reduce(
        Pagination::default(),
        PaginationAction::completed(0, 0, 3),
    );
    assert_eq!(state.current, 1);
    assert_eq!(state.page_size, 1);
}

// ============================================================================
// PageOverrides Tests
// ============================================================================

#[test_case(PageOverrides::none(), (3, 20) ; "falls back to state")]
#[test_case(PageOverrides::page(1, 10), (1, 10) ; "both overridden")]
#[test_case(PageOverrides { current: Some(5), size: None }, (5, 20) ; "page only")]
#[test_case(PageOverrides { current: None, size: Some(50) }, (3, 50) ; "size only")]
#[test_case(PageOverrides::page(0, 0), (3, 20) ; "zero treated as unset")]
fn test_overrides_resolve(overrides: PageOverrides, expected: (u32, u32)) {
    let state = Pagination::new(3, 20, 100);
    assert_eq!(overrides.resolve(&state), expected);
}

#[test]
fn test_overrides_resolve_defaults() {
    let state = Pagination {
        current: 0,
        page_size: 0,
        total: 0,
    };
    assert_eq!(PageOverrides::none().resolve(&state), (1, 10));
}
