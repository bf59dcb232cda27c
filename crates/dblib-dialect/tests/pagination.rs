//! Black-box pagination rewrite properties.
//!
//! These tests exercise the rewrite through the public dialect surface
//! only, the way the owning framework calls it.

#![allow(clippy::unwrap_used)]

use dblib_dialect::{DblibDialect, DialectError, PaginationStrategy};

fn dialect() -> DblibDialect {
    DblibDialect::new()
}

#[test]
fn non_positive_limit_is_identity_for_both_strategies() {
    let sql = "SELECT id FROM users ORDER BY id";
    for strategy in [PaginationStrategy::RowNumber, PaginationStrategy::NestedTop] {
        let d = DblibDialect::new().with_pagination(strategy);
        for limit in [0, -1, -100] {
            for offset in [0, 5, 500] {
                assert_eq!(d.modify_limit_query(sql, limit, offset).unwrap(), sql);
            }
        }
    }
}

#[test]
fn negative_offset_fails_for_any_limit() {
    for limit in [-1, 0, 1, 100] {
        let err = dialect()
            .modify_limit_query("SELECT id FROM users", limit, -3)
            .unwrap_err();
        assert!(matches!(err, DialectError::InvalidArgument { offset: -3, .. }));
    }
}

#[test]
fn output_is_a_single_statement() {
    let out = dialect()
        .modify_limit_query("SELECT id, name FROM users ORDER BY name", 10, 20)
        .unwrap();
    assert!(!out.contains(';'));
}

#[test]
fn distinct_top_ordering() {
    let out = dialect()
        .modify_limit_query("SELECT DISTINCT col FROM t", 5, 0)
        .unwrap();
    assert!(out.contains("DISTINCT TOP 5"));
    assert!(!out.contains("TOP 5 DISTINCT"));
}

#[test]
fn window_bounds_are_one_indexed_inclusive() {
    let out = dialect()
        .modify_limit_query("SELECT id, name FROM users ORDER BY name ASC", 10, 20)
        .unwrap();
    assert!(out.contains("BETWEEN 21 AND 30"));
}

#[test]
fn windowed_projection_matches_the_original_select_list() {
    let out = dialect()
        .modify_limit_query("SELECT id, name FROM users ORDER BY name ASC", 10, 20)
        .unwrap();
    // exactly id and name come back; the row-number column stays inside
    assert!(out.starts_with("SELECT id, name FROM ("));
    let projection = &out["SELECT ".len()..out.find(" FROM").unwrap()];
    assert_eq!(projection, "id, name");
}

#[test]
fn offset_without_order_by_still_produces_a_legal_window() {
    let out = dialect()
        .modify_limit_query("SELECT id FROM users", 5, 5)
        .unwrap();
    assert!(out.contains("ROW_NUMBER() OVER (ORDER BY (SELECT 0))"));
    assert!(out.contains("BETWEEN 6 AND 10"));
}

#[test]
fn rewriting_a_rewritten_statement_fails_fast() {
    let d = dialect();
    let once = d.modify_limit_query("SELECT id FROM users", 5, 0).unwrap();
    assert_eq!(once, "SELECT TOP 5 id FROM users");
    let err = d.modify_limit_query(&once, 5, 0).unwrap_err();
    assert!(matches!(err, DialectError::MalformedQuery(_)));
    assert!(!err.to_string().is_empty());

    // the windowed output starts a fresh SELECT head, so a second pass
    // treats it as an ordinary (rewritable) statement
    let windowed = d
        .modify_limit_query("SELECT id FROM users ORDER BY id", 5, 5)
        .unwrap();
    assert!(d.modify_limit_query(&windowed, 5, 0).is_ok());
}

#[test]
fn rewrite_is_deterministic() {
    let d = dialect();
    let sql = "SELECT id, name FROM users ORDER BY name DESC, id";
    let a = d.modify_limit_query(sql, 7, 14).unwrap();
    let b = d.modify_limit_query(sql, 7, 14).unwrap();
    assert_eq!(a, b);
}

#[test]
fn both_strategies_validate_the_same_inputs() {
    for strategy in [PaginationStrategy::RowNumber, PaginationStrategy::NestedTop] {
        let d = DblibDialect::new().with_pagination(strategy);
        assert!(matches!(
            d.modify_limit_query("SELECT id FROM users", 5, -1),
            Err(DialectError::InvalidArgument { .. })
        ));
        assert!(matches!(
            d.modify_limit_query("SELECT (id FROM users ORDER BY id", 5, 5),
            Err(DialectError::MalformedQuery(_))
        ));
        assert!(matches!(
            d.modify_limit_query("DELETE FROM users", 5, 5),
            Err(DialectError::MalformedQuery(_))
        ));
    }
}

#[test]
fn nested_top_window_arithmetic() {
    let out = DblibDialect::new()
        .with_pagination(PaginationStrategy::NestedTop)
        .modify_limit_query("SELECT id FROM users ORDER BY id", 10, 20)
        .unwrap();
    // inner cap covers the window, the middle TOP trims it to the limit
    assert!(out.contains("SELECT TOP 30 id FROM users"));
    assert!(out.contains("SELECT TOP 10 * FROM"));
    assert!(out.contains("inner_tbl.id DESC"));
    assert!(out.ends_with("outer_tbl.id ASC"));
}

#[test]
fn ordering_that_cannot_resolve_fails_loudly() {
    let err = dialect()
        .modify_limit_query("SELECT id FROM users ORDER BY created_at", 5, 5)
        .unwrap_err();
    assert!(matches!(err, DialectError::UnresolvedOrderingAlias(_)));
    assert!(err.to_string().contains("created_at"));
}

#[test]
fn clause_keywords_inside_literals_are_opaque() {
    let out = dialect()
        .modify_limit_query(
            "SELECT id, 'ORDER BY nothing' AS note FROM users ORDER BY id",
            5,
            5,
        )
        .unwrap();
    assert!(out.contains("OVER (ORDER BY id ASC)"));
    assert!(out.starts_with("SELECT id, note FROM ("));
}
