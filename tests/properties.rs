//! Evaluator guarantees: first-match-wins ordering, short-circuiting,
//! null fallthrough, purity and the construction-time type checks.

use rowcase::RowcaseError;
use rowcase::prelude::*;

mod common;
use common::{FLAVORS, make_case};

fn record(integer: i64, integer2: i64) -> Record {
    Record::new().with("integer", integer).with("integer2", integer2)
}

#[test]
fn first_matching_branch_wins() {
    let expr = case()
        .when(gt(field("integer"), val(0)), val("positive"))
        .when(gt(field("integer"), val(1)), val("big"))
        .end()
        .unwrap();
    assert_eq!(expr.eval(&record(5, 0)).unwrap(), Value::from("positive"));
}

#[test]
fn branch_order_changes_overlapping_matches() {
    let expr = case()
        .when(gt(field("integer"), val(1)), val("big"))
        .when(gt(field("integer"), val(0)), val("positive"))
        .end()
        .unwrap();
    assert_eq!(expr.eval(&record(5, 0)).unwrap(), Value::from("big"));
}

#[test]
fn no_match_without_default_is_null() {
    for flavor in FLAVORS {
        let expr = make_case(
            flavor,
            field("integer"),
            &[(val(1), val("one")), (val(2), val("two"))],
            None,
            None,
        );
        assert_eq!(expr.eval(&record(3, 0)).unwrap(), Value::Null);
    }
}

#[test]
fn value_match_example() {
    for flavor in FLAVORS {
        let expr = make_case(
            flavor,
            field("integer"),
            &[(val(1), val("one")), (val(2), val("two"))],
            Some(val("other")),
            None,
        );
        assert_eq!(expr.eval(&record(1, 0)).unwrap(), Value::from("one"));
        assert_eq!(expr.eval(&record(3, 0)).unwrap(), Value::from("other"));
        assert_eq!(expr.eval(&record(2, 0)).unwrap(), Value::from("two"));
    }
}

#[test]
fn predicate_example() {
    let expr = case()
        .when(lt(field("integer2"), field("integer")), val("less"))
        .when(gt(field("integer2"), field("integer")), val("greater"))
        .r#else(val("equal"))
        .unwrap();
    assert_eq!(expr.eval(&record(2, 3)).unwrap(), Value::from("greater"));
    assert_eq!(expr.eval(&record(3, 2)).unwrap(), Value::from("less"));
    assert_eq!(expr.eval(&record(2, 2)).unwrap(), Value::from("equal"));
}

#[test]
fn evaluation_is_pure() {
    let expr = case_on(field("integer"))
        .when(val(1), field("integer") + val(10))
        .r#else(val(0))
        .unwrap();
    let rec = record(1, 0);
    let first = expr.eval(&rec).unwrap();
    let second = expr.eval(&rec).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Value::Integer(11));
    // the record itself is untouched
    assert_eq!(rec.get("integer"), Some(&Value::Integer(1)));
}

#[test]
fn later_branches_are_not_evaluated_after_a_match() {
    // The second branch references a field that does not exist; it may only
    // error for records that get past the first branch.
    let expr = case()
        .when(eq(field("integer"), val(1)), val("hit"))
        .when(eq(field("missing"), val(1)), val("unreachable"))
        .end()
        .unwrap();

    assert_eq!(expr.eval(&record(1, 0)).unwrap(), Value::from("hit"));
    assert!(matches!(
        expr.eval(&record(2, 0)),
        Err(RowcaseError::UnknownField(_))
    ));
}

#[test]
fn selected_result_resolves_against_the_same_record() {
    let expr = case()
        .when(gt(field("integer"), val(0)), field("integer2") * val(2))
        .end()
        .unwrap();
    assert_eq!(expr.eval(&record(1, 21)).unwrap(), Value::Integer(42));
}

#[test]
fn conjunction_and_negation() {
    let in_range = and2(gt(field("integer"), val(1)), lt(field("integer"), val(4)));
    assert!(in_range.matches(&record(2, 0)).unwrap());
    assert!(!in_range.matches(&record(4, 0)).unwrap());
    assert!(not(in_range).matches(&record(4, 0)).unwrap());
}

#[test]
fn null_comparison_falls_through_to_default() {
    let rec = Record::new().with("integer", Value::Null);
    for flavor in FLAVORS {
        let expr = make_case(
            flavor,
            field("integer"),
            &[(val(1), val("one"))],
            Some(val("other")),
            None,
        );
        assert_eq!(expr.eval(&rec).unwrap(), Value::from("other"));
    }
}

#[test]
fn literal_results_must_unify() {
    let built = case_on(field("integer"))
        .when(val(1), val("one"))
        .when(val(2), val(2))
        .end();
    assert!(matches!(built, Err(RowcaseError::TypeMismatch { .. })));
}

#[test]
fn declared_output_rejects_incompatible_literal() {
    let built = case()
        .when(gt(field("integer"), val(0)), val("positive"))
        .output(ValueKind::Integer)
        .end();
    assert!(matches!(built, Err(RowcaseError::TypeMismatch { .. })));
}

#[test]
fn declared_output_widens_numeric_results() {
    let expr = case_on(field("integer"))
        .when(val(1), val(1))
        .output(ValueKind::Float)
        .r#else(val(0))
        .unwrap();
    assert_eq!(expr.eval(&record(1, 0)).unwrap(), Value::Float(1.0));
    assert_eq!(expr.eval(&record(9, 0)).unwrap(), Value::Float(0.0));
}

#[test]
fn non_literal_result_is_checked_at_evaluation() {
    let expr = case_on(field("integer"))
        .when(val(1), field("label"))
        .output(ValueKind::Integer)
        .end()
        .unwrap();
    let rec = Record::new().with("integer", 1).with("label", "one");
    assert!(matches!(
        expr.eval(&rec),
        Err(RowcaseError::TypeMismatch { .. })
    ));
}

#[test]
fn unknown_field_and_relation_are_reported() {
    let expr = case()
        .when(eq(field("nope"), val(1)), val(1))
        .end()
        .unwrap();
    assert!(matches!(
        expr.eval(&record(1, 0)),
        Err(RowcaseError::UnknownField(_))
    ));

    let expr = case()
        .when(eq(field("nope.integer"), val(1)), val(1))
        .end()
        .unwrap();
    assert!(matches!(
        expr.eval(&record(1, 0)),
        Err(RowcaseError::UnknownRelation(_))
    ));
}

#[test]
fn unlinked_relation_resolves_to_null_and_falls_through() {
    let rec = Record::new().with("integer", 1).with_empty_relation("fk");
    let expr = case_on(field("fk.integer"))
        .when(val(1), val("one"))
        .r#else(val("other"))
        .unwrap();
    assert_eq!(expr.eval(&rec).unwrap(), Value::from("other"));
}

#[test]
fn nested_case_as_result() {
    let inner = case_on(field("integer2"))
        .when(val(0), val("zero"))
        .r#else(val("nonzero"))
        .unwrap();
    let outer = case()
        .when(gt(field("integer"), val(0)), inner)
        .r#else(val("negative"))
        .unwrap();
    assert_eq!(outer.eval(&record(1, 0)).unwrap(), Value::from("zero"));
    assert_eq!(outer.eval(&record(1, 7)).unwrap(), Value::from("nonzero"));
}
