use std::sync::Arc;

use rill_ir::{Pat, PatField, StringInterner};

use super::*;
use crate::{PendingValue, ResumeFn};

#[derive(Debug)]
struct InertNode;

impl PendingValue for InertNode {
    fn resume_with(&self, _k: ResumeFn) -> Value {
        Value::pending(Arc::new(InertNode))
    }

    fn node_id(&self) -> u64 {
        0
    }
}

#[test]
fn wildcard_and_bind_match_anything() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    for v in [Value::Int(0), Value::str("s"), Value::list(vec![])] {
        assert!(matches(&Pat::Wildcard, &v));
        assert!(matches(&Pat::Bind(x), &v));
    }
}

#[test]
fn tuple_matches_field_wise() {
    let pat = Pat::Tuple(vec![Pat::Wildcard, Pat::Wildcard]);
    assert!(matches(&pat, &Value::tuple(vec![Value::Int(1), Value::Int(2)])));
}

#[test]
fn tuple_fails_fast_on_first_mismatch() {
    let interner = StringInterner::new();
    let a = interner.intern("A");
    let b = interner.intern("B");
    let pat = Pat::Tuple(vec![Pat::variant(a, None), Pat::Wildcard]);
    let value = Value::tuple(vec![Value::variant(b, None), Value::Int(2)]);
    assert!(!matches(&pat, &value));
}

#[test]
fn exact_list_requires_exact_length() {
    let pat = Pat::list(vec![Pat::Wildcard], None);
    assert!(matches(&pat, &Value::list(vec![Value::Int(1)])));
    assert!(!matches(&pat, &Value::list(vec![])));
    assert!(!matches(&pat, &Value::list(vec![Value::Int(1), Value::Int(2)])));
}

#[test]
fn tail_list_matches_suffix_as_list() {
    let interner = StringInterner::new();
    let a = interner.intern("A");
    // [#A, ...[#A]] — exactly two elements, both #A.
    let pat = Pat::list(
        vec![Pat::variant(a, None)],
        Some(Pat::list(vec![Pat::variant(a, None)], None)),
    );
    let two = Value::list(vec![Value::variant(a, None), Value::variant(a, None)]);
    let one = Value::list(vec![Value::variant(a, None)]);
    assert!(matches(&pat, &two));
    assert!(!matches(&pat, &one));
}

#[test]
fn tail_binder_accepts_any_suffix() {
    let interner = StringInterner::new();
    let rest = interner.intern("rest");
    let pat = Pat::list(vec![Pat::Wildcard], Some(Pat::Bind(rest)));
    assert!(matches(&pat, &Value::list(vec![Value::Int(1)])));
    assert!(matches(
        &pat,
        &Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    ));
    assert!(!matches(&pat, &Value::list(vec![])));
}

#[test]
fn struct_ignores_unmentioned_fields() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");
    let pat = Pat::Struct(vec![PatField {
        name: a,
        pat: Pat::Wildcard,
    }]);
    let value = Value::struct_(vec![(a, Value::Int(1)), (b, Value::Int(2))]);
    assert!(matches(&pat, &value));
}

#[test]
fn variant_requires_tag_equality() {
    let interner = StringInterner::new();
    let some = interner.intern("Some");
    let none = interner.intern("None");

    let pat = Pat::variant(some, Some(Pat::Wildcard));
    assert!(matches(&pat, &Value::variant(some, Some(Value::Int(1)))));
    assert!(!matches(&pat, &Value::variant(none, None)));

    let tag_only = Pat::variant(none, None);
    assert!(matches(&tag_only, &Value::variant(none, None)));
    assert!(!matches(&tag_only, &Value::variant(some, Some(Value::Int(1)))));
}

#[test]
fn variant_payload_is_matched_recursively() {
    let interner = StringInterner::new();
    let some = interner.intern("Some");
    let none = interner.intern("None");
    // #Some(#None)
    let pat = Pat::variant(some, Some(Pat::variant(none, None)));
    assert!(matches(
        &pat,
        &Value::variant(some, Some(Value::variant(none, None)))
    ));
    assert!(!matches(
        &pat,
        &Value::variant(some, Some(Value::variant(some, Some(Value::Int(0)))))
    ));
}

#[test]
#[should_panic(expected = "should not have type-checked")]
fn shape_mismatch_panics() {
    let pat = Pat::Tuple(vec![Pat::Wildcard]);
    let _ = matches(&pat, &Value::Int(3));
}

#[test]
#[should_panic(expected = "deferred value in synchronous match")]
fn pending_value_panics() {
    let _ = matches(&Pat::Wildcard, &Value::pending(Arc::new(InertNode)));
}
