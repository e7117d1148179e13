//! The direct synchronous matcher.
//!
//! A pure predicate over fully realized values: no bindings, no
//! suspension. The static checker's soundness properties are phrased in
//! terms of this matcher, and the evaluator's path-based matching must
//! agree with it case by case.

use rill_ir::Pat;

use crate::Value;

/// Does `pat` match `value`?
///
/// Binding of identifiers is the evaluator's concern; here `Bind` is
/// just another wildcard.
///
/// # Panics
/// Panics on pattern/value shape combinations the upstream type checker
/// should have rejected, and on [`Value::Pending`] — a deferred value
/// has no business in a synchronous match.
pub fn matches(pat: &Pat, value: &Value) -> bool {
    if value.is_pending() {
        panic!("deferred value in synchronous match");
    }
    match pat {
        Pat::Wildcard | Pat::Bind(_) => true,
        Pat::Tuple(pats) => {
            let Value::Tuple(fields) = value else {
                panic!("tuple pattern on {}: should not have type-checked", value.kind_name());
            };
            if fields.len() != pats.len() {
                panic!("tuple arity mismatch: should not have type-checked");
            }
            pats.iter().zip(fields.iter()).all(|(p, v)| matches(p, v))
        }
        Pat::List { elems, tail } => {
            let Value::List(items) = value else {
                panic!("list pattern on {}: should not have type-checked", value.kind_name());
            };
            if items.len() < elems.len() {
                return false;
            }
            if tail.is_none() && elems.len() < items.len() {
                return false;
            }
            if !elems.iter().zip(items.iter()).all(|(p, v)| matches(p, v)) {
                return false;
            }
            match tail {
                Some(t) => {
                    let suffix = Value::list(items[elems.len()..].to_vec());
                    matches(t, &suffix)
                }
                None => true,
            }
        }
        Pat::Struct(fields) => {
            let Value::Struct(map) = value else {
                panic!("struct pattern on {}: should not have type-checked", value.kind_name());
            };
            fields.iter().all(|f| match map.get(&f.name) {
                Some(v) => matches(&f.pat, v),
                None => panic!("missing struct field: should not have type-checked"),
            })
        }
        Pat::Variant { tag, payload } => {
            let Value::Variant(variant) = value else {
                panic!("variant pattern on {}: should not have type-checked", value.kind_name());
            };
            if variant.tag != *tag {
                return false;
            }
            match payload {
                Some(p) => match &variant.payload {
                    Some(v) => matches(p, v),
                    None => panic!("missing variant payload: should not have type-checked"),
                },
                // A tag-only pattern succeeds whatever the payload is;
                // well-typed values agree with the tag map anyway.
                None => true,
            }
        }
    }
}

#[cfg(test)]
mod tests;
