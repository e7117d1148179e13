use pretty_assertions::assert_eq;
use rill_ir::{Name, Pat, PatField, StringInterner};
use rill_types::{Field, Ty, VariantDef};

use super::{NormalizedList, Universe};

fn color(interner: &StringInterner) -> (Ty, Name, Name) {
    let red = interner.intern("Red");
    let blue = interner.intern("Blue");
    let ty = Ty::Variant(vec![
        VariantDef {
            tag: red,
            payload: None,
        },
        VariantDef {
            tag: blue,
            payload: None,
        },
    ]);
    (ty, red, blue)
}

fn option_int(interner: &StringInterner) -> (Ty, Name, Name) {
    let some = interner.intern("Some");
    let none = interner.intern("None");
    let ty = Ty::Variant(vec![
        VariantDef {
            tag: some,
            payload: Some(Ty::Int),
        },
        VariantDef {
            tag: none,
            payload: None,
        },
    ]);
    (ty, some, none)
}

#[test]
fn complement_of_universal_is_empty() {
    let u = Universe::new(&Ty::Int);
    assert_eq!(u.complement(&Pat::Wildcard), vec![]);

    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(u.complement(&Pat::Bind(x)), vec![]);
}

#[test]
fn complement_of_variant_covers_other_tags() {
    let interner = StringInterner::new();
    let (ty, red, blue) = color(&interner);
    let u = Universe::new(&ty);

    let comp = u.complement(&Pat::variant(red, None));
    assert_eq!(comp, vec![Pat::variant(blue, None)]);
}

#[test]
fn complement_of_variant_payload_recurses() {
    let interner = StringInterner::new();
    let (ty, some, none) = option_int(&interner);
    let inner = interner.intern("v");
    let u = Universe::new(&ty);

    // The payload binder matches every int, so only the other tag is
    // left uncovered.
    let comp = u.complement(&Pat::variant(some, Some(Pat::Bind(inner))));
    assert_eq!(comp, vec![Pat::variant(none, None)]);
}

#[test]
fn complement_of_tuple_varies_one_position() {
    let interner = StringInterner::new();
    let (color_ty, red, blue) = color(&interner);
    let ty = Ty::Tuple(vec![color_ty, Ty::Int]);
    let u = Universe::new(&ty);

    let p = Pat::Tuple(vec![Pat::variant(red, None), Pat::Wildcard]);
    let comp = u.complement(&p);
    assert_eq!(
        comp,
        vec![Pat::Tuple(vec![Pat::variant(blue, None), Pat::Wildcard])]
    );
}

#[test]
fn complement_of_fixed_list_covers_other_lengths() {
    let ty = Ty::list(Ty::Int);
    let u = Universe::new(&ty);

    // `[_]` misses the empty list and every list of two or more.
    let comp = u.complement(&Pat::list(vec![Pat::Wildcard], None));
    assert_eq!(
        comp,
        vec![
            Pat::list(vec![], None),
            Pat::list(
                vec![Pat::Wildcard, Pat::Wildcard],
                Some(Pat::Wildcard)
            ),
        ]
    );
}

#[test]
fn complement_of_fixed_list_element() {
    let interner = StringInterner::new();
    let (elem_ty, red, blue) = color(&interner);
    let ty = Ty::list(elem_ty);
    let u = Universe::new(&ty);

    let comp = u.complement(&Pat::list(vec![Pat::variant(red, None)], None));
    assert_eq!(
        comp,
        vec![
            Pat::list(vec![], None),
            Pat::list(vec![Pat::variant(blue, None)], None),
            Pat::list(
                vec![Pat::Wildcard, Pat::Wildcard],
                Some(Pat::Wildcard)
            ),
        ]
    );
}

#[test]
fn complement_of_tail_list_keeps_tail_on_element_entries() {
    let interner = StringInterner::new();
    let (elem_ty, red, blue) = color(&interner);
    let rest = interner.intern("rest");
    let ty = Ty::list(elem_ty);
    let u = Universe::new(&ty);

    // `[#Red, ...rest]` rejects `[#Blue, x]` no matter how long the
    // suffix, so the first-element complement must itself allow a tail.
    let p = Pat::list(vec![Pat::variant(red, None)], Some(Pat::Bind(rest)));
    let comp = u.complement(&p);
    assert_eq!(
        comp,
        vec![
            Pat::list(vec![], None),
            Pat::list(vec![Pat::variant(blue, None)], Some(Pat::Wildcard)),
        ]
    );
}

#[test]
fn complement_union_with_pattern_is_universal_for_tail_lists() {
    let interner = StringInterner::new();
    let (elem_ty, red, blue) = color(&interner);
    let rest = interner.intern("rest");
    let ty = Ty::list(elem_ty);
    let u = Universe::new(&ty);

    let p = Pat::list(vec![Pat::variant(red, None)], Some(Pat::Bind(rest)));
    let comp = u.complement(&p);

    // `[#Blue, _]` does not match p, so it must land inside pᶜ.
    let probe = Pat::list(
        vec![Pat::variant(blue, None), Pat::Wildcard],
        None,
    );
    assert!(!u.intersect_one_many(&probe, &comp).is_empty());
}

#[test]
fn complement_of_struct_only_constrains_mentioned_fields() {
    let interner = StringInterner::new();
    let (color_ty, red, blue) = color(&interner);
    let hue = interner.intern("hue");
    let count = interner.intern("count");
    let ty = Ty::Struct(vec![
        Field {
            name: hue,
            ty: color_ty,
        },
        Field {
            name: count,
            ty: Ty::Int,
        },
    ]);
    let u = Universe::new(&ty);

    let p = Pat::Struct(vec![PatField {
        name: hue,
        pat: Pat::variant(red, None),
    }]);
    let comp = u.complement(&p);
    assert_eq!(
        comp,
        vec![Pat::Struct(vec![PatField {
            name: hue,
            pat: Pat::variant(blue, None),
        }])]
    );
}

#[test]
fn intersect_one_absorbs_wildcards() {
    let interner = StringInterner::new();
    let (ty, red, _) = color(&interner);
    let u = Universe::new(&ty);

    let p = Pat::variant(red, None);
    assert_eq!(u.intersect_one(&Pat::Wildcard, &p), Some(p.clone()));
    assert_eq!(u.intersect_one(&p, &Pat::Wildcard), Some(p.clone()));

    let x = interner.intern("x");
    assert_eq!(u.intersect_one(&p, &Pat::Bind(x)), Some(p));
}

#[test]
fn intersect_one_disjoint_tags() {
    let interner = StringInterner::new();
    let (ty, red, blue) = color(&interner);
    let u = Universe::new(&ty);

    assert_eq!(
        u.intersect_one(&Pat::variant(red, None), &Pat::variant(blue, None)),
        None
    );
}

#[test]
fn intersect_one_lists_disjoint_on_length() {
    let ty = Ty::list(Ty::Int);
    let u = Universe::new(&ty);

    let one = Pat::list(vec![Pat::Wildcard], None);
    let two = Pat::list(vec![Pat::Wildcard, Pat::Wildcard], None);
    assert_eq!(u.intersect_one(&one, &two), None);
}

#[test]
fn intersect_one_tail_list_narrows_to_fixed() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let r = interner.intern("r");
    let ty = Ty::list(Ty::Int);
    let u = Universe::new(&ty);

    // The binder absorbs into the other operand, so the result is the
    // closed two-element shape.
    let open = Pat::list(vec![Pat::Bind(x)], Some(Pat::Bind(r)));
    let fixed = Pat::list(vec![Pat::Wildcard, Pat::Wildcard], None);
    assert_eq!(
        u.intersect_one(&open, &fixed),
        Some(Pat::list(vec![Pat::Wildcard, Pat::Wildcard], None))
    );
}

#[test]
fn intersect_one_structs_merge_fields_in_type_order() {
    let interner = StringInterner::new();
    let (color_ty, red, _) = color(&interner);
    let hue = interner.intern("hue");
    let count = interner.intern("count");
    let n = interner.intern("n");
    let ty = Ty::Struct(vec![
        Field {
            name: hue,
            ty: color_ty,
        },
        Field {
            name: count,
            ty: Ty::Int,
        },
    ]);
    let u = Universe::new(&ty);

    let l = Pat::Struct(vec![PatField {
        name: hue,
        pat: Pat::variant(red, None),
    }]);
    let r = Pat::Struct(vec![PatField {
        name: count,
        pat: Pat::Bind(n),
    }]);
    assert_eq!(
        u.intersect_one(&l, &r),
        Some(Pat::Struct(vec![
            PatField {
                name: hue,
                pat: Pat::variant(red, None),
            },
            PatField {
                name: count,
                pat: Pat::Bind(n),
            },
        ]))
    );
}

#[test]
fn minus_shrinks_to_empty_when_covered() {
    let interner = StringInterner::new();
    let (ty, red, blue) = color(&interner);
    let u = Universe::new(&ty);

    let after_red = u.minus(&[Pat::Wildcard], &Pat::variant(red, None));
    assert_eq!(after_red, vec![Pat::variant(blue, None)]);

    let after_blue = u.minus(&after_red, &Pat::variant(blue, None));
    assert_eq!(after_blue, vec![]);
}

#[test]
fn minus_is_idempotent() {
    let interner = StringInterner::new();
    let (ty, red, _) = color(&interner);
    let u = Universe::new(&ty);

    let once = u.minus(&[Pat::Wildcard], &Pat::variant(red, None));
    let twice = u.minus(&once, &Pat::variant(red, None));
    assert_eq!(once, twice);
}

#[test]
fn normalized_list_flattens_nested_tails() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");
    let rest = interner.intern("rest");

    let nested = Pat::list(
        vec![Pat::Bind(a)],
        Some(Pat::list(vec![Pat::Bind(b)], Some(Pat::Bind(rest)))),
    );
    let n = NormalizedList::from_pat(&nested);
    assert_eq!(n.elems, vec![Pat::Bind(a), Pat::Bind(b)]);
    assert!(n.allow_tail);

    let closed = Pat::list(
        vec![Pat::Bind(a)],
        Some(Pat::list(vec![Pat::Bind(b)], None)),
    );
    let n = NormalizedList::from_pat(&closed);
    assert_eq!(n.elems, vec![Pat::Bind(a), Pat::Bind(b)]);
    assert!(!n.allow_tail);
}
