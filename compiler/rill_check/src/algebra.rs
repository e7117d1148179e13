//! Set algebra over finite unions of patterns.
//!
//! A set of values of type `T` is represented as an ordered `Vec<Pat>`,
//! the union of its elements: the empty vec is the empty set and
//! `[Pat::Wildcard]` is the universal set. All operations are
//! parameterized by the scrutinee type (via [`Universe`]) because "every
//! other value of this type" is only meaningful relative to a concrete
//! type, and they recurse into sub-patterns with the correspondingly
//! narrowed sub-type.
//!
//! Complement is the one non-trivial primitive; intersection is pairwise
//! and structural, and subtraction is `L − R = L ∩ Rᶜ`.

use rill_ir::{Pat, PatField};
use rill_types::Ty;

/// The universe of values in which a set of patterns lives.
///
/// Carries the scrutinee type so complements know what "everything else"
/// means, and so recursion can narrow to field/element/payload types.
#[derive(Copy, Clone)]
pub struct Universe<'t> {
    pub ty: &'t Ty,
}

impl<'t> Universe<'t> {
    /// A universe for the given scrutinee type.
    pub fn new(ty: &'t Ty) -> Self {
        Universe { ty }
    }

    /// Set subtraction `L − R`, via `L ∩ Rᶜ`.
    ///
    /// `rhs` is a single pattern rather than a union purely for the
    /// checker's convenience — it subtracts one case at a time.
    pub fn minus(&self, lhs: &[Pat], rhs: &Pat) -> Vec<Pat> {
        self.intersect(lhs, &self.complement(rhs))
    }

    /// Set intersection `L ∩ R`: the union of the pairwise intersections
    /// of `L × R`.
    pub fn intersect(&self, lhs: &[Pat], rhs: &[Pat]) -> Vec<Pat> {
        lhs.iter()
            .flat_map(|p| self.intersect_one_many(p, rhs))
            .collect()
    }

    /// The union of the pairwise intersections of a single pattern with
    /// each element of `rhs`, dropping empty results.
    pub fn intersect_one_many(&self, lhs: &Pat, rhs: &[Pat]) -> Vec<Pat> {
        rhs.iter()
            .filter_map(|q| self.intersect_one(lhs, q))
            .collect()
    }

    /// The complement of `p`: a pattern union matching exactly the values
    /// of this universe's type that `p` does not match.
    pub fn complement(&self, p: &Pat) -> Vec<Pat> {
        match p {
            // The trivial leaves leave nothing uncovered.
            Pat::Wildcard | Pat::Bind(_) => vec![],

            // One output per way a single field can fail to match, with
            // every other position unconstrained.
            Pat::Tuple(elems) => {
                let mut comp = Vec::new();
                for (i, q) in elems.iter().enumerate() {
                    let sub = Universe::new(self.ty.tuple_field(i));
                    for r in sub.complement(q) {
                        comp.push(Pat::Tuple(sandwich(i, r, elems.len())));
                    }
                }
                comp
            }

            Pat::List { elems, tail } => {
                // Matching needs at least `elems.len()` elements, so every
                // shorter list is uncovered.
                let mut comp: Vec<Pat> = (0..elems.len())
                    .map(|i| Pat::List {
                        elems: wildcards(i),
                        tail: None,
                    })
                    .collect();
                // One output per failing prefix position. When the pattern
                // has a tail it also admits longer lists, so the failing
                // position must be paired with an unconstrained tail to
                // keep `p ∪ pᶜ` universal.
                let sub = Universe::new(self.ty.elem());
                for (i, q) in elems.iter().enumerate() {
                    for r in sub.complement(q) {
                        comp.push(Pat::List {
                            elems: sandwich(i, r, elems.len()),
                            tail: tail.as_ref().map(|_| Box::new(Pat::Wildcard)),
                        });
                    }
                }
                match tail {
                    // No tail: the pattern rejects longer lists, so the
                    // complement must accept all of them.
                    None => comp.push(Pat::List {
                        elems: wildcards(elems.len() + 1),
                        tail: Some(Box::new(Pat::Wildcard)),
                    }),
                    // A tail: whatever suffix the tail rejects, appended
                    // after exactly `elems.len()` unconstrained positions.
                    Some(t) => {
                        for c in self.complement(t) {
                            comp.push(Pat::List {
                                elems: wildcards(elems.len()),
                                tail: Some(Box::new(c)),
                            });
                        }
                    }
                }
                comp
            }

            // Fields the pattern does not mention already match everything
            // and contribute nothing.
            Pat::Struct(fields) => {
                let mut comp = Vec::new();
                for f in self.ty.struct_fields() {
                    let Some(fpat) = fields.iter().find(|pf| pf.name == f.name) else {
                        continue;
                    };
                    let sub = Universe::new(&f.ty);
                    for q in sub.complement(&fpat.pat) {
                        comp.push(Pat::Struct(vec![PatField {
                            name: f.name,
                            pat: q,
                        }]));
                    }
                }
                comp
            }

            Pat::Variant { tag, payload } => {
                let mut comp = Vec::new();
                if let Some(p) = payload {
                    let Some(payload_ty) = self.ty.variant_payload(*tag) else {
                        panic!("payload pattern on bare tag: should not have type-checked");
                    };
                    let sub = Universe::new(payload_ty);
                    for q in sub.complement(p) {
                        comp.push(Pat::variant(*tag, Some(q)));
                    }
                }
                // Every other tag is entirely unmatched by a single-tag
                // pattern.
                for def in self.ty.variants() {
                    if def.tag == *tag {
                        continue;
                    }
                    let payload_pat = def.payload.as_ref().map(|_| Pat::Wildcard);
                    comp.push(Pat::variant(def.tag, payload_pat));
                }
                comp
            }
        }
    }

    /// Intersection of two single patterns; `None` is the empty set.
    ///
    /// Wildcards and binders are identities, absorbing into the other
    /// operand. Patterns of differing kinds are disjoint.
    pub fn intersect_one(&self, lhs: &Pat, rhs: &Pat) -> Option<Pat> {
        if lhs.is_universal() {
            return Some(rhs.clone());
        }
        if rhs.is_universal() {
            return Some(lhs.clone());
        }
        match (lhs, rhs) {
            (Pat::Tuple(ls), Pat::Tuple(rs)) => {
                let mut elems = Vec::with_capacity(ls.len());
                for (i, (l, r)) in ls.iter().zip(rs.iter()).enumerate() {
                    let sub = Universe::new(self.ty.tuple_field(i));
                    elems.push(sub.intersect_one(l, r)?);
                }
                Some(Pat::Tuple(elems))
            }

            (Pat::List { .. }, Pat::List { .. }) => self.intersect_lists(lhs, rhs),

            (Pat::Struct(ls), Pat::Struct(rs)) => {
                // Build the full field list in type order so the result is
                // canonical; unmentioned fields stay unconstrained.
                let mut fields = Vec::with_capacity(self.ty.struct_fields().len());
                for f in self.ty.struct_fields() {
                    let l = ls.iter().find(|pf| pf.name == f.name);
                    let r = rs.iter().find(|pf| pf.name == f.name);
                    let pat = match (l, r) {
                        (Some(l), Some(r)) => {
                            let sub = Universe::new(&f.ty);
                            sub.intersect_one(&l.pat, &r.pat)?
                        }
                        (Some(l), None) => l.pat.clone(),
                        (None, Some(r)) => r.pat.clone(),
                        (None, None) => Pat::Wildcard,
                    };
                    fields.push(PatField { name: f.name, pat });
                }
                Some(Pat::Struct(fields))
            }

            (
                Pat::Variant {
                    tag: ltag,
                    payload: lp,
                },
                Pat::Variant {
                    tag: rtag,
                    payload: rp,
                },
            ) => {
                if ltag != rtag {
                    return None;
                }
                match (lp, rp) {
                    (None, _) | (_, None) => {
                        // A bare tag constrains nothing beyond the tag
                        // itself; the other operand's payload (if any)
                        // carries through. Well-typed operands agree on
                        // payload presence, so in practice both are bare.
                        Some(Pat::variant(*ltag, None))
                    }
                    (Some(l), Some(r)) => {
                        let Some(payload_ty) = self.ty.variant_payload(*ltag) else {
                            panic!("payload pattern on bare tag: should not have type-checked");
                        };
                        let sub = Universe::new(payload_ty);
                        let payload = sub.intersect_one(l, r)?;
                        Some(Pat::variant(*ltag, Some(payload)))
                    }
                }
            }

            // Differing kinds (wildcards already handled above).
            _ => None,
        }
    }

    /// List intersection over normalized forms.
    ///
    /// Both operands are flattened (nested tails walked out) into a plain
    /// prefix plus an allow-longer flag, which makes length compatibility
    /// a straightforward comparison.
    fn intersect_lists(&self, lhs: &Pat, rhs: &Pat) -> Option<Pat> {
        let a = NormalizedList::from_pat(lhs);
        let b = NormalizedList::from_pat(rhs);
        // Keep the shorter prefix on the left so one loop covers both.
        let (short, long) = if b.elems.len() < a.elems.len() {
            (b, a)
        } else {
            (a, b)
        };

        let sub = Universe::new(self.ty.elem());
        let mut elems = Vec::with_capacity(long.elems.len());
        for (i, rp) in long.elems.iter().enumerate() {
            if let Some(lp) = short.elems.get(i) {
                // A position both constrain: empty here means no list
                // can satisfy both.
                elems.push(sub.intersect_one(lp, rp)?);
            } else {
                if !short.allow_tail {
                    // The longer prefix demands elements the shorter,
                    // tail-less pattern forbids: disjoint on length alone.
                    return None;
                }
                elems.push(rp.clone());
            }
        }
        let tail = (short.allow_tail && long.allow_tail).then(|| Box::new(Pat::Wildcard));
        Some(Pat::List { elems, tail })
    }
}

/// A list of `n` wildcard patterns.
fn wildcards(n: usize) -> Vec<Pat> {
    vec![Pat::Wildcard; n]
}

/// A list of `len` wildcards with `p` at position `j`.
fn sandwich(j: usize, p: Pat, len: usize) -> Vec<Pat> {
    let mut ps = wildcards(len);
    ps[j] = p;
    ps
}

/// A list pattern flattened to a prefix plus an allow-longer flag.
///
/// `[a, ...[b, ...rest]]` normalizes to prefix `[a, b]` with
/// `allow_tail = true`; `[a, ...[b]]` to prefix `[a, b]` with
/// `allow_tail = false`.
struct NormalizedList {
    elems: Vec<Pat>,
    allow_tail: bool,
}

impl NormalizedList {
    fn from_pat(p: &Pat) -> Self {
        let mut elems = Vec::new();
        let mut cur = p;
        loop {
            let Pat::List { elems: es, tail } = cur else {
                panic!("list normalization on {cur:?}: should not have type-checked");
            };
            elems.extend(es.iter().cloned());
            match tail {
                None => {
                    return NormalizedList {
                        elems,
                        allow_tail: false,
                    }
                }
                Some(t) => match &**t {
                    Pat::Wildcard | Pat::Bind(_) => {
                        return NormalizedList {
                            elems,
                            allow_tail: true,
                        }
                    }
                    Pat::List { .. } => cur = t,
                    _ => panic!("non-list tail: should not have type-checked"),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests;
