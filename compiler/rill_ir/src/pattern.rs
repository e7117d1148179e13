//! The pattern AST for switch expressions.
//!
//! A pattern describes a subset of the values of the scrutinee's type and
//! optionally binds identifiers to sub-values. Patterns are immutable after
//! parsing and are shared read-only across concurrent evaluations.
//!
//! Besides the AST itself this module provides the identifier-path
//! decomposition used by the runtime evaluator: [`Pat::matchers`] flattens a
//! pattern into a list of [`Matcher`]s, one per leaf, each carrying the
//! structural [`Path`] from the scrutinee root to that leaf. A case matches
//! iff every one of its matcher paths matches; evaluating paths one at a
//! time is what lets the evaluator suspend mid-case when it reaches a value
//! that is still a pending dataflow node.

use smallvec::SmallVec;
use std::fmt;

use crate::{ExprId, Name, Span, StringInterner};

/// A named field inside a struct pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatField {
    pub name: Name,
    pub pat: Pat,
}

/// A structural pattern.
///
/// `Wildcard` and `Bind` are interchangeable for matching and for the set
/// algebra; they differ only in whether the evaluator records a binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pat {
    /// `_` — matches everything, binds nothing.
    Wildcard,
    /// An identifier — matches everything, binds the value to the name.
    Bind(Name),
    /// Fixed-arity tuple, matched field-wise.
    Tuple(Vec<Pat>),
    /// Positional list prefix plus optional tail.
    ///
    /// Without a tail the value's length must equal `elems.len()` exactly;
    /// with a tail, the tail pattern matches the remaining suffix as a list
    /// value (so tails may themselves be list patterns).
    List {
        elems: Vec<Pat>,
        tail: Option<Box<Pat>>,
    },
    /// Named struct fields; fields absent from the pattern are
    /// unconstrained.
    Struct(Vec<PatField>),
    /// Tagged-union variant; the payload pattern is present iff the tag
    /// carries a payload (enforced upstream by type checking).
    Variant {
        tag: Name,
        payload: Option<Box<Pat>>,
    },
}

impl Pat {
    /// Convenience constructor for list patterns.
    pub fn list(elems: Vec<Pat>, tail: Option<Pat>) -> Pat {
        Pat::List {
            elems,
            tail: tail.map(Box::new),
        }
    }

    /// Convenience constructor for variant patterns.
    pub fn variant(tag: Name, payload: Option<Pat>) -> Pat {
        Pat::Variant {
            tag,
            payload: payload.map(Box::new),
        }
    }

    /// Whether this pattern matches every value of its type.
    ///
    /// Only the trivial leaves qualify; a tuple of wildcards is *not*
    /// reported as universal even though it matches everything.
    #[inline]
    pub fn is_universal(&self) -> bool {
        matches!(self, Pat::Wildcard | Pat::Bind(_))
    }

    /// Flatten the pattern into one [`Matcher`] per leaf, in binding order
    /// (left to right, outer to inner).
    ///
    /// Patterns that constrain a value without containing any leaf — the
    /// exact empty list `[]` and payload-less variants — contribute a
    /// non-binding, check-only matcher, so that the conjunction of all
    /// returned paths is always equivalent to the pattern itself.
    pub fn matchers(&self) -> Vec<Matcher> {
        let mut out = Vec::new();
        let mut prefix = SmallVec::new();
        self.collect_matchers(&mut prefix, &mut out);
        out
    }

    fn collect_matchers(&self, prefix: &mut SmallVec<[PathSeg; 4]>, out: &mut Vec<Matcher>) {
        match self {
            Pat::Wildcard => out.push(Matcher {
                ident: None,
                path: Path(prefix.clone()),
            }),
            Pat::Bind(name) => out.push(Matcher {
                ident: Some(*name),
                path: Path(prefix.clone()),
            }),
            Pat::Tuple(elems) => {
                // A zero-arity tuple constrains nothing beyond its type.
                for (i, p) in elems.iter().enumerate() {
                    prefix.push(PathSeg::TupleIndex(index_u32(i)));
                    p.collect_matchers(prefix, out);
                    prefix.pop();
                }
            }
            Pat::List { elems, tail } => {
                let len = index_u32(elems.len());
                let exact = tail.is_none();
                if elems.is_empty() && tail.is_none() {
                    // `[]` has no leaves but still requires an exact
                    // length-zero list.
                    prefix.push(PathSeg::ListLen { len: 0, exact: true });
                    out.push(Matcher {
                        ident: None,
                        path: Path(prefix.clone()),
                    });
                    prefix.pop();
                }
                for (i, p) in elems.iter().enumerate() {
                    prefix.push(PathSeg::ListLen { len, exact });
                    prefix.push(PathSeg::ListIndex(index_u32(i)));
                    p.collect_matchers(prefix, out);
                    prefix.pop();
                    prefix.pop();
                }
                if let Some(t) = tail {
                    prefix.push(PathSeg::ListLen { len, exact: false });
                    prefix.push(PathSeg::ListSuffix(len));
                    t.collect_matchers(prefix, out);
                    prefix.pop();
                    prefix.pop();
                }
            }
            Pat::Struct(fields) => {
                for f in fields {
                    prefix.push(PathSeg::Field(f.name));
                    f.pat.collect_matchers(prefix, out);
                    prefix.pop();
                }
            }
            Pat::Variant { tag, payload } => match payload {
                Some(p) => {
                    prefix.push(PathSeg::Variant {
                        tag: *tag,
                        payload: true,
                    });
                    p.collect_matchers(prefix, out);
                    prefix.pop();
                }
                None => {
                    prefix.push(PathSeg::Variant {
                        tag: *tag,
                        payload: false,
                    });
                    out.push(Matcher {
                        ident: None,
                        path: Path(prefix.clone()),
                    });
                    prefix.pop();
                }
            },
        }
    }

    /// Render the pattern in source syntax for diagnostics.
    pub fn render(&self, interner: &StringInterner) -> String {
        match self {
            Pat::Wildcard => "_".to_string(),
            Pat::Bind(name) => interner.lookup(*name).to_string(),
            Pat::Tuple(elems) => {
                let parts: Vec<String> = elems.iter().map(|p| p.render(interner)).collect();
                format!("({})", parts.join(", "))
            }
            Pat::List { elems, tail } => {
                let mut parts: Vec<String> = elems.iter().map(|p| p.render(interner)).collect();
                if let Some(t) = tail {
                    parts.push(format!("...{}", t.render(interner)));
                }
                format!("[{}]", parts.join(", "))
            }
            Pat::Struct(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{}: {}", interner.lookup(f.name), f.pat.render(interner)))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
            Pat::Variant { tag, payload } => match payload {
                Some(p) => format!("#{}({})", interner.lookup(*tag), p.render(interner)),
                None => format!("#{}", interner.lookup(*tag)),
            },
        }
    }
}

/// One segment of a structural path from the scrutinee root to a
/// pattern leaf.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathSeg {
    /// Project tuple field `index`.
    TupleIndex(u32),
    /// Check the length of a list value: at least `len` elements, exactly
    /// `len` when `exact`. Leaves the list itself as the current value.
    ListLen { len: u32, exact: bool },
    /// Project list element `index`. Always preceded on the same path by a
    /// `ListLen` that guarantees the index is in bounds.
    ListIndex(u32),
    /// Project the suffix starting at `start` as a fresh list value.
    ListSuffix(u32),
    /// Project struct field `name`.
    Field(Name),
    /// Check the variant tag. When `payload` is true the current value
    /// becomes the payload (which must exist); otherwise the path ends at
    /// the tag check.
    Variant { tag: Name, payload: bool },
}

/// A structural path from the scrutinee root to a sub-value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path(SmallVec<[PathSeg; 4]>);

impl Path {
    /// The segments of the path, outermost first.
    #[inline]
    pub fn segs(&self) -> &[PathSeg] {
        &self.0
    }

    /// True when the path has no segments left.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.0.is_empty()
    }
}

/// An identifier paired with the path to the sub-value it binds.
///
/// `ident` is `None` for wildcard leaves and check-only paths; those
/// still have to match for the case to match, they just bind nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matcher {
    pub ident: Option<Name>,
    pub path: Path,
}

/// A single case within a switch expression.
///
/// Parsed once and immutable thereafter: if the switch value matches
/// `pat`, the switch expression's value is the value of `expr`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseClause {
    /// Source position of the clause, set by the parser.
    pub span: Span,
    /// Commentary text preceding this case, if any.
    pub comment: String,
    /// The pattern of this case.
    pub pat: Pat,
    /// The result expression, owned by the enclosing evaluator's arena.
    pub expr: ExprId,
}

impl CaseClause {
    /// Whether two clauses have the same pattern and result expression.
    ///
    /// Positions and commentary are ignored.
    pub fn same_shape(&self, other: &CaseClause) -> bool {
        self.pat == other.pat && self.expr == other.expr
    }
}

impl fmt::Display for CaseClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case(<pat>, expr#{})", self.expr.raw())
    }
}

/// Convert a container index to the u32 form paths carry.
#[inline]
fn index_u32(i: usize) -> u32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "pattern arity is parser-bounded, far below u32::MAX"
    )]
    {
        i as u32
    }
}
