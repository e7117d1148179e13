//! Rill IR - core data structures for the switch-expression subsystem.
//!
//! This crate contains the types shared by the static checker and the
//! runtime evaluator:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Opaque expression ids into the enclosing evaluator's arena
//! - The pattern AST (`Pat`), case clauses, and identifier-path extraction
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: strings become `Name(u32)` for O(1) equality
//! - **Closed enums**: patterns and path segments are sum types so the
//!   algebra and the evaluator get exhaustive-match support from the
//!   compiler itself
//! - **Immutable after parse**: a `CaseClause` never changes once built,
//!   so case lists can be shared across concurrent evaluations

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod expr_id;
mod interner;
mod name;
mod pattern;
mod span;

pub use expr_id::ExprId;
pub use interner::StringInterner;
pub use name::Name;
pub use pattern::{CaseClause, Matcher, Pat, PatField, Path, PathSeg};
pub use span::{Span, SpanError};
