//! The exhaustiveness/reachability driver.

use rill_diagnostic::{Diagnostic, DiagnosticBatch, ErrorCode};
use rill_ir::{CaseClause, Pat, Span, StringInterner};
use rill_types::Ty;

use crate::algebra::Universe;

/// Statically analyze the cases of a switch expression.
///
/// Walks the case list once, tracking the set of values not yet handled
/// by any case (as a pattern union, starting from the universal set):
///
/// 1. A case whose pattern intersects nothing unhandled is unreachable —
///    recorded against the case's own span, and the walk continues.
/// 2. The case's coverage is then subtracted from the unhandled set
///    regardless, so later cases are not penalized twice for a region an
///    unreachable case already claimed.
///
/// A non-empty unhandled set after the walk means the cases are not
/// exhaustive, recorded against the switch expression's span and ordered
/// *before* the per-case diagnostics: the defect in the whole precedes
/// the defects in the parts.
///
/// An empty case list is itself non-exhaustive (the unhandled set starts
/// non-empty and nothing shrinks it). The pass is purely informational;
/// it has no suspension points and shares no state between calls, so
/// independent switch expressions may be checked concurrently.
#[tracing::instrument(level = "debug", skip_all, fields(cases = cases.len()))]
pub fn check_cases(
    ty: &Ty,
    switch_span: Span,
    cases: &[CaseClause],
    interner: &StringInterner,
) -> Vec<Diagnostic> {
    let u = Universe::new(ty);
    let mut case_diags = DiagnosticBatch::new();
    let mut unhandled = vec![Pat::Wildcard];

    for c in cases {
        if u.intersect_one_many(&c.pat, &unhandled).is_empty() {
            // Nothing currently unhandled overlaps this pattern: every
            // value it matches was already claimed by an earlier case.
            tracing::debug!(case = %c.span, "unreachable case");
            case_diags.error(
                ErrorCode::UnreachableCase,
                c.span,
                format!("case is unreachable: {}", c.pat.render(interner)),
            );
        }
        unhandled = u.minus(&unhandled, &c.pat);
    }

    let mut diags = DiagnosticBatch::new();
    if !unhandled.is_empty() {
        tracing::debug!(remaining = unhandled.len(), "non-exhaustive cases");
        diags.error(
            ErrorCode::NonExhaustiveCases,
            switch_span,
            "case patterns are not exhaustive",
        );
    }
    diags.append(case_diags);
    diags.into_vec()
}
