//! Ordered diagnostic collection.

use rill_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// An ordered collector of diagnostics for one analysis pass.
///
/// Passes push into a batch as they walk their input and finalize with
/// [`DiagnosticBatch::into_vec`]; nothing short-circuits, so a single run
/// reports every problem it can find. Order of insertion is preserved —
/// the exhaustiveness checker relies on this to report the switch-level
/// defect before the per-case ones.
#[derive(Debug, Default)]
pub struct DiagnosticBatch {
    diags: Vec<Diagnostic>,
}

impl DiagnosticBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        DiagnosticBatch::default()
    }

    /// Push a prepared diagnostic.
    pub fn push(&mut self, diag: Diagnostic) {
        self.diags.push(diag);
    }

    /// Push an error-severity diagnostic built from parts.
    pub fn error(&mut self, code: ErrorCode, span: Span, message: impl Into<String>) {
        self.diags.push(Diagnostic::error(code, span, message));
    }

    /// Append another batch, preserving both orders.
    pub fn append(&mut self, mut other: DiagnosticBatch) {
        self.diags.append(&mut other.diags);
    }

    /// Whether any diagnostics were collected.
    pub fn is_empty(&self) -> bool {
        self.diags.is_empty()
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diags.len()
    }

    /// Finalize into the collected diagnostics, in insertion order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diags
    }
}
