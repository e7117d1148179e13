//! Error types for switch evaluation.
//!
//! Factory functions (e.g. [`no_case_matched`]) are the public
//! constructors; they populate both `kind` and `message` so callers can
//! match structurally while users see a rendered message.

use std::fmt;

use rill_ir::Span;

use crate::Value;

/// Result of evaluation.
///
/// `Ok` carries the switch expression's value, which may itself be a
/// [`crate::Value::Pending`] handle when the winning case suspended.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// No case pattern matched the scrutinee. Should be unreachable for a
    /// statically checked case list; kept as a runtime guard regardless.
    NoCaseMatched,
    /// The dataflow dependency being matched failed when it resolved.
    DependencyFailed {
        /// Identity of the failed graph node.
        node: u64,
    },
    /// An error raised by the enclosing expression evaluator while
    /// evaluating a case's result expression.
    Custom,
}

/// An evaluation-time error, carrying the switch expression's source
/// position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
    pub span: Span,
}

impl EvalError {
    /// Create an uncategorized error (for the `ExprEval` seam).
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        EvalError {
            kind: EvalErrorKind::Custom,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.message)
    }
}

impl std::error::Error for EvalError {}

/// No case pattern matched the switch value.
pub fn no_case_matched(span: Span) -> EvalError {
    EvalError {
        kind: EvalErrorKind::NoCaseMatched,
        message: "no case pattern matches value".to_string(),
        span,
    }
}

/// A matched dependency resolved to a failure.
pub fn dependency_failed(span: Span, node: u64, reason: impl fmt::Display) -> EvalError {
    EvalError {
        kind: EvalErrorKind::DependencyFailed { node },
        message: format!("dependency node {node} failed: {reason}"),
        span,
    }
}
