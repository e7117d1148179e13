//! Diagnostic system for static switch analysis.
//!
//! Design principles carried from the wider Rill toolchain:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels (why it's wrong)
//!
//! Static analysis collects diagnostics exhaustively per switch
//! expression — it never stops at the first problem — so the central
//! type here besides [`Diagnostic`] is the ordered [`DiagnosticBatch`].

mod batch;
mod diagnostic;
mod error_code;

pub use batch::DiagnosticBatch;
pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
