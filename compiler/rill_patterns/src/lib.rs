//! Rill Patterns - runtime values and matching primitives.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap<T>`, `VariantValue`)
//! - The pending-value capability boundary (`PendingValue`, `ResumeFn`)
//! - Evaluation error types (`EvalError`, `EvalResult`) and their factories
//! - The direct synchronous matcher (`matches`)
//!
//! # Value Types
//!
//! The value module provides runtime values with enforced Arc usage:
//! - All heap allocations go through `Value::` factory methods
//! - The `Heap<T>` wrapper enforces this invariant
//! - Thread-safe reference counting via `Arc`
//!
//! # Pending Values
//!
//! A value may be a reference to a node of the external dataflow graph
//! whose concrete value is not yet known. The [`PendingValue`] trait is
//! the *entire* contract this subsystem has with that graph: register a
//! continuation, get back a node standing for its eventual result. The
//! scheduler's representation never leaks in here.

mod errors;
mod matcher;
mod pending;
mod value;

pub use errors::{dependency_failed, no_case_matched, EvalError, EvalErrorKind, EvalResult};
pub use matcher::matches;
pub use pending::{Pending, PendingValue, ResumeFn};
pub use value::{Heap, Value, VariantValue};
