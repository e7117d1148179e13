//! The capability boundary to the external dataflow graph.

use std::fmt;
use std::sync::Arc;

use crate::{EvalResult, Value};

/// The rest of a suspended match, to run once a dependency resolves.
///
/// The continuation receives the resolved concrete value and either
/// finishes the match (producing the switch expression's value, which may
/// itself be pending) or fails.
pub type ResumeFn = Box<dyn FnOnce(Value) -> EvalResult + Send>;

/// A node in the external dataflow graph whose value is not yet known.
///
/// This trait is everything the evaluator needs from the graph:
///
/// - [`PendingValue::resume_with`] registers a continuation to run with
///   the resolved value once it is available and returns a new value
///   standing for the continuation's result, so the outer graph can keep
///   driving it. Implementations must capture an `Err` returned by the
///   continuation as a *failed* node rather than unwinding — evaluation
///   errors travel the graph's uniform error channel. A node that has
///   already resolved must still accept registrations and run them
///   promptly with the memoized value; a match may walk through the same
///   node on several paths and registers once per path.
/// - [`PendingValue::node_id`] is a stable identity used for logging and
///   for value equality (two handles to one node are the same value).
///
/// Cancellation needs no representation here: a cancelled computation
/// simply never invokes the registered continuation.
pub trait PendingValue: fmt::Debug + Send + Sync {
    /// Register `k` to run with the resolved value; returns the node
    /// standing for `k`'s eventual result.
    fn resume_with(&self, k: ResumeFn) -> Value;

    /// Stable identity of the graph node.
    fn node_id(&self) -> u64;
}

/// Shared handle to a pending dataflow node.
pub type Pending = Arc<dyn PendingValue>;
