//! Rill Eval - runtime evaluation of switch expressions.
//!
//! Given a scrutinee value and an immutable case list, [`SwitchEval`]
//! finds the first case whose pattern matches, binds the pattern's
//! identifiers into a child [`Env`], and hands the case's result
//! expression to the enclosing evaluator through the [`ExprEval`] seam.
//!
//! The scrutinee may contain handles to unresolved dataflow nodes
//! (`Value::Pending`). Matching proceeds as far as values are concrete;
//! the moment a pattern needs to look *inside* a pending value the match
//! suspends — the remaining work is packaged into a continuation,
//! registered on the node, and the switch expression's value becomes the
//! node standing for that continuation's result. A pattern that binds a
//! pending value without inspecting it does not suspend: the handle is
//! bound as-is.

mod environment;
mod switch;

pub use environment::Env;
pub use switch::{ExprEval, MatchOutcome, SwitchEval};
