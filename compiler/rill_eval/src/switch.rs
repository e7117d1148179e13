//! Switch evaluation with suspension on pending dataflow nodes.
//!
//! A case pattern is matched through its identifier paths (see
//! `Pat::matchers`): each path is walked from the scrutinee root one
//! structural step at a time, narrowing the current value, and the value
//! at the end of the path is bound. This decomposition is what makes
//! suspension cheap to express — the resume point is just "matcher `i`,
//! segment `j`, this value" rather than a stack of nested closures.

use std::sync::Arc;

use rill_ir::{CaseClause, ExprId, Matcher, PathSeg, Span};
use rill_patterns::{no_case_matched, EvalResult, Pending, Value};

use crate::Env;

/// Outcome of matching one case against the scrutinee.
#[derive(Debug)]
pub enum MatchOutcome {
    /// The pattern matched; bindings live in the returned environment.
    Matched(Env),
    /// The pattern does not match. Internal control flow, never an error.
    NotMatched,
    /// Matching needed to look inside an unresolved dataflow node. The
    /// carried value is the node standing for the suspended match's
    /// eventual result.
    Suspended(Value),
}

/// The seam to the enclosing expression evaluator.
///
/// The switch subsystem never looks inside a case's result expression;
/// once a case wins, the expression id and the bound environment cross
/// this trait. `Send + Sync` because a suspension carries the evaluator
/// into a continuation that may run on another scheduler thread.
pub trait ExprEval: Send + Sync {
    /// Evaluate the result expression `expr` in `env`.
    fn eval_expr(&self, expr: ExprId, env: &Env) -> EvalResult;
}

/// Per-switch evaluation context.
///
/// Cheap to clone (every heavy field is shared), because each suspension
/// captures a clone inside the continuation it registers on the graph.
#[derive(Clone)]
pub struct SwitchEval {
    scrutinee: Value,
    span: Span,
    cases: Arc<[CaseClause]>,
    env: Env,
    exprs: Arc<dyn ExprEval>,
}

impl SwitchEval {
    pub fn new(
        scrutinee: Value,
        span: Span,
        cases: Arc<[CaseClause]>,
        env: Env,
        exprs: Arc<dyn ExprEval>,
    ) -> SwitchEval {
        SwitchEval {
            scrutinee,
            span,
            cases,
            env,
            exprs,
        }
    }

    /// Evaluate the switch expression: the value of the first case whose
    /// pattern matches the scrutinee.
    ///
    /// Returns `Ok` with a `Value::Pending` when the winning case could
    /// not be decided yet. Exhausting the case list is a runtime error
    /// even though the static checker should have rejected such a list.
    #[tracing::instrument(level = "debug", skip_all, fields(span = %self.span, cases = self.cases.len()))]
    pub fn eval_cases(&self) -> EvalResult {
        self.eval_from(0)
    }

    fn eval_from(&self, start: usize) -> EvalResult {
        for idx in start..self.cases.len() {
            match self.try_case(idx) {
                MatchOutcome::NotMatched => {}
                MatchOutcome::Matched(env) => {
                    tracing::debug!(case = idx, depth = env.depth(), "case matched");
                    return self.exprs.eval_expr(self.cases[idx].expr, &env);
                }
                MatchOutcome::Suspended(node) => return Ok(node),
            }
        }
        Err(no_case_matched(self.span))
    }

    fn try_case(&self, idx: usize) -> MatchOutcome {
        let walk = Walk {
            sw: self.clone(),
            case: idx,
            matchers: self.cases[idx].pat.matchers().into(),
        };
        walk.advance(0, 0, self.scrutinee.clone(), self.env.push())
    }
}

/// The matcher walk of one case attempt, shaped for re-entry: a
/// continuation resumes by calling [`Walk::advance`] with the resolved
/// value spliced in at the exact matcher/segment it stopped at.
#[derive(Clone)]
struct Walk {
    sw: SwitchEval,
    case: usize,
    matchers: Arc<[Matcher]>,
}

impl Walk {
    /// Continue from matcher `mi`, whose path is already advanced to
    /// segment `si` with the scrutinee narrowed to `value`.
    fn advance(&self, mi: usize, si: usize, value: Value, mut env: Env) -> MatchOutcome {
        let mut mi = mi;
        let mut si = si;
        let mut value = value;
        loop {
            let Some(matcher) = self.matchers.get(mi) else {
                return MatchOutcome::Matched(env);
            };
            let segs = matcher.path.segs();
            if si == segs.len() {
                // Path exhausted: bind whatever is here, pending or not.
                // A handle bound without inspection never suspends.
                if let Some(ident) = matcher.ident {
                    env.bind(ident, value);
                }
                mi += 1;
                si = 0;
                value = self.sw.scrutinee.clone();
                continue;
            }
            if let Value::Pending(node) = &value {
                return MatchOutcome::Suspended(self.suspend(node, mi, si, env));
            }
            match step(&segs[si], &value) {
                Step::Mismatch => return MatchOutcome::NotMatched,
                Step::Into(next) => {
                    value = next;
                    si += 1;
                }
            }
        }
    }

    /// Register the rest of this walk on `node` and return the value
    /// standing for its eventual result.
    ///
    /// When the continuation runs, a match completes the case as usual, a
    /// mismatch falls through to the case after this one with the outer
    /// environment, and a further suspension chains transparently.
    fn suspend(&self, node: &Pending, mi: usize, si: usize, env: Env) -> Value {
        tracing::debug!(
            node = node.node_id(),
            case = self.case,
            "match suspended on pending node"
        );
        let walk = self.clone();
        node.resume_with(Box::new(move |resolved| {
            match walk.advance(mi, si, resolved, env) {
                MatchOutcome::Matched(env) => {
                    let case = &walk.sw.cases[walk.case];
                    walk.sw.exprs.eval_expr(case.expr, &env)
                }
                MatchOutcome::NotMatched => walk.sw.eval_from(walk.case + 1),
                MatchOutcome::Suspended(next) => Ok(next),
            }
        }))
    }
}

enum Step {
    Into(Value),
    Mismatch,
}

/// One structural step of a path over a concrete value.
///
/// Shape mismatches between segment and value are type errors upstream,
/// not match failures, hence the panics.
fn step(seg: &PathSeg, value: &Value) -> Step {
    match (seg, value) {
        (PathSeg::TupleIndex(i), Value::Tuple(fields)) => match fields.get(*i as usize) {
            Some(v) => Step::Into(v.clone()),
            None => panic!("tuple index {i} out of range: should not have type-checked"),
        },
        (PathSeg::ListLen { len, exact }, Value::List(elems)) => {
            let len = *len as usize;
            let ok = if *exact {
                elems.len() == len
            } else {
                elems.len() >= len
            };
            if ok {
                Step::Into(value.clone())
            } else {
                Step::Mismatch
            }
        }
        (PathSeg::ListIndex(i), Value::List(elems)) => match elems.get(*i as usize) {
            Some(v) => Step::Into(v.clone()),
            // Paths always emit a ListLen check ahead of any index.
            None => panic!("list index {i} past checked length"),
        },
        (PathSeg::ListSuffix(n), Value::List(elems)) => {
            Step::Into(Value::list(elems[*n as usize..].to_vec()))
        }
        (PathSeg::Field(name), Value::Struct(fields)) => match fields.get(name) {
            Some(v) => Step::Into(v.clone()),
            None => panic!("missing struct field: should not have type-checked"),
        },
        (PathSeg::Variant { tag, payload }, Value::Variant(v)) => {
            if v.tag != *tag {
                return Step::Mismatch;
            }
            if *payload {
                match &v.payload {
                    Some(p) => Step::Into(p.clone()),
                    None => panic!("payload pattern on bare tag: should not have type-checked"),
                }
            } else {
                Step::Into(value.clone())
            }
        }
        _ => panic!(
            "path segment {seg:?} over {} value: should not have type-checked",
            value.kind_name()
        ),
    }
}
