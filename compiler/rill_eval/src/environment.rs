//! Lexical environments for case-arm evaluation.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use rill_ir::Name;
use rill_patterns::Value;

/// A persistent lexical environment.
///
/// Each case attempt evaluates against a child environment layered over
/// the enclosing one; pattern bindings land in the child and vanish with
/// it when the case is abandoned. Parents are immutable once pushed on
/// (`Arc` chain), and the innermost frame is exclusively owned by the
/// attempt writing to it, so an environment can be cloned into a
/// suspension continuation and resumed on another scheduler thread.
#[derive(Clone, Debug, Default)]
pub struct Env {
    parent: Option<Arc<Env>>,
    bindings: FxHashMap<Name, Value>,
}

impl Env {
    /// An empty root environment.
    pub fn new() -> Env {
        Env::default()
    }

    /// A fresh child environment layered over `self`.
    pub fn push(&self) -> Env {
        Env {
            parent: Some(Arc::new(self.clone())),
            bindings: FxHashMap::default(),
        }
    }

    /// Bind `name` in the innermost frame, shadowing any outer binding.
    pub fn bind(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look `name` up, innermost frame first.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        if let Some(v) = self.bindings.get(&name) {
            return Some(v);
        }
        self.parent.as_deref()?.lookup(name)
    }

    /// Number of frames in the chain.
    pub fn depth(&self) -> usize {
        1 + self.parent.as_deref().map_or(0, Env::depth)
    }
}
