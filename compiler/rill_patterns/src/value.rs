//! Runtime values for the switch evaluator.
//!
//! Values are structurally isomorphic to patterns (tuple, list, struct,
//! tagged variant) plus scalars and one extra state: [`Value::Pending`],
//! a reference to a dataflow node that has not resolved yet. A value is
//! otherwise always fully structural once realized.
//!
//! # Arc Enforcement
//!
//! All heap allocations go through `Value::` factory methods; the
//! [`Heap<T>`] wrapper has a private constructor, so external code cannot
//! build heap values directly. Every heap type is `Arc`-backed, making
//! clones cheap and values safely shareable across the threads the
//! external scheduler may resume a match on.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use rill_ir::Name;

use crate::{Pending, PendingValue};

/// Shared immutable heap storage.
///
/// `#[repr(transparent)]` keeps the wrapper layout-identical to
/// `Arc<T>`; the private field keeps allocation behind the `Value`
/// factories.
#[derive(Debug)]
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate. Only `Value` factories may call this.
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> std::ops::Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

/// A tagged-union value.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantValue {
    pub tag: Name,
    /// Present iff the tag carries a payload (well-typed values agree
    /// with their type's tag map).
    pub payload: Option<Value>,
}

/// Runtime value in the switch evaluator.
#[derive(Clone)]
pub enum Value {
    // Scalars (inline, no heap allocation)
    Int(i64),
    Float(f64),
    Bool(bool),

    // Heap types (enforced Arc via Heap<T>)
    Str(Heap<String>),
    Tuple(Heap<Vec<Value>>),
    List(Heap<Vec<Value>>),
    Struct(Heap<FxHashMap<Name, Value>>),
    Variant(Heap<VariantValue>),

    /// A reference to an unresolved node of the external dataflow graph.
    Pending(Pending),
}

impl Value {
    /// Allocate a string value.
    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(Heap::new(s.into()))
    }

    /// Allocate a tuple value.
    pub fn tuple(fields: Vec<Value>) -> Value {
        Value::Tuple(Heap::new(fields))
    }

    /// Allocate a list value.
    pub fn list(elems: Vec<Value>) -> Value {
        Value::List(Heap::new(elems))
    }

    /// Allocate a struct value from field/value pairs.
    pub fn struct_(fields: impl IntoIterator<Item = (Name, Value)>) -> Value {
        Value::Struct(Heap::new(fields.into_iter().collect()))
    }

    /// Allocate a variant value.
    pub fn variant(tag: Name, payload: Option<Value>) -> Value {
        Value::Variant(Heap::new(VariantValue { tag, payload }))
    }

    /// Wrap a handle to an unresolved dataflow node.
    pub fn pending(node: Arc<dyn PendingValue>) -> Value {
        Value::Pending(node)
    }

    /// The value's kind, for panic and log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Struct(_) => "struct",
            Value::Variant(_) => "variant",
            Value::Pending(_) => "pending",
        }
    }

    /// Whether this value is an unresolved dataflow node.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Value::Pending(_))
    }
}

impl PartialEq for Value {
    /// Structural equality. Pending nodes compare by graph-node identity:
    /// two handles to the same node are equal, and a pending node never
    /// equals a realized value.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) | (Value::List(a), Value::List(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,
            (Value::Variant(a), Value::Variant(b)) => a == b,
            (Value::Pending(a), Value::Pending(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::Tuple(fields) => {
                let mut t = f.debug_tuple("");
                for v in fields.iter() {
                    t.field(v);
                }
                t.finish()
            }
            Value::List(elems) => f.debug_list().entries(elems.iter()).finish(),
            Value::Struct(fields) => {
                // Sort by interned-name index so output is deterministic.
                let mut entries: Vec<(&Name, &Value)> = fields.iter().collect();
                entries.sort_by_key(|(name, _)| name.raw());
                let mut m = f.debug_map();
                for (name, v) in entries {
                    m.entry(&name.raw(), v);
                }
                m.finish()
            }
            Value::Variant(v) => match &v.payload {
                Some(p) => write!(f, "#{}({p:?})", v.tag.raw()),
                None => write!(f, "#{}", v.tag.raw()),
            },
            Value::Pending(node) => write!(f, "<pending #{}>", node.node_id()),
        }
    }
}
