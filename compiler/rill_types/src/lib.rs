//! Rill Types - the scrutinee type model consumed by the switch subsystem.
//!
//! The enclosing type checker hands this subsystem a finalized [`Ty`]
//! describing the shape of the value being switched on. The pattern set
//! algebra needs it to form complements — "every other value of this
//! type" is only meaningful relative to a concrete type. The runtime
//! evaluator never consumes a `Ty`: values carry their own shape.
//!
//! The type is assumed internally consistent; nothing here re-validates
//! it. Accessors that are handed a type/shape combination the upstream
//! checker should have rejected panic rather than return errors.

mod ty;

pub use ty::{Field, Ty, VariantDef};
