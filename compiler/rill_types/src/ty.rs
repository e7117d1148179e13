//! Structural type descriptions.

use rill_ir::{Name, StringInterner};

/// A named, typed struct field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: Name,
    pub ty: Ty,
}

/// A variant of a tagged-union type.
///
/// `payload` is `None` iff the variant carries no value; pattern payload
/// presence must agree with this (enforced upstream).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantDef {
    pub tag: Name,
    pub payload: Option<Ty>,
}

/// The declared type of a scrutinee (or of one of its sub-values).
///
/// Variant declaration order is significant only for determinism: the set
/// algebra enumerates uncovered tags in this order so diagnostics and
/// complements are stable run to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ty {
    Int,
    Float,
    Str,
    Bool,
    Tuple(Vec<Ty>),
    List(Box<Ty>),
    Struct(Vec<Field>),
    Variant(Vec<VariantDef>),
}

impl Ty {
    /// Convenience constructor for list types.
    pub fn list(elem: Ty) -> Ty {
        Ty::List(Box::new(elem))
    }

    /// The type of tuple field `index`.
    ///
    /// # Panics
    /// Panics when `self` is not a tuple of sufficient arity; the pattern
    /// should not have type-checked.
    pub fn tuple_field(&self, index: usize) -> &Ty {
        match self {
            Ty::Tuple(fields) => match fields.get(index) {
                Some(t) => t,
                None => panic!("tuple field {index} out of range: should not have type-checked"),
            },
            _ => panic!("tuple access on non-tuple type: should not have type-checked"),
        }
    }

    /// The element type of a list.
    ///
    /// # Panics
    /// Panics when `self` is not a list type.
    pub fn elem(&self) -> &Ty {
        match self {
            Ty::List(elem) => elem,
            _ => panic!("element access on non-list type: should not have type-checked"),
        }
    }

    /// The type of struct field `name`.
    ///
    /// # Panics
    /// Panics when `self` is not a struct or lacks the field.
    pub fn field(&self, name: Name) -> &Ty {
        match self {
            Ty::Struct(fields) => match fields.iter().find(|f| f.name == name) {
                Some(f) => &f.ty,
                None => panic!("unknown struct field: should not have type-checked"),
            },
            _ => panic!("field access on non-struct type: should not have type-checked"),
        }
    }

    /// The struct fields, in declaration order.
    ///
    /// # Panics
    /// Panics when `self` is not a struct type.
    pub fn struct_fields(&self) -> &[Field] {
        match self {
            Ty::Struct(fields) => fields,
            _ => panic!("struct access on non-struct type: should not have type-checked"),
        }
    }

    /// The variant definitions, in declaration order.
    ///
    /// # Panics
    /// Panics when `self` is not a variant type.
    pub fn variants(&self) -> &[VariantDef] {
        match self {
            Ty::Variant(defs) => defs,
            _ => panic!("variant access on non-variant type: should not have type-checked"),
        }
    }

    /// The payload type of variant `tag`, or `None` for payload-less tags.
    ///
    /// # Panics
    /// Panics when `self` is not a variant type or lacks the tag.
    pub fn variant_payload(&self, tag: Name) -> Option<&Ty> {
        match self.variants().iter().find(|v| v.tag == tag) {
            Some(def) => def.payload.as_ref(),
            None => panic!("unknown variant tag: should not have type-checked"),
        }
    }

    /// Render the type for diagnostics and logs.
    pub fn render(&self, interner: &StringInterner) -> String {
        match self {
            Ty::Int => "int".to_string(),
            Ty::Float => "float".to_string(),
            Ty::Str => "string".to_string(),
            Ty::Bool => "bool".to_string(),
            Ty::Tuple(fields) => {
                let parts: Vec<String> = fields.iter().map(|t| t.render(interner)).collect();
                format!("({})", parts.join(", "))
            }
            Ty::List(elem) => format!("[{}]", elem.render(interner)),
            Ty::Struct(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{} {}", interner.lookup(f.name), f.ty.render(interner)))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
            Ty::Variant(defs) => {
                let parts: Vec<String> = defs
                    .iter()
                    .map(|v| match &v.payload {
                        Some(t) => format!("#{}({})", interner.lookup(v.tag), t.render(interner)),
                        None => format!("#{}", interner.lookup(v.tag)),
                    })
                    .collect();
                parts.join(" | ")
            }
        }
    }
}
