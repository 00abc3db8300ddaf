use crate::{model::EntityModel, value::Value};
use std::collections::{BTreeSet, HashSet};

// ============================================================================
// ENTITY KINDS
// ============================================================================
//
// These traits describe *what an entity looks like* to the resolver and to
// cascade paths. Implementations are normally generated by
// `#[derive(Accessors)]`.
//

///
/// EntityKind
///
/// A type whose accessors can be resolved to field names.
/// `MODEL` is the authoritative field list consulted by the resolver.
///

pub trait EntityKind: 'static {
    const MODEL: &'static EntityModel;
}

///
/// Traverse
///
/// Maps the value type of an accessor to the entity a cascade path steps
/// into next. Implemented for entities themselves and for the optional and
/// collection wrappers that hold them; scalar leaves have no implementation,
/// so a cascade cannot continue past them.
///

pub trait Traverse {
    type Target: EntityKind;
}

impl<T: Traverse> Traverse for Option<T> {
    type Target = T::Target;
}

impl<T: Traverse> Traverse for Box<T> {
    type Target = T::Target;
}

impl<T: Traverse> Traverse for Vec<T> {
    type Target = T::Target;
}

impl<T: Traverse> Traverse for BTreeSet<T> {
    type Target = T::Target;
}

impl<T: Traverse, S> Traverse for HashSet<T, S> {
    type Target = T::Target;
}

// ============================================================================
// OPERANDS
// ============================================================================

///
/// FieldValue
///
/// Conversion of a Rust value into a predicate operand.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    bool => Bool,
);
