//! Module: accessor
//! Responsibility: typed getter/setter references and their resolution to field names.
//! Does not own: path joining or predicate construction.
//! Boundary: `AccessorIntrospect` is the only coupling to how accessors are represented.

mod name;
mod resolver;

#[cfg(test)]
mod tests;

use crate::{
    model::{EntityModel, FieldCardinality},
    traits::EntityKind,
};
use std::fmt;

// re-exports
pub use name::{GETTER_PREFIX, IS_PREFIX, SETTER_PREFIX, derive_field_name};
pub use resolver::FieldResolver;

/// Method name recorded for inline accessors.
pub const INLINE_METHOD: &str = "{{closure}}";

///
/// AccessorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessorKind {
    Getter,
    Setter,
    /// Anonymous closure; carries no field name and never resolves.
    Inline,
}

///
/// AccessorId
///
/// Identity of one accessor instance: the address of its `'static` value.
/// Two statics naming the same method have different ids.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AccessorId(usize);

impl AccessorId {
    #[must_use]
    pub fn of<A: ?Sized>(accessor: &'static A) -> Self {
        Self(std::ptr::from_ref(accessor).addr())
    }
}

///
/// AccessorIntrospect
///
/// Host-provided introspection: given an accessor, report the implementing
/// method name and the entity that declares it. The resolver only consumes
/// this capability.
///

pub trait AccessorIntrospect: Sync {
    fn identity(&'static self) -> AccessorId;

    fn impl_method_name(&self) -> &'static str;

    fn declaring_entity(&self) -> &'static EntityModel;

    fn kind(&self) -> AccessorKind;
}

///
/// Accessor
///
/// A getter (`fn(&T) -> &R`) or setter (`fn(&mut T, R)`) bound to the name
/// of the method it wraps. Always used through a `&'static` reference;
/// `#[derive(Accessors)]` emits one static per field and accessor kind.
///

pub struct Accessor<T, R> {
    method: &'static str,
    kind: AccessorKind,
    read: Option<fn(&T) -> &R>,
    write: Option<fn(&mut T, R)>,
}

impl<T, R> Accessor<T, R> {
    /// Getter reference named after its method (`get_name`, `is_active`).
    #[must_use]
    pub const fn getter(method: &'static str, read: fn(&T) -> &R) -> Self {
        Self {
            method,
            kind: AccessorKind::Getter,
            read: Some(read),
            write: None,
        }
    }

    /// Setter reference named after its method (`set_name`).
    #[must_use]
    pub const fn setter(method: &'static str, write: fn(&mut T, R)) -> Self {
        Self {
            method,
            kind: AccessorKind::Setter,
            read: None,
            write: Some(write),
        }
    }

    /// Inline read closure. Usable as a function but never resolvable.
    #[must_use]
    pub const fn inline(read: fn(&T) -> &R) -> Self {
        Self {
            method: INLINE_METHOD,
            kind: AccessorKind::Inline,
            read: Some(read),
            write: None,
        }
    }

    #[must_use]
    pub const fn method(&self) -> &'static str {
        self.method
    }

    #[must_use]
    pub const fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// Read through the accessor; `None` for setters.
    pub fn get<'a>(&self, target: &'a T) -> Option<&'a R> {
        self.read.map(|read| read(target))
    }

    /// Write through the accessor; returns `false` for getters.
    pub fn set(&self, target: &mut T, value: R) -> bool {
        match self.write {
            Some(write) => {
                write(target, value);
                true
            }
            None => false,
        }
    }
}

impl<T, R> fmt::Debug for Accessor<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("method", &self.method)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T: EntityKind, R: 'static> AccessorIntrospect for Accessor<T, R> {
    fn identity(&'static self) -> AccessorId {
        AccessorId::of(self)
    }

    fn impl_method_name(&self) -> &'static str {
        self.method
    }

    fn declaring_entity(&self) -> &'static EntityModel {
        T::MODEL
    }

    fn kind(&self) -> AccessorKind {
        self.kind
    }
}

///
/// FieldDescriptor
///
/// Resolved field plus the entity that declares it.
/// Cheap to copy; produced once per accessor identity.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    pub entity_path: &'static str,
    pub entity_name: &'static str,
    pub name: &'static str,
    pub cardinality: FieldCardinality,
    /// Method the descriptor was resolved from.
    pub method: &'static str,
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity_name, self.name)
    }
}
