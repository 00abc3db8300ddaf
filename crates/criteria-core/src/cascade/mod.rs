//! Module: cascade
//! Responsibility: typed chains of accessors through related entities.
//! Does not own: checking that consecutive segments are really related
//! beyond what the `Traverse` bound enforces.


use crate::{
    accessor::{Accessor, AccessorIntrospect, FieldDescriptor, FieldResolver},
    error::ResolveError,
    path::FieldPath,
    traits::{EntityKind, Traverse},
};
use std::{fmt, marker::PhantomData, sync::Arc};

///
/// CascadePath
///
/// Immutable path rooted at `T` whose last segment yields `U`.
///
/// Each value holds only its own accessor and a pointer to its parent, so
/// `with` never touches the receiver and paths can be shared freely between
/// builders. `with` accepts accessors declared on the entity `U` leads to
/// (through `Option`, `Box`, or a collection), which keeps chains
/// well-typed at compile time.
///

pub struct CascadePath<T, U> {
    node: Arc<CascadeNode>,
    _marker: PhantomData<fn(&T) -> U>,
}

struct CascadeNode {
    accessor: &'static dyn AccessorIntrospect,
    parent: Option<Arc<Self>>,
}

impl<T: EntityKind, U: 'static> CascadePath<T, U> {
    /// Start a path from one accessor on the root entity.
    #[must_use]
    pub fn of(accessor: &'static Accessor<T, U>) -> Self {
        Self {
            node: Arc::new(CascadeNode {
                accessor,
                parent: None,
            }),
            _marker: PhantomData,
        }
    }

    /// New path one segment longer; `self` is left untouched.
    #[must_use]
    pub fn with<V: 'static>(
        &self,
        child: &'static Accessor<<U as Traverse>::Target, V>,
    ) -> CascadePath<T, V>
    where
        U: Traverse,
    {
        CascadePath {
            node: Arc::new(CascadeNode {
                accessor: child,
                parent: Some(Arc::clone(&self.node)),
            }),
            _marker: PhantomData,
        }
    }
}

impl<T, U> CascadePath<T, U> {
    /// Accessors root-to-leaf.
    #[must_use]
    pub fn cascades(&self) -> Vec<&'static dyn AccessorIntrospect> {
        let mut chain = Vec::with_capacity(6);
        let mut current = Some(&self.node);

        while let Some(node) = current {
            chain.push(node.accessor);
            current = node.parent.as_ref();
        }
        chain.reverse();

        chain
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut len = 1;
        let mut parent = self.node.parent.as_ref();

        while let Some(node) = parent {
            len += 1;
            parent = node.parent.as_ref();
        }

        len
    }

    /// Descriptors root-to-leaf; fails on the first segment that does not resolve.
    pub fn field_descriptors(
        &self,
        resolver: &FieldResolver,
    ) -> Result<Vec<FieldDescriptor>, ResolveError> {
        resolver.resolve_all(&self.cascades())
    }

    /// Field names root-to-leaf.
    pub fn field_names(&self, resolver: &FieldResolver) -> Result<Vec<&'static str>, ResolveError> {
        self.cascades()
            .into_iter()
            .map(|accessor| resolver.resolve_name(accessor))
            .collect()
    }

    /// Field names joined with `delimiter`.
    pub fn field_name(
        &self,
        resolver: &FieldResolver,
        delimiter: &str,
    ) -> Result<String, ResolveError> {
        Ok(self.field_names(resolver)?.join(delimiter))
    }

    pub fn to_field_path(&self, resolver: &FieldResolver) -> Result<FieldPath, ResolveError> {
        let names = self.field_names(resolver)?;

        // a cascade always has at least its own segment
        Ok(FieldPath::from_segments(names).unwrap_or_else(|| FieldPath::leaf("")))
    }
}

impl<T, U> Clone for CascadePath<T, U> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            _marker: PhantomData,
        }
    }
}

impl<T, U> fmt::Debug for CascadePath<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: Vec<_> = self
            .cascades()
            .iter()
            .map(|accessor| accessor.impl_method_name())
            .collect();

        f.debug_struct("CascadePath")
            .field("methods", &methods)
            .finish()
    }
}
