use crate::{
    accessor::FieldResolver,
    config::Config,
    error::CriteriaError,
    expr::{Order, OrderDirection, Sort},
    path::{FieldPath, TypedPath},
    traits::EntityKind,
};
use std::{fmt, marker::PhantomData};

///
/// SortBuilder
///
/// Ordered sort keys over entity `E`. Insertion order is the sort
/// priority; repeated paths are kept as given.
///

pub struct SortBuilder<E> {
    orders: Vec<Order>,
    config: Config,
    _marker: PhantomData<fn() -> E>,
}

impl<E> SortBuilder<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Builder using `config`, which is validated first.
    pub fn with_config(config: Config) -> Result<Self, CriteriaError> {
        config.validate()?;

        Ok(Self::from_config(config))
    }

    const fn from_config(config: Config) -> Self {
        Self {
            orders: Vec::new(),
            config,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn lambda(self, resolver: &FieldResolver) -> LambdaSortBuilder<'_, E>
    where
        E: EntityKind,
    {
        LambdaSortBuilder {
            inner: self,
            resolver,
        }
    }

    #[must_use]
    pub fn asc(self, path: &str) -> Self {
        self.asc_if(true, path)
    }

    #[must_use]
    pub fn asc_if(self, cond: bool, path: &str) -> Self {
        self.push_if(cond, path, OrderDirection::Asc)
    }

    #[must_use]
    pub fn desc(self, path: &str) -> Self {
        self.desc_if(true, path)
    }

    #[must_use]
    pub fn desc_if(self, cond: bool, path: &str) -> Self {
        self.push_if(cond, path, OrderDirection::Desc)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[must_use]
    pub fn build(&self) -> Sort {
        Sort {
            orders: self.orders.clone(),
        }
    }

    fn push_if(self, cond: bool, path: &str, direction: OrderDirection) -> Self {
        if !cond {
            return self;
        }
        let path = FieldPath::parse(path, &self.config.path_delimiter);

        self.push_path(path, direction)
    }

    fn push_path(mut self, path: FieldPath, direction: OrderDirection) -> Self {
        self.orders.push(Order { path, direction });
        self
    }
}

impl<E> Default for SortBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SortBuilder<E> {
    fn clone(&self) -> Self {
        Self {
            orders: self.orders.clone(),
            config: self.config.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E> fmt::Debug for SortBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortBuilder")
            .field("orders", &self.orders)
            .field("config", &self.config)
            .finish()
    }
}

///
/// LambdaSortBuilder
/// Accessor-keyed view over a `SortBuilder<E>`; owns its base.
///

pub struct LambdaSortBuilder<'r, E> {
    inner: SortBuilder<E>,
    resolver: &'r FieldResolver,
}

impl<E: EntityKind> LambdaSortBuilder<'_, E> {
    pub fn asc(self, path: impl TypedPath<E>) -> Result<Self, CriteriaError> {
        self.asc_if(true, path)
    }

    pub fn asc_if(self, cond: bool, path: impl TypedPath<E>) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, OrderDirection::Asc)
    }

    pub fn desc(self, path: impl TypedPath<E>) -> Result<Self, CriteriaError> {
        self.desc_if(true, path)
    }

    pub fn desc_if(self, cond: bool, path: impl TypedPath<E>) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, OrderDirection::Desc)
    }

    #[must_use]
    pub fn into_inner(self) -> SortBuilder<E> {
        self.inner
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn build(&self) -> Sort {
        self.inner.build()
    }

    // path resolves regardless of the guard
    fn push_if(
        mut self,
        cond: bool,
        path: &impl TypedPath<E>,
        direction: OrderDirection,
    ) -> Result<Self, CriteriaError> {
        let path = path.resolve_path(self.resolver)?;
        if cond {
            self.inner = self.inner.push_path(path, direction);
        }

        Ok(self)
    }
}

impl<E> fmt::Debug for LambdaSortBuilder<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaSortBuilder")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
