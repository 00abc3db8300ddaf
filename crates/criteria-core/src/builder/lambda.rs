use crate::{
    accessor::FieldResolver,
    builder::{
        PredicateBuilder,
        predicate::{to_patterns, to_values},
    },
    error::CriteriaError,
    expr::{ExprBuilder, Filter},
    path::{FieldPath, TypedPath},
    predicate::{Clause, Composite, PredicateNode},
    traits::{EntityKind, FieldValue},
};
use std::fmt;

///
/// LambdaPredicateBuilder
///
/// Accessor-keyed view over a `PredicateBuilder<E>`.
///
/// Paths are accessors declared on `E` or cascades rooted at `E`, so a
/// path into the wrong entity does not compile. The view owns its base
/// builder; nothing else can append to it.
///
/// Paths are resolved even when the guard is false, so a broken accessor
/// fails on every call rather than only when its condition happens to
/// hold. Operands are still only evaluated behind a true guard.
///

pub struct LambdaPredicateBuilder<'r, E> {
    inner: PredicateBuilder<E>,
    resolver: &'r FieldResolver,
}

impl<'r, E: EntityKind> LambdaPredicateBuilder<'r, E> {
    #[must_use]
    pub const fn new(inner: PredicateBuilder<E>, resolver: &'r FieldResolver) -> Self {
        Self { inner, resolver }
    }

    /// Give back the base builder with everything added through the view.
    #[must_use]
    pub fn into_inner(self) -> PredicateBuilder<E> {
        self.inner
    }

    #[must_use]
    pub fn into_composite(self) -> Composite {
        self.inner.into_composite()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn build(&self) -> Option<Filter> {
        self.inner.build()
    }

    pub fn build_with<B: ExprBuilder>(&self, builder: &mut B) -> Option<B::Expr> {
        self.inner.build_with(builder)
    }

    // ------------------------------------------------------------------
    // Nested clauses
    // ------------------------------------------------------------------

    #[must_use]
    pub fn predicate(self, clause: impl Into<Clause>) -> Self {
        self.predicate_if(true, clause)
    }

    #[must_use]
    pub fn predicate_if(mut self, cond: bool, clause: impl Into<Clause>) -> Self {
        self.inner = self.inner.predicate_if(cond, clause);
        self
    }

    #[must_use]
    pub fn predicate_with<C: Into<Clause>>(mut self, cond: bool, clause: impl FnOnce() -> C) -> Self {
        self.inner = self.inner.predicate_with(cond, clause);
        self
    }

    // ------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------

    pub fn eq(self, path: impl TypedPath<E>, value: impl FieldValue) -> Result<Self, CriteriaError> {
        self.eq_if(true, path, value)
    }

    pub fn eq_if(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FieldValue,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::equal(path, vec![value.to_value()])
        })
    }

    pub fn eq_with<V: FieldValue>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FnOnce() -> V,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::equal(path, vec![value().to_value()])
        })
    }

    pub fn eq_any<I, V>(self, path: impl TypedPath<E>, values: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.eq_any_if(true, path, values)
    }

    pub fn eq_any_if<I, V>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        values: I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, &path, |path| PredicateNode::equal(path, to_values(values)))
    }

    pub fn eq_any_with<I, V>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        values: impl FnOnce() -> I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, &path, |path| {
            PredicateNode::equal(path, to_values(values()))
        })
    }

    pub fn ne(self, path: impl TypedPath<E>, value: impl FieldValue) -> Result<Self, CriteriaError> {
        self.ne_if(true, path, value)
    }

    pub fn ne_if(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FieldValue,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::not_equal(path, vec![value.to_value()])
        })
    }

    pub fn ne_with<V: FieldValue>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FnOnce() -> V,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::not_equal(path, vec![value().to_value()])
        })
    }

    pub fn ne_any<I, V>(self, path: impl TypedPath<E>, values: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.ne_any_if(true, path, values)
    }

    pub fn ne_any_if<I, V>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        values: I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, &path, |path| {
            PredicateNode::not_equal(path, to_values(values))
        })
    }

    pub fn ne_any_with<I, V>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        values: impl FnOnce() -> I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, &path, |path| {
            PredicateNode::not_equal(path, to_values(values()))
        })
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    pub fn gt(self, path: impl TypedPath<E>, value: impl FieldValue) -> Result<Self, CriteriaError> {
        self.gt_if(true, path, value)
    }

    pub fn gt_if(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FieldValue,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::greater_than(path, value.to_value())
        })
    }

    pub fn gt_with<V: FieldValue>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FnOnce() -> V,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::greater_than(path, value().to_value())
        })
    }

    pub fn gte(self, path: impl TypedPath<E>, value: impl FieldValue) -> Result<Self, CriteriaError> {
        self.gte_if(true, path, value)
    }

    pub fn gte_if(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FieldValue,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::greater_or_equal(path, value.to_value())
        })
    }

    pub fn gte_with<V: FieldValue>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FnOnce() -> V,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::greater_or_equal(path, value().to_value())
        })
    }

    pub fn lt(self, path: impl TypedPath<E>, value: impl FieldValue) -> Result<Self, CriteriaError> {
        self.lt_if(true, path, value)
    }

    pub fn lt_if(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FieldValue,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::less_than(path, value.to_value())
        })
    }

    pub fn lt_with<V: FieldValue>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FnOnce() -> V,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::less_than(path, value().to_value())
        })
    }

    pub fn lte(self, path: impl TypedPath<E>, value: impl FieldValue) -> Result<Self, CriteriaError> {
        self.lte_if(true, path, value)
    }

    pub fn lte_if(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FieldValue,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::less_or_equal(path, value.to_value())
        })
    }

    pub fn lte_with<V: FieldValue>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        value: impl FnOnce() -> V,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::less_or_equal(path, value().to_value())
        })
    }

    pub fn between(
        self,
        path: impl TypedPath<E>,
        lower: impl FieldValue,
        upper: impl FieldValue,
    ) -> Result<Self, CriteriaError> {
        self.between_if(true, path, lower, upper)
    }

    pub fn between_if(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        lower: impl FieldValue,
        upper: impl FieldValue,
    ) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, |path| {
            PredicateNode::between(path, lower.to_value(), upper.to_value())
        })
    }

    pub fn between_with<L, U>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        bounds: impl FnOnce() -> (L, U),
    ) -> Result<Self, CriteriaError>
    where
        L: FieldValue,
        U: FieldValue,
    {
        self.push_if(cond, &path, |path| {
            let (lower, upper) = bounds();
            PredicateNode::between(path, lower.to_value(), upper.to_value())
        })
    }

    // ------------------------------------------------------------------
    // Patterns
    // ------------------------------------------------------------------

    pub fn like<I>(self, path: impl TypedPath<E>, patterns: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.like_if(true, path, patterns)
    }

    pub fn like_if<I>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        patterns: I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.try_push_if(cond, &path, |path| {
            PredicateNode::like(path, to_patterns(patterns))
        })
    }

    pub fn like_with<I>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        patterns: impl FnOnce() -> I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.try_push_if(cond, &path, |path| {
            PredicateNode::like(path, to_patterns(patterns()))
        })
    }

    pub fn not_like<I>(self, path: impl TypedPath<E>, patterns: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.not_like_if(true, path, patterns)
    }

    pub fn not_like_if<I>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        patterns: I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.try_push_if(cond, &path, |path| {
            PredicateNode::not_like(path, to_patterns(patterns))
        })
    }

    pub fn not_like_with<I>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        patterns: impl FnOnce() -> I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.try_push_if(cond, &path, |path| {
            PredicateNode::not_like(path, to_patterns(patterns()))
        })
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    pub fn in_list<I, V>(self, path: impl TypedPath<E>, values: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.in_list_if(true, path, values)
    }

    pub fn in_list_if<I, V>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        values: I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, &path, |path| {
            PredicateNode::in_list(path, to_values(values))
        })
    }

    pub fn in_list_with<I, V>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        values: impl FnOnce() -> I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, &path, |path| {
            PredicateNode::in_list(path, to_values(values()))
        })
    }

    pub fn not_in<I, V>(self, path: impl TypedPath<E>, values: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.not_in_if(true, path, values)
    }

    pub fn not_in_if<I, V>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        values: I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, &path, |path| {
            PredicateNode::not_in(path, to_values(values))
        })
    }

    pub fn not_in_with<I, V>(
        self,
        cond: bool,
        path: impl TypedPath<E>,
        values: impl FnOnce() -> I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, &path, |path| {
            PredicateNode::not_in(path, to_values(values()))
        })
    }

    // ------------------------------------------------------------------
    // Null checks
    // ------------------------------------------------------------------

    pub fn is_null(self, path: impl TypedPath<E>) -> Result<Self, CriteriaError> {
        self.is_null_if(true, path)
    }

    pub fn is_null_if(self, cond: bool, path: impl TypedPath<E>) -> Result<Self, CriteriaError> {
        self.push_if(cond, &path, PredicateNode::is_null)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn push_if(
        mut self,
        cond: bool,
        path: &impl TypedPath<E>,
        node: impl FnOnce(FieldPath) -> PredicateNode,
    ) -> Result<Self, CriteriaError> {
        let path = path.resolve_path(self.resolver)?;
        self.inner = self.inner.push_path_if(cond, path, node);

        Ok(self)
    }

    fn try_push_if(
        mut self,
        cond: bool,
        path: &impl TypedPath<E>,
        node: impl FnOnce(FieldPath) -> Result<PredicateNode, CriteriaError>,
    ) -> Result<Self, CriteriaError> {
        let path = path.resolve_path(self.resolver)?;
        self.inner = self.inner.try_push_path_if(cond, path, node)?;

        Ok(self)
    }
}

impl<E> fmt::Debug for LambdaPredicateBuilder<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaPredicateBuilder")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<E: EntityKind> From<LambdaPredicateBuilder<'_, E>> for Clause {
    fn from(builder: LambdaPredicateBuilder<'_, E>) -> Self {
        Self::Group(builder.into_composite())
    }
}
