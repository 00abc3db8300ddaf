use crate::{
    accessor::FieldResolver,
    builder::LambdaPredicateBuilder,
    config::Config,
    error::CriteriaError,
    expr::{BooleanOp, ExprBuilder, Filter, FilterBuilder},
    path::FieldPath,
    predicate::{Clause, Composite, PredicateNode},
    traits::{EntityKind, FieldValue},
    value::Value,
};
use std::{fmt, marker::PhantomData};
use tracing::trace;

///
/// PredicateBuilder
///
/// Fluent AND/OR group over entity `E`, keyed by string field paths.
///
/// Every node operation comes in three forms: unguarded (`eq`), guarded
/// (`eq_if`), and guarded with a deferred operand (`eq_with`). A deferred
/// operand is evaluated once, when the node is added, and only if the
/// guard holds. Pattern operators return `Result` because an empty pattern
/// list is rejected.
///

pub struct PredicateBuilder<E> {
    composite: Composite,
    config: Config,
    _marker: PhantomData<fn() -> E>,
}

impl<E> PredicateBuilder<E> {
    #[must_use]
    pub fn and() -> Self {
        Self::new(BooleanOp::And)
    }

    #[must_use]
    pub fn or() -> Self {
        Self::new(BooleanOp::Or)
    }

    #[must_use]
    pub fn new(op: BooleanOp) -> Self {
        Self::from_config(op, Config::default())
    }

    /// Builder using `config`, which is validated first.
    pub fn with_config(op: BooleanOp, config: Config) -> Result<Self, CriteriaError> {
        config.validate()?;

        Ok(Self::from_config(op, config))
    }

    fn from_config(op: BooleanOp, config: Config) -> Self {
        Self {
            composite: Composite::new(op, config.join, Vec::new()),
            config,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn op(&self) -> BooleanOp {
        self.composite.op()
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        self.composite.clauses()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.composite.clauses().len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.composite.is_empty()
    }

    /// Switch to accessor-keyed paths. The view takes ownership of every
    /// clause added so far.
    #[must_use]
    pub fn lambda(self, resolver: &FieldResolver) -> LambdaPredicateBuilder<'_, E>
    where
        E: EntityKind,
    {
        LambdaPredicateBuilder::new(self, resolver)
    }

    /// Freeze into a value that can be nested in another group.
    #[must_use]
    pub fn into_composite(self) -> Composite {
        self.composite
    }

    // ------------------------------------------------------------------
    // Build
    // ------------------------------------------------------------------

    /// Materialize through the reference `FilterBuilder`.
    /// `None` when no clause was retained.
    #[must_use]
    pub fn build(&self) -> Option<Filter> {
        self.build_with(&mut FilterBuilder::new())
    }

    /// Materialize through a framework's expression builder.
    pub fn build_with<B: ExprBuilder>(&self, builder: &mut B) -> Option<B::Expr> {
        trace!(
            op = ?self.composite.op(),
            clauses = self.len(),
            "building predicate"
        );

        self.composite.to_expression(builder)
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
        if cond {
            self.composite.push(clause.into());
        }
        self
    }

    #[must_use]
    pub fn predicate_with<C: Into<Clause>>(mut self, cond: bool, clause: impl FnOnce() -> C) -> Self {
        if cond {
            self.composite.push(clause().into());
        }
        self
    }

    // ------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------

    /// `path = value`; a null value becomes a null check.
    #[must_use]
    pub fn eq(self, path: &str, value: impl FieldValue) -> Self {
        self.eq_if(true, path, value)
    }

    #[must_use]
    pub fn eq_if(self, cond: bool, path: &str, value: impl FieldValue) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::equal(path, vec![value.to_value()])
        })
    }

    #[must_use]
    pub fn eq_with<V: FieldValue>(self, cond: bool, path: &str, value: impl FnOnce() -> V) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::equal(path, vec![value().to_value()])
        })
    }

    /// `path` equals any of `values`; no values means `path IS NULL`.
    #[must_use]
    pub fn eq_any<I, V>(self, path: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.eq_any_if(true, path, values)
    }

    #[must_use]
    pub fn eq_any_if<I, V>(self, cond: bool, path: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, path, |path| PredicateNode::equal(path, to_values(values)))
    }

    #[must_use]
    pub fn eq_any_with<I, V>(self, cond: bool, path: &str, values: impl FnOnce() -> I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, path, |path| {
            PredicateNode::equal(path, to_values(values()))
        })
    }

    /// `path <> value`; a null value becomes a not-null check.
    #[must_use]
    pub fn ne(self, path: &str, value: impl FieldValue) -> Self {
        self.ne_if(true, path, value)
    }

    #[must_use]
    pub fn ne_if(self, cond: bool, path: &str, value: impl FieldValue) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::not_equal(path, vec![value.to_value()])
        })
    }

    #[must_use]
    pub fn ne_with<V: FieldValue>(self, cond: bool, path: &str, value: impl FnOnce() -> V) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::not_equal(path, vec![value().to_value()])
        })
    }

    /// OR of `path <> v` over `values`; no values means `path IS NOT NULL`.
    #[must_use]
    pub fn ne_any<I, V>(self, path: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.ne_any_if(true, path, values)
    }

    #[must_use]
    pub fn ne_any_if<I, V>(self, cond: bool, path: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, path, |path| {
            PredicateNode::not_equal(path, to_values(values))
        })
    }

    #[must_use]
    pub fn ne_any_with<I, V>(self, cond: bool, path: &str, values: impl FnOnce() -> I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, path, |path| {
            PredicateNode::not_equal(path, to_values(values()))
        })
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    #[must_use]
    pub fn gt(self, path: &str, value: impl FieldValue) -> Self {
        self.gt_if(true, path, value)
    }

    #[must_use]
    pub fn gt_if(self, cond: bool, path: &str, value: impl FieldValue) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::greater_than(path, value.to_value())
        })
    }

    #[must_use]
    pub fn gt_with<V: FieldValue>(self, cond: bool, path: &str, value: impl FnOnce() -> V) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::greater_than(path, value().to_value())
        })
    }

    #[must_use]
    pub fn gte(self, path: &str, value: impl FieldValue) -> Self {
        self.gte_if(true, path, value)
    }

    #[must_use]
    pub fn gte_if(self, cond: bool, path: &str, value: impl FieldValue) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::greater_or_equal(path, value.to_value())
        })
    }

    #[must_use]
    pub fn gte_with<V: FieldValue>(
        self,
        cond: bool,
        path: &str,
        value: impl FnOnce() -> V,
    ) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::greater_or_equal(path, value().to_value())
        })
    }

    #[must_use]
    pub fn lt(self, path: &str, value: impl FieldValue) -> Self {
        self.lt_if(true, path, value)
    }

    #[must_use]
    pub fn lt_if(self, cond: bool, path: &str, value: impl FieldValue) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::less_than(path, value.to_value())
        })
    }

    #[must_use]
    pub fn lt_with<V: FieldValue>(self, cond: bool, path: &str, value: impl FnOnce() -> V) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::less_than(path, value().to_value())
        })
    }

    #[must_use]
    pub fn lte(self, path: &str, value: impl FieldValue) -> Self {
        self.lte_if(true, path, value)
    }

    #[must_use]
    pub fn lte_if(self, cond: bool, path: &str, value: impl FieldValue) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::less_or_equal(path, value.to_value())
        })
    }

    #[must_use]
    pub fn lte_with<V: FieldValue>(
        self,
        cond: bool,
        path: &str,
        value: impl FnOnce() -> V,
    ) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::less_or_equal(path, value().to_value())
        })
    }

    /// `lower <= path <= upper`
    #[must_use]
    pub fn between(self, path: &str, lower: impl FieldValue, upper: impl FieldValue) -> Self {
        self.between_if(true, path, lower, upper)
    }

    #[must_use]
    pub fn between_if(
        self,
        cond: bool,
        path: &str,
        lower: impl FieldValue,
        upper: impl FieldValue,
    ) -> Self {
        self.push_if(cond, path, |path| {
            PredicateNode::between(path, lower.to_value(), upper.to_value())
        })
    }

    /// Both bounds come from one supplier.
    #[must_use]
    pub fn between_with<L, U>(self, cond: bool, path: &str, bounds: impl FnOnce() -> (L, U)) -> Self
    where
        L: FieldValue,
        U: FieldValue,
    {
        self.push_if(cond, path, |path| {
            let (lower, upper) = bounds();
            PredicateNode::between(path, lower.to_value(), upper.to_value())
        })
    }

    // ------------------------------------------------------------------
    // Patterns
    // ------------------------------------------------------------------

    /// OR of `path LIKE p` over `patterns`, used verbatim.
    pub fn like<I>(self, path: &str, patterns: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.like_if(true, path, patterns)
    }

    pub fn like_if<I>(self, cond: bool, path: &str, patterns: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.try_push_if(cond, path, |path| {
            PredicateNode::like(path, to_patterns(patterns))
        })
    }

    pub fn like_with<I>(
        self,
        cond: bool,
        path: &str,
        patterns: impl FnOnce() -> I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.try_push_if(cond, path, |path| {
            PredicateNode::like(path, to_patterns(patterns()))
        })
    }

    /// Negation of the whole `like` group.
    pub fn not_like<I>(self, path: &str, patterns: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.not_like_if(true, path, patterns)
    }

    pub fn not_like_if<I>(self, cond: bool, path: &str, patterns: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.try_push_if(cond, path, |path| {
            PredicateNode::not_like(path, to_patterns(patterns))
        })
    }

    pub fn not_like_with<I>(
        self,
        cond: bool,
        path: &str,
        patterns: impl FnOnce() -> I,
    ) -> Result<Self, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.try_push_if(cond, path, |path| {
            PredicateNode::not_like(path, to_patterns(patterns()))
        })
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    #[must_use]
    pub fn in_list<I, V>(self, path: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.in_list_if(true, path, values)
    }

    #[must_use]
    pub fn in_list_if<I, V>(self, cond: bool, path: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, path, |path| {
            PredicateNode::in_list(path, to_values(values))
        })
    }

    #[must_use]
    pub fn in_list_with<I, V>(self, cond: bool, path: &str, values: impl FnOnce() -> I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, path, |path| {
            PredicateNode::in_list(path, to_values(values()))
        })
    }

    /// Negation of `in_list`.
    #[must_use]
    pub fn not_in<I, V>(self, path: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.not_in_if(true, path, values)
    }

    #[must_use]
    pub fn not_in_if<I, V>(self, cond: bool, path: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, path, |path| {
            PredicateNode::not_in(path, to_values(values))
        })
    }

    #[must_use]
    pub fn not_in_with<I, V>(self, cond: bool, path: &str, values: impl FnOnce() -> I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        self.push_if(cond, path, |path| {
            PredicateNode::not_in(path, to_values(values()))
        })
    }

    // ------------------------------------------------------------------
    // Null checks
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_null(self, path: &str) -> Self {
        self.is_null_if(true, path)
    }

    #[must_use]
    pub fn is_null_if(self, cond: bool, path: &str) -> Self {
        self.push_if(cond, path, PredicateNode::is_null)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn parse(&self, path: &str) -> FieldPath {
        FieldPath::parse(path, &self.config.path_delimiter)
    }

    fn push_if(self, cond: bool, path: &str, node: impl FnOnce(FieldPath) -> PredicateNode) -> Self {
        if !cond {
            return self;
        }
        let path = self.parse(path);

        self.push_path_if(true, path, node)
    }

    fn try_push_if(
        self,
        cond: bool,
        path: &str,
        node: impl FnOnce(FieldPath) -> Result<PredicateNode, CriteriaError>,
    ) -> Result<Self, CriteriaError> {
        if !cond {
            return Ok(self);
        }
        let path = self.parse(path);

        self.try_push_path_if(true, path, node)
    }

    pub(crate) fn push_path_if(
        mut self,
        cond: bool,
        path: FieldPath,
        node: impl FnOnce(FieldPath) -> PredicateNode,
    ) -> Self {
        if cond {
            self.composite.push(Clause::Node(node(path)));
        }
        self
    }

    pub(crate) fn try_push_path_if(
        mut self,
        cond: bool,
        path: FieldPath,
        node: impl FnOnce(FieldPath) -> Result<PredicateNode, CriteriaError>,
    ) -> Result<Self, CriteriaError> {
        if cond {
            self.composite.push(Clause::Node(node(path)?));
        }
        Ok(self)
    }
}

impl<E> Default for PredicateBuilder<E> {
    fn default() -> Self {
        Self::and()
    }
}

impl<E> Clone for PredicateBuilder<E> {
    fn clone(&self) -> Self {
        Self {
            composite: self.composite.clone(),
            config: self.config.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E> fmt::Debug for PredicateBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateBuilder")
            .field("composite", &self.composite)
            .field("config", &self.config)
            .finish()
    }
}

impl<E> From<PredicateBuilder<E>> for Clause {
    fn from(builder: PredicateBuilder<E>) -> Self {
        Self::Group(builder.into_composite())
    }
}

pub(crate) fn to_values<I, V>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = V>,
    V: FieldValue,
{
    values.into_iter().map(|value| value.to_value()).collect()
}

pub(crate) fn to_patterns<I>(patterns: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    patterns.into_iter().map(Into::into).collect()
}
