use crate::{
    error::CriteriaError,
    expr::{ExprBuilder, JoinKind},
    path::FieldPath,
    value::Value,
};

///
/// NodeOp
///
/// Closed set of leaf operators and their operands.
/// Operands are concrete; deferred operands were evaluated before the node
/// existed. `NotLike` and `NotIn` are materialized as the negation of their
/// positive counterpart, never as distinct backend operators.
///

#[derive(Clone, Debug, PartialEq)]
pub enum NodeOp {
    /// Empty → null check; several → OR of equalities.
    Equal(Vec<Value>),
    /// Empty → not-null check; several → OR of inequalities.
    NotEqual(Vec<Value>),
    GreaterThan(Value),
    GreaterOrEqual(Value),
    LessThan(Value),
    LessOrEqual(Value),
    Between { lower: Value, upper: Value },
    Like(Vec<String>),
    NotLike(Vec<String>),
    In(Vec<Value>),
    NotIn(Vec<Value>),
    IsNull,
}

impl NodeOp {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Equal(_) => "eq",
            Self::NotEqual(_) => "ne",
            Self::GreaterThan(_) => "gt",
            Self::GreaterOrEqual(_) => "gte",
            Self::LessThan(_) => "lt",
            Self::LessOrEqual(_) => "lte",
            Self::Between { .. } => "between",
            Self::Like(_) => "like",
            Self::NotLike(_) => "not_like",
            Self::In(_) => "in",
            Self::NotIn(_) => "not_in",
            Self::IsNull => "is_null",
        }
    }
}

///
/// PredicateNode
/// One leaf condition bound to a field path.
///

#[derive(Clone, Debug, PartialEq)]
pub struct PredicateNode {
    path: FieldPath,
    op: NodeOp,
}

impl PredicateNode {
    /// Build a node, rejecting pattern operators without patterns.
    pub fn new(path: FieldPath, op: NodeOp) -> Result<Self, CriteriaError> {
        if let NodeOp::Like(patterns) | NodeOp::NotLike(patterns) = &op
            && patterns.is_empty()
        {
            return Err(CriteriaError::InvalidPatternArguments {
                field: path.to_string(),
            });
        }

        Ok(Self { path, op })
    }

    // ------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn equal(path: FieldPath, values: Vec<Value>) -> Self {
        Self {
            path,
            op: NodeOp::Equal(values),
        }
    }

    #[must_use]
    pub const fn not_equal(path: FieldPath, values: Vec<Value>) -> Self {
        Self {
            path,
            op: NodeOp::NotEqual(values),
        }
    }

    #[must_use]
    pub const fn greater_than(path: FieldPath, value: Value) -> Self {
        Self {
            path,
            op: NodeOp::GreaterThan(value),
        }
    }

    #[must_use]
    pub const fn greater_or_equal(path: FieldPath, value: Value) -> Self {
        Self {
            path,
            op: NodeOp::GreaterOrEqual(value),
        }
    }

    #[must_use]
    pub const fn less_than(path: FieldPath, value: Value) -> Self {
        Self {
            path,
            op: NodeOp::LessThan(value),
        }
    }

    #[must_use]
    pub const fn less_or_equal(path: FieldPath, value: Value) -> Self {
        Self {
            path,
            op: NodeOp::LessOrEqual(value),
        }
    }

    #[must_use]
    pub const fn between(path: FieldPath, lower: Value, upper: Value) -> Self {
        Self {
            path,
            op: NodeOp::Between { lower, upper },
        }
    }

    pub fn like(path: FieldPath, patterns: Vec<String>) -> Result<Self, CriteriaError> {
        Self::new(path, NodeOp::Like(patterns))
    }

    pub fn not_like(path: FieldPath, patterns: Vec<String>) -> Result<Self, CriteriaError> {
        Self::new(path, NodeOp::NotLike(patterns))
    }

    #[must_use]
    pub const fn in_list(path: FieldPath, values: Vec<Value>) -> Self {
        Self {
            path,
            op: NodeOp::In(values),
        }
    }

    #[must_use]
    pub const fn not_in(path: FieldPath, values: Vec<Value>) -> Self {
        Self {
            path,
            op: NodeOp::NotIn(values),
        }
    }

    #[must_use]
    pub const fn is_null(path: FieldPath) -> Self {
        Self {
            path,
            op: NodeOp::IsNull,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub const fn op(&self) -> &NodeOp {
        &self.op
    }

    // ------------------------------------------------------------------
    // Materialization
    // ------------------------------------------------------------------

    /// Materialize this node through the framework's expression builder.
    pub fn to_expression<B: ExprBuilder>(&self, builder: &mut B, join: JoinKind) -> B::Expr {
        let attr = builder.attribute(&self.path, join);

        match &self.op {
            NodeOp::Equal(values) => values_expr(builder, &attr, values, Polarity::Positive),
            NodeOp::NotEqual(values) => values_expr(builder, &attr, values, Polarity::Negative),
            NodeOp::GreaterThan(value) => builder.greater_than(&attr, value),
            NodeOp::GreaterOrEqual(value) => builder.greater_or_equal(&attr, value),
            NodeOp::LessThan(value) => builder.less_than(&attr, value),
            NodeOp::LessOrEqual(value) => builder.less_or_equal(&attr, value),
            NodeOp::Between { lower, upper } => builder.between(&attr, lower, upper),
            NodeOp::Like(patterns) => like_expr(builder, &attr, patterns),
            NodeOp::NotLike(patterns) => {
                let like = like_expr(builder, &attr, patterns);
                builder.not(like)
            }
            NodeOp::In(values) => builder.in_list(&attr, values),
            NodeOp::NotIn(values) => {
                let within = builder.in_list(&attr, values);
                builder.not(within)
            }
            NodeOp::IsNull => builder.is_null(&attr),
        }
    }
}

///
/// Polarity
///

#[derive(Clone, Copy)]
enum Polarity {
    Positive,
    Negative,
}

// values_expr
// Equal/NotEqual over zero, one, or many operands.
fn values_expr<B: ExprBuilder>(
    builder: &mut B,
    attr: &B::Attr,
    values: &[Value],
    polarity: Polarity,
) -> B::Expr {
    match values {
        [] => null_check(builder, attr, polarity),
        [value] => single_value(builder, attr, value, polarity),
        _ => {
            let exprs = values
                .iter()
                .map(|value| single_value(builder, attr, value, polarity))
                .collect();
            builder.or(exprs)
        }
    }
}

fn single_value<B: ExprBuilder>(
    builder: &mut B,
    attr: &B::Attr,
    value: &Value,
    polarity: Polarity,
) -> B::Expr {
    if value.is_null() {
        return null_check(builder, attr, polarity);
    }

    match polarity {
        Polarity::Positive => builder.equal(attr, value),
        Polarity::Negative => builder.not_equal(attr, value),
    }
}

fn null_check<B: ExprBuilder>(builder: &mut B, attr: &B::Attr, polarity: Polarity) -> B::Expr {
    match polarity {
        Polarity::Positive => builder.is_null(attr),
        Polarity::Negative => builder.is_not_null(attr),
    }
}

// like_expr
// Patterns are used verbatim; several are OR-combined.
fn like_expr<B: ExprBuilder>(builder: &mut B, attr: &B::Attr, patterns: &[String]) -> B::Expr {
    if let [pattern] = patterns {
        return builder.like(attr, pattern);
    }

    let exprs = patterns
        .iter()
        .map(|pattern| builder.like(attr, pattern))
        .collect();

    builder.or(exprs)
}
