use crate::{
    expr::{ExprBuilder, JoinKind},
    path::FieldPath,
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

///
/// Filter
///
/// Backend-neutral filter tree. Pure data: no validation against a schema
/// and no evaluation semantics; a persistence layer consumes it as-is.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Filter {
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare {
        attr: AttrPath,
        op: CompareOp,
        value: Value,
    },
    Between {
        attr: AttrPath,
        lower: Value,
        upper: Value,
    },
    Like {
        attr: AttrPath,
        pattern: String,
    },
    IsNull {
        attr: AttrPath,
    },
    IsNotNull {
        attr: AttrPath,
    },
    In {
        attr: AttrPath,
        values: Vec<Value>,
    },
}

impl Filter {
    #[must_use]
    pub const fn compare(attr: AttrPath, op: CompareOp, value: Value) -> Self {
        Self::Compare { attr, op, value }
    }

    /// Number of leaf expressions in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::And(children) | Self::Or(children) => children.iter().map(Self::leaf_count).sum(),
            Self::Not(inner) => inner.leaf_count(),
            _ => 1,
        }
    }
}

impl BitAnd for Filter {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Filter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl Not for Filter {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

///
/// AttrPath
/// Joined attribute: the joins to walk from the root, then the field.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AttrPath {
    pub joins: Vec<Join>,
    pub field: String,
}

impl AttrPath {
    /// Attribute on the root entity.
    #[must_use]
    pub fn root(field: impl Into<String>) -> Self {
        Self {
            joins: Vec::new(),
            field: field.into(),
        }
    }

    #[must_use]
    pub fn from_path(path: &FieldPath, kind: JoinKind) -> Self {
        Self {
            joins: path
                .joins()
                .iter()
                .map(|field| Join {
                    field: field.clone(),
                    kind,
                })
                .collect(),
            field: path.field().to_string(),
        }
    }
}

///
/// Join
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Join {
    pub field: String,
    pub kind: JoinKind,
}

///
/// FilterBuilder
/// Reference `ExprBuilder` that assembles a `Filter` tree.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct FilterBuilder;

impl FilterBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ExprBuilder for FilterBuilder {
    type Attr = AttrPath;
    type Expr = Filter;

    fn attribute(&mut self, path: &FieldPath, join: JoinKind) -> AttrPath {
        AttrPath::from_path(path, join)
    }

    fn equal(&mut self, attr: &AttrPath, value: &Value) -> Filter {
        Filter::compare(attr.clone(), CompareOp::Eq, value.clone())
    }

    fn not_equal(&mut self, attr: &AttrPath, value: &Value) -> Filter {
        Filter::compare(attr.clone(), CompareOp::Ne, value.clone())
    }

    fn greater_than(&mut self, attr: &AttrPath, value: &Value) -> Filter {
        Filter::compare(attr.clone(), CompareOp::Gt, value.clone())
    }

    fn greater_or_equal(&mut self, attr: &AttrPath, value: &Value) -> Filter {
        Filter::compare(attr.clone(), CompareOp::Gte, value.clone())
    }

    fn less_than(&mut self, attr: &AttrPath, value: &Value) -> Filter {
        Filter::compare(attr.clone(), CompareOp::Lt, value.clone())
    }

    fn less_or_equal(&mut self, attr: &AttrPath, value: &Value) -> Filter {
        Filter::compare(attr.clone(), CompareOp::Lte, value.clone())
    }

    fn between(&mut self, attr: &AttrPath, lower: &Value, upper: &Value) -> Filter {
        Filter::Between {
            attr: attr.clone(),
            lower: lower.clone(),
            upper: upper.clone(),
        }
    }

    fn like(&mut self, attr: &AttrPath, pattern: &str) -> Filter {
        Filter::Like {
            attr: attr.clone(),
            pattern: pattern.to_string(),
        }
    }

    fn is_null(&mut self, attr: &AttrPath) -> Filter {
        Filter::IsNull { attr: attr.clone() }
    }

    fn is_not_null(&mut self, attr: &AttrPath) -> Filter {
        Filter::IsNotNull { attr: attr.clone() }
    }

    fn in_list(&mut self, attr: &AttrPath, values: &[Value]) -> Filter {
        Filter::In {
            attr: attr.clone(),
            values: values.to_vec(),
        }
    }

    fn and(&mut self, exprs: Vec<Filter>) -> Filter {
        Filter::And(exprs)
    }

    fn or(&mut self, exprs: Vec<Filter>) -> Filter {
        Filter::Or(exprs)
    }

    fn not(&mut self, expr: Filter) -> Filter {
        !expr
    }
}
