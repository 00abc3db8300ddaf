//! Module: expr
//! Responsibility: the outbound boundary to a persistence framework's criteria API.
//! Does not own: executing queries or materializing sort orders.
//! Boundary: builders talk to `ExprBuilder` only; `FilterBuilder` is the
//! reference backend producing a serializable `Filter` tree.

mod filter;
mod sort;

#[cfg(test)]
mod tests;

use crate::{path::FieldPath, value::Value};
use serde::{Deserialize, Serialize};

// re-exports
pub use filter::{AttrPath, CompareOp, Filter, FilterBuilder, Join};
pub use sort::{Order, OrderDirection, Sort};

///
/// BooleanOp
/// Combinator a predicate builder applies to its clauses.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOp {
    And,
    Or,
}

///
/// JoinKind
/// Join used to step through each intermediate path segment.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
    Inner,
    #[default]
    Left,
    Right,
}

///
/// ExprBuilder
///
/// Expression-construction interface of the target framework.
///
/// `attribute` turns a field path into whatever the framework filters on
/// (walking joins as needed); every other method builds one expression.
/// Takes `&mut self` so backends can reuse joins across attributes.
///

pub trait ExprBuilder {
    type Attr;
    type Expr;

    fn attribute(&mut self, path: &FieldPath, join: JoinKind) -> Self::Attr;

    fn equal(&mut self, attr: &Self::Attr, value: &Value) -> Self::Expr;

    fn not_equal(&mut self, attr: &Self::Attr, value: &Value) -> Self::Expr;

    fn greater_than(&mut self, attr: &Self::Attr, value: &Value) -> Self::Expr;

    fn greater_or_equal(&mut self, attr: &Self::Attr, value: &Value) -> Self::Expr;

    fn less_than(&mut self, attr: &Self::Attr, value: &Value) -> Self::Expr;

    fn less_or_equal(&mut self, attr: &Self::Attr, value: &Value) -> Self::Expr;

    /// Inclusive on both bounds.
    fn between(&mut self, attr: &Self::Attr, lower: &Value, upper: &Value) -> Self::Expr;

    fn like(&mut self, attr: &Self::Attr, pattern: &str) -> Self::Expr;

    fn is_null(&mut self, attr: &Self::Attr) -> Self::Expr;

    fn is_not_null(&mut self, attr: &Self::Attr) -> Self::Expr;

    fn in_list(&mut self, attr: &Self::Attr, values: &[Value]) -> Self::Expr;

    fn and(&mut self, exprs: Vec<Self::Expr>) -> Self::Expr;

    fn or(&mut self, exprs: Vec<Self::Expr>) -> Self::Expr;

    fn not(&mut self, expr: Self::Expr) -> Self::Expr;

    /// Combine with the given operator.
    fn combine(&mut self, op: BooleanOp, exprs: Vec<Self::Expr>) -> Self::Expr {
        match op {
            BooleanOp::And => self.and(exprs),
            BooleanOp::Or => self.or(exprs),
        }
    }
}
