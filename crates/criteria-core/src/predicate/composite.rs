use crate::{
    expr::{BooleanOp, ExprBuilder, JoinKind},
    predicate::PredicateNode,
};

///
/// Clause
/// One entry of a composite: a leaf node or a nested group.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Clause {
    Node(PredicateNode),
    Group(Composite),
}

impl Clause {
    fn to_expression<B: ExprBuilder>(&self, builder: &mut B, join: JoinKind) -> Option<B::Expr> {
        match self {
            Self::Node(node) => Some(node.to_expression(builder, join)),
            Self::Group(group) => group.to_expression(builder),
        }
    }
}

impl From<PredicateNode> for Clause {
    fn from(node: PredicateNode) -> Self {
        Self::Node(node)
    }
}

impl From<Composite> for Clause {
    fn from(group: Composite) -> Self {
        Self::Group(group)
    }
}

///
/// Composite
///
/// Frozen AND/OR group. Each group keeps the join kind it was configured
/// with, so a nested group may walk its paths differently from its parent.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    op: BooleanOp,
    join: JoinKind,
    clauses: Vec<Clause>,
}

impl Composite {
    #[must_use]
    pub const fn new(op: BooleanOp, join: JoinKind, clauses: Vec<Clause>) -> Self {
        Self { op, join, clauses }
    }

    #[must_use]
    pub const fn op(&self) -> BooleanOp {
        self.op
    }

    #[must_use]
    pub const fn join(&self) -> JoinKind {
        self.join
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub(crate) fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Materialize every clause in insertion order and combine them.
    ///
    /// `None` means "apply no filtering": the group had no clauses, or every
    /// clause was itself an empty group. Empty sub-groups are skipped.
    pub fn to_expression<B: ExprBuilder>(&self, builder: &mut B) -> Option<B::Expr> {
        let exprs: Vec<_> = self
            .clauses
            .iter()
            .filter_map(|clause| clause.to_expression(builder, self.join))
            .collect();

        if exprs.is_empty() {
            return None;
        }

        Some(builder.combine(self.op, exprs))
    }
}
