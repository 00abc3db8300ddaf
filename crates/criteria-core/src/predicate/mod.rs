//! Module: predicate
//! Responsibility: the closed set of leaf conditions and their AND/OR grouping.
//! Does not own: path resolution or operand conversion (done before a node exists).
//! Boundary: nodes materialize only through `expr::ExprBuilder`.

mod composite;
mod node;


// re-exports
pub use composite::{Clause, Composite};
pub use node::{NodeOp, PredicateNode};
