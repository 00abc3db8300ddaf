//! Module: builder
//! Responsibility: fluent, conditional construction of predicate groups and sorts.
//! Does not own: node semantics (see `predicate`) or the backend (see `expr`).
//! Boundary: string-keyed builders and their accessor-keyed views share one node model.

mod lambda;
mod like;
mod predicate;
mod sort;


// re-exports
pub use lambda::LambdaPredicateBuilder;
pub use like::LikePatterns;
pub use predicate::PredicateBuilder;
pub use sort::{LambdaSortBuilder, SortBuilder};
