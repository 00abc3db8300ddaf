//! Core runtime for Criteria: typed accessors and their field resolver,
//! cascade paths, predicate nodes, predicate/sort builders, and the
//! expression boundary handed to a persistence framework.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod accessor;
pub mod builder;
pub mod cascade;
pub mod config;
pub mod error;
pub mod expr;
pub mod model;
pub mod obs;
pub mod path;
pub mod predicate;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Default delimiter between segments of a string field path.
pub const DEFAULT_PATH_DELIMITER: &str = ".";

///
/// Prelude
///
/// Domain vocabulary needed to describe entities and build criteria.
/// Errors, sinks, and expression backends stay in their own modules.
///

pub mod prelude {
    pub use crate::{
        accessor::{Accessor, FieldDescriptor, FieldResolver},
        builder::{LambdaPredicateBuilder, LambdaSortBuilder, LikePatterns, PredicateBuilder, SortBuilder},
        cascade::CascadePath,
        expr::{BooleanOp, Filter, JoinKind, OrderDirection, Sort},
        path::FieldPath,
        predicate::PredicateNode,
        traits::{EntityKind, FieldValue, Traverse},
        value::Value,
    };
}
