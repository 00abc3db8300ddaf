//! ## Crate layout
//! - `accessor`: typed getter/setter references and the memoizing field resolver.
//! - `cascade`: typed accessor chains through related entities.
//! - `builder`: fluent predicate and sort builders, string- or accessor-keyed.
//! - `predicate`: leaf condition nodes and their AND/OR groups.
//! - `expr`: the expression boundary a persistence framework implements.
//! - `Accessors`: derive macro generating entity models and accessor constants.
//!
//! The `prelude` module carries everything needed to describe entities and
//! build criteria; errors, sinks, and config stay in their own modules.

pub use criteria_core::{
    DEFAULT_PATH_DELIMITER, accessor, builder, cascade, config, error, expr, model, obs, path,
    predicate, traits, value,
};
pub use criteria_derive::Accessors;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::Accessors;
    pub use criteria_core::prelude::*;
}
