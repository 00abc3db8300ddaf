//! Runtime entity metadata.
//!
//! Types in `model` are the *runtime representations* that
//! `#[derive(Accessors)]` emits as statics. The resolver consults them to
//! confirm that a name derived from an accessor is a real field.
//!
//! In general:
//! - derive code defines *what exists*
//! - `model` defines *what the resolver checks against*
pub mod entity;
pub mod field;

// re-exports
pub use entity::EntityModel;
pub use field::{FieldCardinality, FieldModel};
