///
/// FieldModel
/// Runtime field metadata used by accessor resolution.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Field name as used in predicates and sort orders.
    pub name: &'static str,
    pub cardinality: FieldCardinality,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, cardinality: FieldCardinality) -> Self {
        Self { name, cardinality }
    }
}

///
/// FieldCardinality
///
/// Lossy shape of the field's Rust type: `Option<_>` is `Opt`,
/// `Vec<_>` and sets are `Many`, everything else is `One`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldCardinality {
    One,
    Opt,
    Many,
}
