use crate::model::field::FieldModel;

///
/// EntityModel
/// Minimal, macro-generated runtime model for one entity.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for diagnostics and descriptors).
    pub path: &'static str,
    /// Stable external name of the entity.
    pub entity_name: &'static str,
    /// Ordered field list (authoritative for accessor resolution).
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    /// Find a field by its exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }
}
