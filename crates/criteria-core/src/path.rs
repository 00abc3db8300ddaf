//! Module: path
//! Responsibility: the normalized segment list every predicate and sort node targets.
//! Does not own: accessor resolution (see `accessor`, `cascade`).

use crate::{
    DEFAULT_PATH_DELIMITER,
    accessor::{Accessor, FieldResolver},
    cascade::CascadePath,
    error::{CriteriaError, ResolveError},
    traits::EntityKind,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

///
/// FieldPath
///
/// Ordered, non-empty list of segments. Every segment but the last is a join
/// step; the last is the field being filtered or sorted.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "RawFieldPath")]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Split a string path on `delimiter`, dropping empty tokens.
    ///
    /// A path with no non-empty token (`""`, or only delimiters) names no
    /// field and is a caller error. It is kept verbatim as a single segment
    /// and logged, so the backend reports the unknown field.
    #[must_use]
    pub fn parse(path: &str, delimiter: &str) -> Self {
        if path.is_empty() {
            warn!(path, "string path names no field");
            return Self::leaf(path);
        }

        if delimiter.is_empty() || !path.contains(delimiter) {
            return Self::leaf(path);
        }

        let segments: Vec<String> = path
            .split(delimiter)
            .filter(|segment| !segment.is_empty())
            .map(ToString::to_string)
            .collect();

        if segments.is_empty() {
            warn!(path, delimiter, "string path names no field");
            return Self::leaf(path);
        }

        Self { segments }
    }

    /// Single-segment path.
    #[must_use]
    pub fn leaf(field: impl Into<String>) -> Self {
        Self {
            segments: vec![field.into()],
        }
    }

    /// Path from already-split segments; `None` when there are none.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();

        (!segments.is_empty()).then_some(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Join steps, root first.
    #[must_use]
    pub fn joins(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The field the node applies to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    #[must_use]
    pub fn to_dotted(&self, delimiter: &str) -> String {
        self.segments.join(delimiter)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dotted(DEFAULT_PATH_DELIMITER))
    }
}

///
/// RawFieldPath
/// Wire shape of `FieldPath`, checked for at least one segment.
///

#[derive(Deserialize)]
struct RawFieldPath {
    segments: Vec<String>,
}

impl TryFrom<RawFieldPath> for FieldPath {
    type Error = CriteriaError;

    fn try_from(raw: RawFieldPath) -> Result<Self, Self::Error> {
        Self::from_segments(raw.segments).ok_or(CriteriaError::EmptyPath)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path, DEFAULT_PATH_DELIMITER)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::parse(&path, DEFAULT_PATH_DELIMITER)
    }
}

///
/// TypedPath
///
/// Compile-time-typed path rooted at entity `E`: a single accessor declared
/// on `E`, or a cascade starting at `E`. Resolves to a `FieldPath`.
///

pub trait TypedPath<E: EntityKind> {
    fn resolve_path(&self, resolver: &FieldResolver) -> Result<FieldPath, ResolveError>;
}

impl<E: EntityKind, R: 'static> TypedPath<E> for &'static Accessor<E, R> {
    fn resolve_path(&self, resolver: &FieldResolver) -> Result<FieldPath, ResolveError> {
        resolver
            .resolve(*self)
            .map(|descriptor| FieldPath::leaf(descriptor.name))
    }
}

impl<E: EntityKind, R: 'static> TypedPath<E> for CascadePath<E, R> {
    fn resolve_path(&self, resolver: &FieldResolver) -> Result<FieldPath, ResolveError> {
        self.to_field_path(resolver)
    }
}

impl<E: EntityKind, R: 'static> TypedPath<E> for &CascadePath<E, R> {
    fn resolve_path(&self, resolver: &FieldResolver) -> Result<FieldPath, ResolveError> {
        self.to_field_path(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dotted_path_splits_into_joins_and_field() {
        let path = FieldPath::from("person.id_card.number");

        assert_eq!(path.joins(), ["person", "id_card"]);
        assert_eq!(path.field(), "number");
        assert!(path.is_nested());
        assert_eq!(path.to_string(), "person.id_card.number");
    }

    #[test]
    fn plain_name_is_a_single_leaf() {
        let path = FieldPath::from("name");

        assert!(path.joins().is_empty());
        assert_eq!(path.field(), "name");
        assert!(!path.is_nested());
    }

    #[test]
    fn empty_tokens_are_dropped() {
        let path = FieldPath::parse("a..b.", ".");

        assert_eq!(path.segments(), ["a", "b"]);
    }

    #[test]
    fn custom_delimiter_is_honoured() {
        let path = FieldPath::parse("address/city", "/");

        assert_eq!(path.segments(), ["address", "city"]);
        assert_eq!(FieldPath::parse("address.city", "/").segments(), ["address.city"]);
    }

    #[test]
    fn delimiter_only_path_stays_single_segment() {
        assert_eq!(FieldPath::parse("..", ".").segments(), [".."]);
        assert_eq!(FieldPath::parse("", ".").segments(), [""]);
    }

    #[test]
    fn from_segments_rejects_empty() {
        assert!(FieldPath::from_segments(Vec::<String>::new()).is_none());
        assert_eq!(
            FieldPath::from_segments(["a", "b"]).map(|p| p.to_dotted("/")),
            Some("a/b".to_string())
        );
    }

    #[test]
    fn deserializing_an_empty_path_fails() {
        let err = serde_json::from_str::<FieldPath>(r#"{"segments":[]}"#).unwrap_err();

        assert!(err.to_string().contains("at least one segment"));
    }

    #[test]
    fn deserialized_path_keeps_joins_and_field() {
        let path: FieldPath =
            serde_json::from_str(r#"{"segments":["id_card","number"]}"#).expect("path");

        assert_eq!(path.joins(), ["id_card"]);
        assert_eq!(path.field(), "number");
        assert_eq!(
            serde_json::to_string(&path).expect("json"),
            r#"{"segments":["id_card","number"]}"#
        );
    }

    proptest! {
        #[test]
        fn dotted_round_trip(segments in prop::collection::vec("[a-z_]{1,8}", 1..6)) {
            let dotted = segments.join(".");
            let path = FieldPath::parse(&dotted, ".");

            prop_assert_eq!(path.segments(), segments.as_slice());
            prop_assert_eq!(path.to_dotted("."), dotted);
        }
    }
}
