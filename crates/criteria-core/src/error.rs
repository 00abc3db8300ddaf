use std::fmt;
use thiserror::Error as ThisError;

///
/// ResolveError
///
/// Failure to derive a field name from an accessor.
/// Raised while a node or cascade is being constructed, never at build time.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("accessor '{method}' on '{entity}' is not supported: {reason}")]
    UnsupportedAccessorKind {
        entity: &'static str,
        method: &'static str,
        reason: UnsupportedReason,
    },

    #[error("entity '{entity}' has no field '{field}' (resolved from accessor '{method}')")]
    FieldNotFound {
        entity: &'static str,
        field: String,
        method: &'static str,
    },
}

impl ResolveError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedAccessorKind { .. } => ErrorClass::Unsupported,
            Self::FieldNotFound { .. } => ErrorClass::NotFound,
        }
    }
}

///
/// UnsupportedReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnsupportedReason {
    /// Inline closure instead of a getter or setter reference.
    InlineClosure,
    /// Method name does not start with `get`, `is`, or `set`.
    MissingPrefix,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InlineClosure => {
                "inline closures are not supported, use a getter or setter reference"
            }
            Self::MissingPrefix => "not a getter or setter reference",
        };
        write!(f, "{label}")
    }
}

///
/// CriteriaError
///
/// Construction-time failure of a predicate or sort builder.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CriteriaError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("pattern operator on '{field}' requires at least one pattern")]
    InvalidPatternArguments { field: String },

    #[error("field path must have at least one segment")]
    EmptyPath,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CriteriaError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Resolve(err) => err.class(),
            Self::InvalidPatternArguments { .. } | Self::EmptyPath => ErrorClass::InvalidInput,
            Self::Config(_) => ErrorClass::Config,
        }
    }
}

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("path delimiter must not be empty")]
    EmptyDelimiter,

    #[error("invalid criteria config: {0}")]
    Parse(String),
}

///
/// ErrorClass
/// Error taxonomy for classification and logging.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Unsupported,
    NotFound,
    InvalidInput,
    Config,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unsupported => "unsupported",
            Self::NotFound => "not_found",
            Self::InvalidInput => "invalid_input",
            Self::Config => "config",
        };
        write!(f, "{label}")
    }
}
