#[cfg(test)]
mod tests;

use crate::traits::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
/// operand carried by predicate nodes and handed to the expression backend
///
/// Null → the operand is absent (Option::None); equality nodes turn it into
/// a null check instead of comparing against it.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    /// Ordered list of values.
    /// List order is preserved through to the backend.
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Build a list value from any iterator of operands.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        Self::List(values.into_iter().map(|v| v.to_value()).collect())
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Null => write!(f, "null"),
            Self::Text(v) => write!(f, "'{v}'"),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}
