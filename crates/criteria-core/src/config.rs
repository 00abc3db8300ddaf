//! Builder configuration: path delimiter and join kind.
//!
//! Loaded from TOML or built in code; every builder carries one.

use crate::{DEFAULT_PATH_DELIMITER, error::ConfigError, expr::JoinKind};
use serde::Deserialize;

///
/// Config
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Separator between segments of string field paths.
    pub path_delimiter: String,
    /// Join used for every intermediate path segment.
    pub join: JoinKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path_delimiter: DEFAULT_PATH_DELIMITER.to_string(),
            join: JoinKind::default(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path_delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }

        Ok(())
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.path_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub const fn with_join(mut self, join: JoinKind) -> Self {
        self.join = join;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_dot_and_left_join() {
        let config = Config::default();

        assert_eq!(config.path_delimiter, ".");
        assert_eq!(config.join, JoinKind::Left);
    }

    #[test]
    fn toml_overrides_selected_keys() {
        let config = Config::from_toml_str(
            r#"
            path_delimiter = "/"
            join = "inner"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.path_delimiter, "/");
        assert_eq!(config.join, JoinKind::Inner);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").expect("valid"), Config::default());
    }

    #[test]
    fn empty_delimiter_is_rejected() {
        assert_eq!(
            Config::from_toml_str(r#"path_delimiter = """#),
            Err(ConfigError::EmptyDelimiter)
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("delimiter = \"/\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
