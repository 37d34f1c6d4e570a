use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::ParserConfig;

/// Widest help indent accepted from a config file.
const MAX_INDENT: usize = 32;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl ParserConfig {
    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ParserConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError { source: e })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    ///
    /// - If the file doesn't exist, returns `ParserConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(ParserConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The help separator is not empty and stays on one line
    /// - The help indent is at most `MAX_INDENT`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let separator = &self.help.separator;
        if separator.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Help separator must not be empty".to_string(),
            });
        }
        if separator.contains('\n') {
            return Err(ConfigError::ValidationError {
                message: "Help separator must not contain a newline".to_string(),
            });
        }
        if self.help.indent > MAX_INDENT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Help indent {} exceeds the maximum of {}",
                    self.help.indent, MAX_INDENT
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ParserConfig::from_toml_str("").unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.help.indent, 4);
        assert_eq!(config.help.separator, " : ");
    }

    #[test]
    fn partial_help_table_keeps_other_defaults() {
        let config = ParserConfig::from_toml_str("[help]\nindent = 2\n").unwrap();
        assert_eq!(config.help.indent, 2);
        assert_eq!(config.help.separator, " : ");
    }

    #[test]
    fn rejects_empty_separator() {
        let err = ParserConfig::from_toml_str("[help]\nseparator = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn rejects_multiline_separator() {
        let err = ParserConfig::from_toml_str("[help]\nseparator = \"a\\nb\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn rejects_oversized_indent() {
        let err = ParserConfig::from_toml_str("[help]\nindent = 100\n").unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum of 32"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ParserConfig::from_toml_str("[help\nindent = 2").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
