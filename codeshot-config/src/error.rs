//! Typed error variants for the codeshot-config crate.
//!
//! Provides structured error types for config I/O, style loading and
//! validation so callers can match on specific failure modes instead of
//! opaque strings.

use thiserror::Error;

/// A string could not be parsed as a `#rrggbb` / `#rgb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #rrggbb or #rgb")]
pub struct ParseColorError(pub String);

/// Errors that can occur when loading configuration or style files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing a config or style file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The file contained YAML that could not be parsed into the expected shape.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
