//! Configuration system for codeshot.
//!
//! This crate provides:
//!
//! - The RGB [`Color`] type shared by every layer of the pipeline
//! - The closed set of lexical [`TokenType`]s a tokenizer can emit
//! - [`StyleTable`]s mapping token types to optional colors, with built-in styles
//! - The YAML-backed [`Config`] with default values and validation

pub mod color;
pub mod config;
pub mod defaults;
pub mod error;
pub mod styles;
pub mod token_type;
mod types;

// Re-export main types for convenience
pub use color::Color;
pub use config::Config;
pub use error::{ConfigError, ParseColorError};
pub use styles::StyleTable;
pub use token_type::TokenType;
pub use types::LogLevel;
