//! The `Config` struct, its YAML persistence and validation.
//!
//! Every field carries a serde default so a partial (or empty) YAML file is
//! valid; command-line flags are applied on top by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::styles::{BUILTIN_STYLES, StyleTable};
use crate::types::LogLevel;

/// Rendering and output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Font
    // ========================================================================
    /// Font family looked up in the system font database
    #[serde(default)]
    pub font_family: Option<String>,

    /// Explicit font file; takes precedence over `font_family`
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    /// Font size in pixels (points at 72 DPI)
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f32,

    // ========================================================================
    // Layout
    // ========================================================================
    /// Draw a line-number gutter
    #[serde(default = "crate::defaults::line_numbers")]
    pub line_numbers: bool,

    /// Horizontal space between the image edge and the window
    #[serde(default = "crate::defaults::padding_x")]
    pub padding_x: u32,

    /// Vertical space between the image edge and the window
    #[serde(default = "crate::defaults::padding_y")]
    pub padding_y: u32,

    /// Draw the three window-control dots above the code
    #[serde(default = "crate::defaults::window_controls")]
    pub window_controls: bool,

    /// Radius of the window corners in pixels (0 = square)
    #[serde(default = "crate::defaults::corner_radius")]
    pub corner_radius: u32,

    // ========================================================================
    // Colors
    // ========================================================================
    /// Built-in style name (see `StyleTable::builtin`)
    #[serde(default = "crate::defaults::style")]
    pub style: String,

    /// YAML style file; takes precedence over `style`
    #[serde(default)]
    pub style_file: Option<PathBuf>,

    /// Color around the window
    #[serde(default = "crate::defaults::background")]
    pub background: Color,

    /// Window color behind the code; defaults to the style's background
    #[serde(default)]
    pub window_background: Option<Color>,

    // ========================================================================
    // Diagnostics
    // ========================================================================
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_family: None,
            font_path: None,
            font_size: crate::defaults::font_size(),
            line_numbers: crate::defaults::line_numbers(),
            padding_x: crate::defaults::padding_x(),
            padding_y: crate::defaults::padding_y(),
            window_controls: crate::defaults::window_controls(),
            corner_radius: crate::defaults::corner_radius(),
            style: crate::defaults::style(),
            style_file: None,
            background: crate::defaults::background(),
            window_background: None,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = style.to_string();
        self
    }

    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Directory holding `config.yaml`.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codeshot")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        let config: Config = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;
        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Check semantic invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "font_size must be a positive number, got {}",
                self.font_size
            )));
        }
        if self.style_file.is_none() && StyleTable::builtin(&self.style).is_none() {
            return Err(ConfigError::Validation(format!(
                "unknown style '{}' (available: {})",
                self.style,
                BUILTIN_STYLES.join(", ")
            )));
        }
        Ok(())
    }

    /// The style table selected by this config.
    pub fn resolve_style(&self) -> Result<StyleTable, ConfigError> {
        if let Some(path) = &self.style_file {
            return StyleTable::load(path);
        }
        StyleTable::builtin(&self.style)
            .ok_or_else(|| ConfigError::Validation(format!("unknown style '{}'", self.style)))
    }

    /// Window background: explicit config, else the style's, else the default.
    pub fn effective_window_background(&self, style: &StyleTable) -> Color {
        self.window_background
            .or(style.background)
            .unwrap_or_else(crate::defaults::window_background)
    }
}
