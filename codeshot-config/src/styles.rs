//! Style tables: token type to optional foreground color.
//!
//! A [`StyleTable`] is read-only once built and is cheap to clone, so several
//! renders can share one. Built-in styles are provided for the common
//! palettes; custom styles load from YAML:
//!
//! ```yaml
//! name: mine
//! background: "#101010"
//! entries:
//!   Keyword: "#ff5555"
//!   Comment: "#6272a4"
//!   Text: null
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::token_type::TokenType;

/// Names accepted by [`StyleTable::builtin`].
pub const BUILTIN_STYLES: &[&str] = &["dracula", "monokai", "github", "nord", "solarized-dark", "plain"];

/// Mapping from token type to an optional display color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleTable {
    #[serde(default)]
    pub name: String,
    /// Background the style was designed for, if it specifies one.
    #[serde(default)]
    pub background: Option<Color>,
    /// An explicit `None` entry and a missing entry mean the same thing.
    #[serde(default)]
    pub entries: HashMap<TokenType, Option<Color>>,
}

impl StyleTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: None,
            entries: HashMap::new(),
        }
    }

    /// Builder-style entry insertion.
    pub fn with(mut self, token_type: TokenType, color: Option<Color>) -> Self {
        self.set(token_type, color);
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn set(&mut self, token_type: TokenType, color: Option<Color>) {
        self.entries.insert(token_type, color);
    }

    /// Color for `token_type`, inherited from the nearest ancestor category
    /// that defines one (`CommentSingle` falls back to `Comment`).
    pub fn get(&self, token_type: TokenType) -> Option<Color> {
        token_type
            .lineage()
            .find_map(|tt| self.entries.get(&tt).copied().flatten())
    }

    /// Color of the generic `Text` entry.
    pub fn text(&self) -> Option<Color> {
        self.get(TokenType::Text)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Option::is_none)
    }

    /// Parse a style table from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a style table from a YAML file.
    ///
    /// A style file without a `name` takes the file stem as its name.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading style file {:?}", path);
        let contents = fs::read_to_string(path)?;
        let mut style = Self::from_yaml_str(&contents)?;
        if style.name.is_empty() {
            style.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        log::debug!(
            "Style '{}' defines {} entries",
            style.name,
            style.entries.len()
        );
        Ok(style)
    }

    /// Look up a built-in style by name (case-insensitive, `_` or space for `-`).
    pub fn builtin(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "dracula" => Some(Self::dracula()),
            "monokai" => Some(Self::monokai()),
            "github" => Some(Self::github()),
            "nord" => Some(Self::nord()),
            "solarized-dark" => Some(Self::solarized_dark()),
            "plain" => Some(Self::plain()),
            _ => None,
        }
    }

    /// Dracula style
    pub fn dracula() -> Self {
        let c = |hex| Some(hex_color(hex));
        Self::new("dracula")
            .with_background(hex_color(0x282a36))
            .with(TokenType::Text, c(0xf8f8f2))
            .with(TokenType::Keyword, c(0xff79c6))
            .with(TokenType::KeywordConstant, c(0xbd93f9))
            .with(TokenType::KeywordDeclaration, c(0x8be9fd))
            .with(TokenType::KeywordNamespace, c(0xff79c6))
            .with(TokenType::KeywordType, c(0x8be9fd))
            .with(TokenType::NameAttribute, c(0x50fa7b))
            .with(TokenType::NameBuiltin, c(0x8be9fd))
            .with(TokenType::NameClass, c(0x50fa7b))
            .with(TokenType::NameFunction, c(0x50fa7b))
            .with(TokenType::NameTag, c(0xff79c6))
            .with(TokenType::NameVariable, c(0x8be9fd))
            .with(TokenType::Literal, c(0xbd93f9))
            .with(TokenType::LiteralString, c(0xf1fa8c))
            .with(TokenType::LiteralStringEscape, c(0xff79c6))
            .with(TokenType::LiteralNumber, c(0xbd93f9))
            .with(TokenType::Operator, c(0xff79c6))
            .with(TokenType::Punctuation, c(0xf8f8f2))
            .with(TokenType::Comment, c(0x6272a4))
            .with(TokenType::CommentPreproc, c(0xff79c6))
            .with(TokenType::GenericDeleted, c(0xff5555))
            .with(TokenType::GenericInserted, c(0x50fa7b))
            .with(TokenType::GenericHeading, c(0xbd93f9))
            .with(TokenType::Error, c(0xff5555))
    }

    /// Monokai style
    pub fn monokai() -> Self {
        let c = |hex| Some(hex_color(hex));
        Self::new("monokai")
            .with_background(hex_color(0x272822))
            .with(TokenType::Text, c(0xf8f8f2))
            .with(TokenType::Keyword, c(0x66d9ef))
            .with(TokenType::KeywordNamespace, c(0xf92672))
            .with(TokenType::Name, c(0xf8f8f2))
            .with(TokenType::NameAttribute, c(0xa6e22e))
            .with(TokenType::NameClass, c(0xa6e22e))
            .with(TokenType::NameFunction, c(0xa6e22e))
            .with(TokenType::NameTag, c(0xf92672))
            .with(TokenType::Literal, c(0xae81ff))
            .with(TokenType::LiteralString, c(0xe6db74))
            .with(TokenType::LiteralStringEscape, c(0xae81ff))
            .with(TokenType::LiteralNumber, c(0xae81ff))
            .with(TokenType::Operator, c(0xf92672))
            .with(TokenType::Comment, c(0x75715e))
            .with(TokenType::GenericDeleted, c(0xf92672))
            .with(TokenType::GenericInserted, c(0xa6e22e))
            .with(TokenType::Error, c(0x960050))
    }

    /// GitHub light style.
    ///
    /// Deliberately has no `Text` entry: plain text falls back to contrast.
    pub fn github() -> Self {
        let c = |hex| Some(hex_color(hex));
        Self::new("github")
            .with_background(hex_color(0xffffff))
            .with(TokenType::Keyword, c(0x000000))
            .with(TokenType::KeywordType, c(0x445588))
            .with(TokenType::NameAttribute, c(0x008080))
            .with(TokenType::NameBuiltin, c(0x0086b3))
            .with(TokenType::NameClass, c(0x445588))
            .with(TokenType::NameFunction, c(0x990000))
            .with(TokenType::NameTag, c(0x000080))
            .with(TokenType::NameVariable, c(0x008080))
            .with(TokenType::LiteralString, c(0xdd1144))
            .with(TokenType::LiteralNumber, c(0x009999))
            .with(TokenType::Comment, c(0x999988))
            .with(TokenType::CommentPreproc, c(0x999999))
            .with(TokenType::GenericDeleted, c(0x000000))
            .with(TokenType::GenericInserted, c(0x000000))
            .with(TokenType::Error, c(0xa61717))
    }

    /// Nord style
    pub fn nord() -> Self {
        let c = |hex| Some(hex_color(hex));
        Self::new("nord")
            .with_background(hex_color(0x2e3440))
            .with(TokenType::Text, c(0xd8dee9))
            .with(TokenType::Keyword, c(0x81a1c1))
            .with(TokenType::KeywordType, c(0x81a1c1))
            .with(TokenType::NameAttribute, c(0x8fbcbb))
            .with(TokenType::NameBuiltin, c(0x81a1c1))
            .with(TokenType::NameClass, c(0x8fbcbb))
            .with(TokenType::NameFunction, c(0x88c0d0))
            .with(TokenType::NameTag, c(0x81a1c1))
            .with(TokenType::LiteralString, c(0xa3be8c))
            .with(TokenType::LiteralNumber, c(0xb48ead))
            .with(TokenType::Operator, c(0x81a1c1))
            .with(TokenType::Punctuation, c(0xeceff4))
            .with(TokenType::Comment, c(0x616e88))
            .with(TokenType::Error, c(0xbf616a))
    }

    /// Solarized Dark style
    pub fn solarized_dark() -> Self {
        let c = |hex| Some(hex_color(hex));
        Self::new("solarized-dark")
            .with_background(hex_color(0x002b36))
            .with(TokenType::Text, c(0x93a1a1))
            .with(TokenType::Keyword, c(0x719e07))
            .with(TokenType::KeywordConstant, c(0xcb4b16))
            .with(TokenType::KeywordDeclaration, c(0x268bd2))
            .with(TokenType::KeywordType, c(0xdc322f))
            .with(TokenType::NameBuiltin, c(0xb58900))
            .with(TokenType::NameClass, c(0x268bd2))
            .with(TokenType::NameConstant, c(0xcb4b16))
            .with(TokenType::NameFunction, c(0x268bd2))
            .with(TokenType::NameTag, c(0x268bd2))
            .with(TokenType::NameVariable, c(0x268bd2))
            .with(TokenType::LiteralString, c(0x2aa198))
            .with(TokenType::LiteralNumber, c(0x2aa198))
            .with(TokenType::Operator, c(0x719e07))
            .with(TokenType::Comment, c(0x586e75))
            .with(TokenType::CommentPreproc, c(0x719e07))
            .with(TokenType::Error, c(0xdc322f))
    }

    /// A style with no colors at all; everything renders in the contrast color.
    pub fn plain() -> Self {
        Self::new("plain")
    }
}

const fn hex_color(rgb: u32) -> Color {
    Color::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}
