//! Token layout and painting engine for codeshot.
//!
//! This crate turns lines of classified tokens into a painted PNG:
//!
//! - [`color`]: three-tier color resolution (token type, `Text`, contrast)
//! - [`layout`]: line advances, gutter sizing and the fixed layout constants
//! - [`LineRenderer`]: the line/token/character paint loop and PNG hand-off
//! - [`Panel`]: canvas sizing and window decoration around the code
//!
//! Glyph measurement and drawing go through the
//! [`GlyphEngine`](codeshot_fonts::GlyphEngine) trait, so the loop runs the
//! same against real fonts and test doubles.

pub mod color;
pub mod error;
pub mod layout;
pub mod line_renderer;
pub mod panel;
pub mod token;

// Re-export main public types
pub use color::{contrast_color, resolve};
pub use error::RenderError;
pub use layout::{LINE_PADDING_RATIO, RenderConfig, TAB_WIDTH_SPACES};
pub use line_renderer::{LineRenderer, encode_png};
pub use panel::{Panel, PanelStyle};
pub use token::{Line, Token, split_into_lines};
