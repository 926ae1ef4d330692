// Library exports for testing and potential library use
//
// The rendering core lives in the workspace crates:
//
//   - `codeshot-config`  — colors, token types, style tables and the YAML config
//   - `codeshot-fonts`   — font discovery, 26.6 metrics and glyph rasterization
//   - `codeshot-render`  — color resolution, the line paint loop and the panel
//
// This crate wires them into the `codeshot` command.

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod debug;
pub mod input;

pub use app::{App, render_lines};
pub use cli::{CliResult, RuntimeOptions};
