//! Command-line interface for codeshot.
//!
//! Flags map onto [`Config`] fields and override whatever the config file
//! says.

use clap::Parser;
use std::path::{Path, PathBuf};

use codeshot_config::styles::BUILTIN_STYLES;
use codeshot_config::{Color, Config, LogLevel};

/// codeshot - Render source code as a PNG image
#[derive(Parser, Debug)]
#[command(name = "codeshot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file to render (`-` or omitted reads stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Treat the input as a JSON token stream instead of plain text
    #[arg(long)]
    pub tokens: bool,

    /// Output PNG path (`-` writes to stdout)
    #[arg(short, long, value_name = "PATH", default_value = "codeshot.png")]
    pub output: PathBuf,

    /// Font family to look up among system fonts
    #[arg(long, value_name = "FAMILY")]
    pub font: Option<String>,

    /// Font file to load directly
    #[arg(long, value_name = "PATH")]
    pub font_path: Option<PathBuf>,

    /// Font size in pixels
    #[arg(long, value_name = "SIZE")]
    pub font_size: Option<f32>,

    /// Built-in style name
    #[arg(long, value_name = "NAME")]
    pub style: Option<String>,

    /// YAML style table to use instead of a built-in style
    #[arg(long, value_name = "PATH")]
    pub style_file: Option<PathBuf>,

    /// Print the built-in style names and exit
    #[arg(long)]
    pub list_styles: bool,

    /// Do not draw line numbers
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Do not draw the window control dots
    #[arg(long)]
    pub no_window_controls: bool,

    /// Color around the window, as hex (e.g. `#aaaaff`)
    #[arg(long, value_name = "HEX")]
    pub background: Option<Color>,

    /// Horizontal padding around the window, in pixels
    #[arg(long, value_name = "PX")]
    pub padding_x: Option<u32>,

    /// Vertical padding around the window, in pixels
    #[arg(long, value_name = "PX")]
    pub padding_y: Option<u32>,

    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Input file; `None` reads stdin
    pub input: Option<PathBuf>,
    /// Input is a JSON token stream
    pub json_tokens: bool,
    /// Output path; `-` writes to stdout
    pub output: PathBuf,
    /// Explicit config file
    pub config_path: Option<PathBuf>,
    /// Log level from the command line
    pub log_level: Option<LogLevel>,
    pub overrides: ConfigOverrides,
}

/// Config values given on the command line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub font_family: Option<String>,
    pub font_path: Option<PathBuf>,
    pub font_size: Option<f32>,
    pub style: Option<String>,
    pub style_file: Option<PathBuf>,
    pub no_line_numbers: bool,
    pub no_window_controls: bool,
    pub background: Option<Color>,
    pub padding_x: Option<u32>,
    pub padding_y: Option<u32>,
}

impl ConfigOverrides {
    /// Write every given value into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(family) = &self.font_family {
            config.font_family = Some(family.clone());
        }
        if let Some(path) = &self.font_path {
            config.font_path = Some(path.clone());
        }
        if let Some(size) = self.font_size {
            config.font_size = size;
        }
        if let Some(style) = &self.style {
            config.style = style.clone();
            // A named style on the command line beats a style file from config
            config.style_file = None;
        }
        if let Some(path) = &self.style_file {
            config.style_file = Some(path.clone());
        }
        if self.no_line_numbers {
            config.line_numbers = false;
        }
        if self.no_window_controls {
            config.window_controls = false;
        }
        if let Some(color) = self.background {
            config.background = color;
        }
        if let Some(px) = self.padding_x {
            config.padding_x = px;
        }
        if let Some(px) = self.padding_y {
            config.padding_y = px;
        }
    }
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        RuntimeOptions {
            input: cli.input,
            json_tokens: cli.tokens,
            output: cli.output,
            config_path: cli.config,
            log_level: cli.log_level,
            overrides: ConfigOverrides {
                font_family: cli.font,
                font_path: cli.font_path,
                font_size: cli.font_size,
                style: cli.style,
                style_file: cli.style_file,
                no_line_numbers: cli.no_line_numbers,
                no_window_controls: cli.no_window_controls,
                background: cli.background,
                padding_x: cli.padding_x,
                padding_y: cli.padding_y,
            },
        }
    }
}

impl RuntimeOptions {
    /// Whether the PNG goes to stdout.
    pub fn writes_stdout(&self) -> bool {
        self.output == Path::new("-")
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with rendering
    Continue(RuntimeOptions),
    /// Exit with the given code (informational flag handled)
    Exit(i32),
}

/// Parse CLI arguments and handle informational flags
pub fn process_cli() -> CliResult {
    handle(Cli::parse())
}

/// Handle already-parsed arguments.
pub fn handle(cli: Cli) -> CliResult {
    if cli.list_styles {
        for name in BUILTIN_STYLES {
            println!("{}", name);
        }
        return CliResult::Exit(0);
    }
    CliResult::Continue(cli.into())
}
