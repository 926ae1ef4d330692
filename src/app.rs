//! Application driver: config, fonts, panel and render, end to end.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use codeshot_config::{Color, Config};
use codeshot_fonts::{FontManager, GlyphEngine, SwashEngine};
use codeshot_render::{Line, LineRenderer, Panel, PanelStyle};

use crate::cli::RuntimeOptions;
use crate::input;

/// One codeshot run.
pub struct App {
    options: RuntimeOptions,
}

impl App {
    pub fn new(options: RuntimeOptions) -> Self {
        Self { options }
    }

    /// Config file (explicit path or default location) with CLI overrides
    /// applied, then validated.
    ///
    /// The file's `log_level` takes effect before anything else is logged.
    pub fn load_config(&self) -> Result<Config> {
        let path = self
            .options
            .config_path
            .clone()
            .unwrap_or_else(Config::config_path);
        let mut config = match &self.options.config_path {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => Config::load().context("Failed to load config")?,
        };
        crate::debug::apply_config_level(config.log_level);
        if path.exists() {
            log::info!("Using config {:?}", path);
        } else {
            log::info!("No config at {:?}, using defaults", path);
        }

        self.options.overrides.apply(&mut config);
        config
            .validate()
            .context("Invalid settings after command-line overrides")?;
        Ok(config)
    }

    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        log::debug!("Effective config: {:?}", config);

        let lines = input::load_lines(self.options.input.as_deref(), self.options.json_tokens)?;

        let fonts = FontManager::new(config.font_family.as_deref(), config.font_path.as_deref())
            .context("Failed to load a font")?;
        let mut engine = SwashEngine::new(fonts, config.font_size);

        if self.options.writes_stdout() {
            let mut stdout = io::stdout().lock();
            render_lines(&lines, &config, &mut engine, &mut stdout)?;
        } else {
            // Encode fully before touching the output file
            let mut bytes = Vec::new();
            render_lines(&lines, &config, &mut engine, &mut bytes)?;
            fs::write(&self.options.output, &bytes)
                .with_context(|| format!("Failed to write {:?}", self.options.output))?;
            log::info!("Wrote {} bytes to {:?}", bytes.len(), self.options.output);
        }
        Ok(())
    }
}

/// Panel style for `config`, with the window color already resolved.
pub fn panel_style(config: &Config, window_background: Color) -> PanelStyle {
    PanelStyle {
        padding_x: config.padding_x,
        padding_y: config.padding_y,
        window_controls: config.window_controls,
        corner_radius: config.corner_radius,
        outer_background: config.background,
        window_background,
    }
}

/// Measure, decorate, paint and encode `lines` into `sink`.
pub fn render_lines<E: GlyphEngine + ?Sized, W: Write>(
    lines: &[Line],
    config: &Config,
    engine: &mut E,
    sink: &mut W,
) -> Result<()> {
    let style = config
        .resolve_style()
        .context("Failed to load style table")?;
    let window_background = config.effective_window_background(&style);
    log::info!(
        "Rendering {} lines with style '{}' at {}px",
        lines.len(),
        style.name,
        config.font_size
    );

    let panel = Panel::measure(
        lines,
        &*engine,
        config.font_size,
        config.line_numbers,
        panel_style(config, window_background),
    );
    let canvas = panel.paint();
    let renderer = LineRenderer::new(panel.render_config(config.line_numbers), window_background);
    renderer.render(lines, &style, engine, canvas, sink)?;
    Ok(())
}
