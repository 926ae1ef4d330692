// End-to-end render tests with a fixed-advance glyph engine

mod common;

use codeshot::app::{App, panel_style, render_lines};
use codeshot::input::{from_json_tokens, from_plain_text};
use codeshot_config::{Color, Config, LogLevel};
use codeshot_render::Panel;
use common::{MonoEngine, parse_cli, write_file};
use tempfile::TempDir;

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("valid PNG").to_rgba8()
}

#[test]
fn test_render_matches_panel_size() {
    let config = Config::default().with_font_size(16.0);
    let lines = from_plain_text("fn main() {\n    println!(\"hi\");\n}\n");
    let mut engine = MonoEngine::new(8);
    let mut png = Vec::new();

    render_lines(&lines, &config, &mut engine, &mut png).unwrap();

    let style = config.resolve_style().unwrap();
    let window = config.effective_window_background(&style);
    let panel = Panel::measure(&lines, &engine, 16.0, true, panel_style(&config, window));
    let image = decode(&png);
    assert_eq!(image.dimensions(), panel.size());
    assert_eq!(image.get_pixel(0, 0).0, config.background.as_rgba());
    assert!(engine.draws > 0);
}

#[test]
fn test_render_is_byte_identical_across_runs() {
    let config = Config::default().with_font_size(16.0);
    let json = r#"[{"type":"Keyword","value":"fn"},{"type":"Text","value":" f()\n\tx"}]"#;
    let lines = from_json_tokens(json.as_bytes()).unwrap();

    let run = || {
        let mut png = Vec::new();
        render_lines(&lines, &config, &mut MonoEngine::new(8), &mut png).unwrap();
        png
    };
    assert_eq!(run(), run());
}

#[test]
fn test_style_file_background_becomes_window_color() {
    let dir = TempDir::new().unwrap();
    let style_path = write_file(
        dir.path(),
        "light.yaml",
        "background: \"#fafafa\"\nentries:\n  Keyword: \"#0000ff\"\n",
    );
    let config = Config {
        style_file: Some(style_path),
        window_controls: false,
        corner_radius: 0,
        ..Config::default().with_font_size(16.0)
    };
    let lines = from_plain_text("x\n");
    let mut png = Vec::new();

    render_lines(&lines, &config, &mut MonoEngine::new(8), &mut png).unwrap();

    let image = decode(&png);
    let (px, py) = (config.padding_x, config.padding_y);
    assert_eq!(image.get_pixel(px, py).0, Color::new(0xfa, 0xfa, 0xfa).as_rgba());
}

#[test]
fn test_empty_input_still_renders_a_window() {
    let config = Config::default().with_font_size(16.0);
    let mut png = Vec::new();

    render_lines(&[], &config, &mut MonoEngine::new(8), &mut png).unwrap();

    let (width, height) = decode(&png).dimensions();
    assert!(width > config.padding_x * 2);
    assert!(height > config.padding_y * 2);
}

#[test]
fn test_missing_style_file_is_error() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        style_file: Some(dir.path().join("gone.yaml")),
        ..Config::default()
    };
    let mut png = Vec::new();

    let err = render_lines(&[], &config, &mut MonoEngine::new(8), &mut png).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load style table"));
    assert!(png.is_empty());
}

#[test]
fn test_load_config_reads_log_level_and_keeps_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "config.yaml", "log_level: info\nfont_size: 20\n");
    let path_arg = path.to_string_lossy().into_owned();
    let options = parse_cli(&["--config", &path_arg, "--font-size", "12"]);

    let config = App::new(options).load_config().unwrap();
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.font_size, 12.0);
}
