use codeshot::app::App;
use codeshot::cli;

fn main() {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = match cli::process_cli() {
        cli::CliResult::Exit(code) => std::process::exit(code),
        cli::CliResult::Continue(options) => options,
    };
    // CLI --log-level takes precedence, then CODESHOT_LOG, then config (applied later).
    codeshot::debug::init_log_bridge(options.log_level);

    log::info!("Starting codeshot {}", codeshot::VERSION);

    if let Err(e) = App::new(options).run() {
        log::error!("Render failed: {e:?}");
        eprintln!("codeshot: error: {e:#}");
        std::process::exit(1);
    }
}
