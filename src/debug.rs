//! Logging bridge for codeshot
//!
//! Routes every `log::info!()` etc. from codeshot and its sub-crates to
//! stderr, so stdout stays free for PNG output (`-o -`).
//!
//! The level is chosen once at startup, in order of precedence:
//! - `--log-level` on the command line
//! - the `CODESHOT_LOG` environment variable (`off`, `error`, `warn`,
//!   `info`, `debug`, `trace`, or `0`-`4`)
//! - `log_level` from the config file, applied as soon as the file is parsed
//!
//! Nothing is logged until one of them asks for it. A level that comes only
//! from the config file cannot cover the loader's own messages, which are
//! emitted while the file is still being read; the app logs where the config
//! came from again once that level is in place.

use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use codeshot_config::LogLevel;
use parking_lot::Mutex;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV_VAR: &str = "CODESHOT_LOG";

struct BridgeState {
    level: LogLevel,
    /// Set when the level came from the CLI or environment; the config
    /// file may not override it then.
    pinned: bool,
}

impl BridgeState {
    /// Take the config file's level unless pinned. Returns whether the
    /// level changed.
    fn apply_config(&mut self, level: LogLevel) -> bool {
        if self.pinned || self.level == level {
            return false;
        }
        self.level = level;
        true
    }
}

struct LogBridge {
    state: Mutex<BridgeState>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.state.lock().level.to_level_filter()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// One log line, newline included.
pub fn format_record(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, msg)
}

/// Pick the startup level from the CLI flag and the environment value.
///
/// Unparseable environment values are ignored.
pub fn startup_level(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Option<LogLevel> {
    cli_level.or_else(|| env_value.and_then(|v| v.parse().ok()))
}

/// Install the bridge as the global `log` logger.
///
/// Safe to call more than once; only the first call installs.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let chosen = startup_level(cli_level, env_value.as_deref());
    let level = chosen.unwrap_or_default();

    let logger = LOGGER.get_or_init(|| LogBridge {
        state: Mutex::new(BridgeState {
            level,
            pinned: chosen.is_some(),
        }),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

/// Apply the config file's level unless the CLI or environment chose one.
pub fn apply_config_level(level: LogLevel) {
    let Some(logger) = LOGGER.get() else {
        return;
    };
    if logger.state.lock().apply_config(level) {
        log::set_max_level(level.to_level_filter());
    }
}
