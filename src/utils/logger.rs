use crate::constants::{ENV_DEBUG, ENV_LOG_LEVEL};
use crate::utils::config::{get_env_or_default, get_env_or_none, parse_flag};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Resolves the log level from an explicit `LOGLEVEL` value and the `DEBUG` flag
///
/// An explicit level wins; otherwise `DEBUG` selects `DEBUG`, and `INFO` is the default.
#[must_use]
pub fn resolve_log_level(log_level: Option<&str>, debug: bool) -> Level {
    match log_level.map(|l| l.trim().to_uppercase()).as_deref() {
        Some("TRACE") => Level::TRACE,
        Some("DEBUG") => Level::DEBUG,
        Some("INFO") => Level::INFO,
        Some("WARN") | Some("WARNING") => Level::WARN,
        Some("ERROR") => Level::ERROR,
        _ if debug => Level::DEBUG,
        _ => Level::INFO,
    }
}

/// Installs the global tracing subscriber once, reading `LOGLEVEL` and `DEBUG`
///
/// Logs go to stderr: stdout carries MCP frames and CLI output.
pub fn setup_logger() {
    let debug = parse_flag(&get_env_or_default(ENV_DEBUG, String::new()));
    setup_logger_with_debug(debug);
}

/// Installs the global tracing subscriber once with an explicit debug flag
pub fn setup_logger_with_debug(debug: bool) {
    INIT.call_once(|| {
        let log_level: Option<String> = get_env_or_none(ENV_LOG_LEVEL);
        let level = resolve_log_level(log_level.as_deref(), debug);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .finish();

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Error setting default subscriber: {e}");
            return;
        }
        tracing::debug!("Log level set to: {}", level);
    });
}
