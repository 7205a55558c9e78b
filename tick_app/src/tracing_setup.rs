use std::ffi::OsString;
use std::io;
use std::io::IsTerminal;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Initialise tracing on stderr, plus a non-blocking rolling file when `log_dir` is set
///
/// Stdout is left alone for ticker output. Keep the returned guard alive
/// until exit or buffered file lines are lost.
pub fn init(app_name: &str, log_dir: Option<&str>, default_level: Level) -> Option<WorkerGuard> {
    // Respects RUST_LOG env var, falls back to default_level
    let env_filter = EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    let ansi = ansi_enabled(io::stderr().is_terminal(), std::env::var_os("NO_COLOR"));
    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false).with_ansi(ansi).compact();

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let _ = std::fs::create_dir_all(dir);
            let file_appender = tracing_appender::rolling::hourly(dir, format!("{app_name}.log"));
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer().with_writer(non_blocking).with_target(true).with_line_number(true).with_ansi(false).compact();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(env_filter).with(stderr_layer).with(file_layer).init();

    guard
}

/// Colour only when writing to a terminal and `NO_COLOR` is unset or empty
fn ansi_enabled(is_terminal: bool, no_color: Option<OsString>) -> bool {
    is_terminal && no_color.is_none_or(|value| value.is_empty())
}
