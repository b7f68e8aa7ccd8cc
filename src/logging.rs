use anyhow::Context;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::{CONFIG, LoggingConfig};

const LOG_FILE_PREFIX: &str = "bitfact.log";

/// Installs the terminal and rolling-file layers from `[logging]`.
///
/// Terminal output goes to stderr so stdout only carries query results.
/// `RUST_LOG`, when set, overrides `stdout_level` for the terminal layer.
/// Keep the returned guard alive until exit or buffered file lines are lost.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let cfg: &LoggingConfig = &CONFIG.logging;
    let stdout_level = parse_level("logging.stdout_level", &cfg.stdout_level)?;
    let file_level = parse_level("logging.file_level", &cfg.file_level)?;

    let terminal_filter = EnvFilter::builder()
        .with_default_directive(stdout_level.into())
        .from_env_lossy();
    let terminal_layer = fmt::layer()
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(terminal_filter);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&cfg.log_dir, LOG_FILE_PREFIX));
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(file_level);

    tracing_subscriber::registry()
        .with(terminal_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    info!(log_dir = %cfg.log_dir, %stdout_level, %file_level, "Logging initialized");
    Ok(guard)
}

/// Parses a level name such as `info` or `off`, naming the config key on failure.
pub fn parse_level(key: &str, raw: &str) -> anyhow::Result<LevelFilter> {
    raw.trim()
        .parse::<LevelFilter>()
        .with_context(|| format!("{} = {:?} is not a log level", key, raw))
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive("bitfact=debug".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;
