//! Operator-facing diagnostics. The binary installs a `flexi_logger` backend
//! writing to stderr; library code only uses the `log` macros.

use crate::errors::AppError;
use flexi_logger::{Logger, LoggerHandle, WriteMode};
use log::info;
use std::sync::OnceLock;

pub const DEFAULT_LEVEL: &str = "warn";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Starts the stderr logger. Later calls are no-ops.
pub fn init_logging(level: &str) -> Result<(), AppError> {
    let level = normalize_level(level)?;

    if LOGGER.get().is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(level)
        .map_err(|err| AppError::Logging(format!("invalid log level `{level}`: {err}")))?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .start()
        .map_err(|err| AppError::Logging(format!("failed to start logger: {err}")))?;

    let _ = LOGGER.set(handle);

    info!(
        "event=app_start module=logging level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, AppError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(AppError::Logging(format!("unsupported log level `{other}`"))),
    }
}
