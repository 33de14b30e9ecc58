//! Logging bootstrap
//!
//! Log lines go to stderr in `key=value` form. `RUST_LOG` wins over the
//! configured level. Initialization happens at most once per process.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use std::sync::OnceLock;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Start the stderr logger with `level` unless it is already running.
pub fn init_logging(level: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let level = normalize_level(level)?;
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    let _ = LOGGER.set(handle);
    debug!("event=logging_init level={}", level);
    Ok(())
}

/// Map a user-supplied level name onto one the logger understands.
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "error" => Ok("error"),
        "warn" | "warning" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        other => Err(format!(
            "unsupported log level `{other}`; expected one of off, error, warn, info, debug, trace"
        )),
    }
}
