//! Logger bootstrap for the roster binary

use flexi_logger::{Logger, LoggerHandle};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Normalize a level name, rejecting anything flexi_logger would not understand as a plain level
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    let wanted = level.trim().to_ascii_lowercase();
    LEVELS
        .iter()
        .copied()
        .find(|l| *l == wanted)
        .ok_or_else(|| format!("unsupported log level `{}`", level))
}

/// Start logging to stderr.
///
/// `RUST_LOG` takes precedence over `fallback_level` unless `explicit` is set.
/// Keep the returned handle alive for the lifetime of the process.
pub fn init_logging(explicit: Option<&str>, fallback_level: &str) -> Result<LoggerHandle, String> {
    let logger = match explicit {
        Some(level) => Logger::try_with_str(normalize_level(level)?),
        None => Logger::try_with_env_or_str(normalize_level(fallback_level).unwrap_or("warn")),
    }
    .map_err(|err| format!("invalid log specification: {err}"))?;

    logger
        .log_to_stderr()
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("WARN"), Ok("warn"));
        assert_eq!(normalize_level(" debug "), Ok("debug"));
        assert!(normalize_level("loud").is_err());
    }
}
