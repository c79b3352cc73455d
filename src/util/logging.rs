//! Structured logging setup for stackbuilder
//!
//! Initializes the `tracing` subscriber with an `EnvFilter` and either pretty or JSON
//! output on stderr. Initialization happens at most once per process.
//!
//! # Example
//!
//! ```no_run
//! use stackbuilder::util::logging;
//!
//! logging::init_from_env();
//!
//! tracing::info!("Catalog loaded");
//! tracing::debug!(technology = "React 18", "Added technology");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., stackbuilder::builder) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Reads `STACKBUILDER_LOG_LEVEL` (default `info`) and `STACKBUILDER_LOG_JSON`
    pub fn from_env() -> Self {
        let level_str = env::var("STACKBUILDER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let use_json = env::var("STACKBUILDER_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level: parse_level(&level_str),
            use_json,
            ..Default::default()
        }
    }
}

/// Parses a log level (case-insensitive), falling back to `INFO`
///
/// ```
/// use stackbuilder::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Builds the filter: `RUST_LOG` when set, otherwise `stackbuilder=<level>`
fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(format!("warn,stackbuilder={}", level))
}

/// Initializes the logging system. Subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        }
    });
}

/// Initializes logging from `STACKBUILDER_LOG_LEVEL` and `STACKBUILDER_LOG_JSON`
pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
        assert!(!config.include_location);
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        env::set_var("STACKBUILDER_LOG_LEVEL", "warn");
        env::set_var("STACKBUILDER_LOG_JSON", "true");
        let config = LoggingConfig::from_env();
        env::remove_var("STACKBUILDER_LOG_LEVEL");
        env::remove_var("STACKBUILDER_LOG_JSON");

        assert_eq!(config.level, Level::WARN);
        assert!(config.use_json);
        assert!(config.include_target);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("STACKBUILDER_LOG_LEVEL");
        env::remove_var("STACKBUILDER_LOG_JSON");
        let config = LoggingConfig::from_env();

        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
    }
}
