//! Structured logging setup
//!
//! Signal computations log through `tracing`. Applications embedding this
//! crate can install their own subscriber, or call one of the `init_*`
//! functions here to get console or JSON output filtered by `RUST_LOG`.
//!
//! ```no_run
//! use oss_signals::util::logging;
//!
//! logging::init_from_env();
//! // or, with a config loaded elsewhere:
//! logging::init_from_config(&oss_signals::SignalsConfig::builtin());
//! tracing::info!(project = "madler/zlib", "Computing signals");
//! ```

use crate::config::SignalsConfig;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's own events
    pub level: Level,

    /// JSON lines instead of human-readable output
    pub use_json: bool,

    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

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
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// JSON output with full metadata, for log collectors
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
        }
    }

    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            ..Default::default()
        }
    }
}

impl From<&SignalsConfig> for LoggingConfig {
    fn from(config: &SignalsConfig) -> Self {
        Self::with_level(parse_level(&config.log_level))
    }
}

/// Parses a log level case-insensitively, falling back to INFO
///
/// ```
/// use oss_signals::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("loud"), Level::INFO);
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

fn build_filter(level: Level) -> EnvFilter {
    let directive = format!("oss_signals={}", level);
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        // try_init: the host application may already own the global subscriber
        if config.use_json {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .try_init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Uses the level of an already loaded [`SignalsConfig`]
pub fn init_from_config(config: &SignalsConfig) {
    init_logging(LoggingConfig::from(config));
}

/// Level via [`SignalsConfig::default`] (`OSS_SIGNALS_LOG_LEVEL`), plus
/// `OSS_SIGNALS_LOG_JSON`
pub fn init_from_env() {
    init_logging(env_logging_config());
}

fn env_logging_config() -> LoggingConfig {
    let use_json = env::var("OSS_SIGNALS_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    LoggingConfig {
        use_json,
        ..LoggingConfig::from(&SignalsConfig::default())
    }
}
