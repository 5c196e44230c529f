//! Logging System
//!
//! Structured logging implementation using the `tracing` crate. Logs go to
//! stderr so that stdout only carries command output.

use crate::error::LoggingError;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full filter directive, e.g. `benchttp=debug`.
pub const LOG_ENV: &str = "BENCHTTP_LOG";
/// Environment variable overriding the output format.
pub const LOG_FORMAT_ENV: &str = "BENCHTTP_LOG_FORMAT";

/// Logging configuration, built from CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Whether logging is enabled at all
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text (default: text)
    pub format: String,

    /// Enable colored output (text format only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "warn".to_string(),
            format: "text".to_string(),
            color: true,
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (BENCHTTP_LOG, BENCHTTP_LOG_FORMAT)
/// 2. The given configuration (built from CLI flags)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), LoggingError> {
    if config.map(|c| !c.enabled).unwrap_or(false) {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config, std::env::var(LOG_FORMAT_ENV).ok().as_deref())?;
    let use_color = config.map(|c| c.color).unwrap_or(true);
    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    parse_level(level)?;
    Ok(EnvFilter::new(level))
}

fn parse_level(level: &str) -> Result<(), LoggingError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
        other => Err(LoggingError::InvalidLevel(other.to_string())),
    }
}

/// Determine output format; a valid environment override wins over config.
fn determine_format(
    config: Option<&LoggingConfig>,
    env_format: Option<&str>,
) -> Result<String, LoggingError> {
    if let Some(format) = env_format {
        if format == "json" || format == "text" {
            return Ok(format.to_string());
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(LoggingError::InvalidFormat(format.to_string()));
    }
    Ok(format.to_string())
}
