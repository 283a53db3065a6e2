//! Logging System
//!
//! The library only emits `tracing` events. Applications that have no subscriber of their
//! own can call [`init_logging`] to install one with a configurable level, per-module
//! directives and text or JSON output on stderr.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a complete filter (overrides the config level)
pub const LOG_ENV: &str = "PROPSTORE_LOG";
/// Environment variable selecting `text` or `json` output
pub const LOG_FORMAT_ENV: &str = "PROPSTORE_LOG_FORMAT";
/// Environment variable with extra `module=level` directives, comma separated
pub const LOG_MODULES_ENV: &str = "PROPSTORE_LOG_MODULES";

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("Invalid log directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (PROPSTORE_LOG, PROPSTORE_LOG_FORMAT, PROPSTORE_LOG_MODULES)
/// 2. Configuration
/// 3. Defaults
///
/// Returns an error instead of panicking when a global subscriber is already set.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), LoggingError> {
    let filter = build_env_filter(config, std::env::var(LOG_MODULES_ENV).ok().as_deref())?;
    let format = determine_format(config, std::env::var(LOG_FORMAT_ENV).ok().as_deref())?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    let installed = match format {
        LogFormat::Json => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| LoggingError::Install(e.to_string()))
}

/// Build the filter: PROPSTORE_LOG wins outright, otherwise the config level plus
/// module directives from config and from `env_modules`.
fn build_env_filter(
    config: Option<&LoggingConfig>,
    env_modules: Option<&str>,
) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            filter = filter.add_directive(parse_directive(module, module_level)?);
        }
    }

    if let Some(modules_str) = env_modules {
        for module_spec in modules_str.split(',') {
            if let Some((module, module_level)) = module_spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module.trim(), module_level.trim())?);
            }
        }
    }

    Ok(filter)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, LoggingError> {
    let directive = format!("{}={}", module, level);
    directive
        .parse()
        .map_err(|e: tracing_subscriber::filter::ParseError| LoggingError::InvalidDirective {
            directive,
            reason: e.to_string(),
        })
}

/// Determine output format; a valid env override wins over config
fn determine_format(
    config: Option<&LoggingConfig>,
    env_format: Option<&str>,
) -> Result<LogFormat, LoggingError> {
    if let Some(format) = env_format.and_then(parse_format) {
        return Ok(format);
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    parse_format(format).ok_or_else(|| LoggingError::InvalidFormat(format.to_string()))
}

fn parse_format(format: &str) -> Option<LogFormat> {
    match format {
        "text" => Some(LogFormat::Text),
        "json" => Some(LogFormat::Json),
        _ => None,
    }
}
