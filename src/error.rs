//! Error types for benchttp configuration resolution and run hand-off.

use std::path::PathBuf;
use thiserror::Error;

/// A single invalid field, reported by schema decoding or validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Why a configuration document could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("{}", join_violations(.0))]
    Schema(Vec<Violation>),
}

/// Configuration resolution errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}{}", .path.display(), extended_by_suffix(.extended_by))]
    FileNotFound {
        path: PathBuf,
        /// File whose `extends` key pointed here; `None` for the requested root file.
        extended_by: Option<PathBuf>,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "unsupported config format{}: {extension:?} (expected .yml, .yaml, .json or .toml)",
        path_suffix(.path)
    )]
    UnsupportedFormat {
        /// File with the unsupported extension; `None` when only an extension was checked.
        path: Option<PathBuf>,
        extension: String,
    },

    #[error("failed to decode config file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("circular extends: {} is already part of the chain", .path.display())]
    CircularExtends { path: PathBuf },

    #[error("invalid value for flag --{flag}: {reason}")]
    InvalidFlagValue { flag: String, reason: String },

    #[error("invalid configuration: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    #[error("internal error: config chain resolved to no files")]
    EmptyChain,
}

fn extended_by_suffix(extended_by: &Option<PathBuf>) -> String {
    match extended_by {
        Some(parent) => format!(" (extended by {})", parent.display()),
        None => String::new(),
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" for {}", path.display()),
        None => String::new(),
    }
}

impl ConfigError {
    /// True only for a missing root config file, which callers may treat as
    /// "no config file".
    pub fn is_missing_root(&self) -> bool {
        matches!(
            self,
            ConfigError::FileNotFound {
                extended_by: None,
                ..
            }
        )
    }

    pub fn invalid_flag(flag: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidFlagValue {
            flag: flag.into(),
            reason: reason.into(),
        }
    }
}

/// Failure reported by the benchmark engine.
#[derive(Debug, Error)]
#[error("engine error: {0}")]
pub struct EngineError(pub String);

/// Errors of a full run: resolution, engine execution, test outcome.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("test suite failed: {failed} of {total} tests did not pass")]
    TestSuiteFailed { failed: usize, total: usize },
}

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}
