//! Configuration System
//!
//! Resolves the run configuration of a benchmark from three layers: built-in
//! defaults, an optional chain of config files linked by `extends`, and
//! command-line flags. The most specific layer wins field by field; fields a
//! layer leaves unset keep the value from the layer below.

use crate::error::Violation;
use indexmap::IndexMap;
use serde::Serialize;
use std::time::Duration;

pub mod duration;
mod facade;
mod field;
mod format;
mod merge;
mod representation;
mod sources;
mod testcase;

pub use facade::ConfigResolver;
pub use field::ConfigField;
pub use format::Format;
pub use merge::{default_config, fold_chain, ConfigLayer};
pub use representation::{BodyRepr, RawTarget, Representation, RequestRepr, RunnerRepr, TestCaseRepr};
pub use sources::{find_default_config_file, resolve_chain, ChainEntry, DEFAULT_CONFIG_FILES};
pub use testcase::{MetricsField, Predicate, TestCase, TestTarget};

/// Fully resolved configuration handed to the benchmark engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub request: RequestConfig,
    pub runner: RunnerConfig,
    pub tests: Vec<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestConfig {
    pub method: String,
    pub url: String,
    pub header: IndexMap<String, Vec<String>>,
    pub body: RequestBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub kind: BodyKind,
    pub content: String,
}

/// Body kinds; only literal content is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Raw,
}

impl BodyKind {
    pub fn parse(kind: &str) -> Result<Self, String> {
        match kind {
            "raw" => Ok(BodyKind::Raw),
            other => Err(format!("unsupported type: {} (only \"raw\" accepted)", other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BodyKind::Raw => "raw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
    /// Number of requests; `-1` runs until the global timeout.
    pub requests: i64,
    pub concurrency: i64,
    #[serde(serialize_with = "duration::serialize")]
    pub interval: Duration,
    #[serde(serialize_with = "duration::serialize")]
    pub request_timeout: Duration,
    #[serde(serialize_with = "duration::serialize")]
    pub global_timeout: Duration,
}

/// Request count meaning "no limit".
pub const UNLIMITED_REQUESTS: i64 = -1;

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    /// Check schema-level sanity, reporting every violation found.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut errors = Vec::new();

        if self.request.method.trim().is_empty() {
            errors.push(Violation::new(ConfigField::Method.name(), "missing"));
        }

        let url = self.request.url.trim();
        if url.is_empty() {
            errors.push(Violation::new(ConfigField::Url.name(), "missing"));
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(Violation::new(
                ConfigField::Url.name(),
                format!("{:?}: want an http or https url", url),
            ));
        }

        let requests = self.runner.requests;
        if requests != UNLIMITED_REQUESTS && requests < 1 {
            errors.push(Violation::new(
                ConfigField::Requests.name(),
                format!("want -1 or > 0, got {}", requests),
            ));
        }

        let concurrency = self.runner.concurrency;
        if concurrency < 1 {
            errors.push(Violation::new(
                ConfigField::Concurrency.name(),
                format!("want > 0, got {}", concurrency),
            ));
        } else if requests > 0 && concurrency > requests {
            errors.push(Violation::new(
                ConfigField::Concurrency.name(),
                format!("want <= requests ({}), got {}", requests, concurrency),
            ));
        }

        if self.runner.request_timeout.is_zero() {
            errors.push(Violation::new(ConfigField::RequestTimeout.name(), "want > 0"));
        }
        if self.runner.global_timeout.is_zero() {
            errors.push(Violation::new(ConfigField::GlobalTimeout.name(), "want > 0"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
