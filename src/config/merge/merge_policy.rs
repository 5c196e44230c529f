//! Merge rules: built-in defaults every resolution starts from.

use crate::config::{BodyKind, Config, RequestBody, RequestConfig, RunnerConfig};
use indexmap::IndexMap;
use std::time::Duration;

/// Build the built-in default configuration. Returns a fresh value on each call.
pub fn default_config() -> Config {
    Config {
        request: RequestConfig {
            method: "GET".to_string(),
            url: String::new(),
            header: IndexMap::new(),
            body: RequestBody {
                kind: BodyKind::Raw,
                content: String::new(),
            },
        },
        runner: RunnerConfig {
            requests: 100,
            concurrency: 10,
            interval: Duration::ZERO,
            request_timeout: Duration::from_secs(5),
            global_timeout: Duration::from_secs(30),
        },
        tests: Vec::new(),
    }
}
