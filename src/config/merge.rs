//! Field-level override of a configuration by a layer, and folding of an
//! extends chain onto a base configuration.

mod merge_policy;

pub use merge_policy::default_config;

use crate::config::{ChainEntry, Config, RequestBody, TestCase};
use crate::error::{ConfigError, DecodeError};
use indexmap::IndexMap;
use std::time::Duration;
use tracing::debug;

/// Decoded partial configuration: `Some` fields override, `None` fields keep
/// the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub method: Option<String>,
    pub url: Option<String>,
    pub header: Option<IndexMap<String, Vec<String>>>,
    pub body: Option<RequestBody>,
    pub requests: Option<i64>,
    pub concurrency: Option<i64>,
    pub interval: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub global_timeout: Option<Duration>,
    pub tests: Option<Vec<TestCase>>,
}

fn replace<T>(slot: &mut T, value: &Option<T>)
where
    T: Clone,
{
    if let Some(value) = value {
        *slot = value.clone();
    }
}

impl Config {
    /// Return `self` with every field set in `layer` replaced wholesale.
    ///
    /// Header maps and test lists are replaced as a whole, never merged per
    /// key. Overriding with an empty layer returns `self` unchanged.
    pub fn override_with(mut self, layer: &ConfigLayer) -> Config {
        replace(&mut self.request.method, &layer.method);
        replace(&mut self.request.url, &layer.url);
        replace(&mut self.request.header, &layer.header);
        replace(&mut self.request.body, &layer.body);
        replace(&mut self.runner.requests, &layer.requests);
        replace(&mut self.runner.concurrency, &layer.concurrency);
        replace(&mut self.runner.interval, &layer.interval);
        replace(&mut self.runner.request_timeout, &layer.request_timeout);
        replace(&mut self.runner.global_timeout, &layer.global_timeout);
        replace(&mut self.tests, &layer.tests);
        self
    }
}

/// Apply a leaf-to-root chain onto `base`, root first, so that each file beats
/// its ancestors.
pub fn fold_chain(base: Config, chain: &[ChainEntry]) -> Result<Config, ConfigError> {
    if chain.is_empty() {
        return Err(ConfigError::EmptyChain);
    }

    chain.iter().rev().try_fold(base, |config, entry| {
        let layer = entry
            .representation
            .decode()
            .map_err(|violations| ConfigError::Decode {
                path: entry.path.clone(),
                source: DecodeError::Schema(violations),
            })?;
        debug!(path = %entry.path.display(), "applying config file layer");
        Ok(config.override_with(&layer))
    })
}
