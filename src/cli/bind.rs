//! CLI bind: turns parsed config flags into a representation and resolves the
//! run configuration from them.

use crate::cli::parse::{ConfigFlags, RunArgs};
use crate::config::{
    find_default_config_file, BodyRepr, Config, ConfigField, ConfigResolver, Representation,
};
use crate::error::ConfigError;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

impl ConfigFlags {
    /// Write every supplied flag into `repr`. Absent flags leave it untouched.
    ///
    /// Repeated `--header` values accumulate in order under their key.
    pub fn bind(&self, repr: &mut Representation) -> Result<(), ConfigError> {
        if let Some(method) = &self.method {
            repr.request.method = Some(method.clone());
        }
        if let Some(url) = &self.url {
            repr.request.url = Some(url.clone());
        }
        for raw in &self.header {
            let (key, value) = parse_header(raw)?;
            repr.request
                .header
                .get_or_insert_with(IndexMap::new)
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }
        if let Some(body) = &self.body {
            repr.request.body = Some(parse_body(body)?);
        }
        if let Some(requests) = parse_counts(ConfigField::Requests, &self.requests)? {
            repr.runner.requests = Some(requests);
        }
        if let Some(concurrency) = parse_counts(ConfigField::Concurrency, &self.concurrency)? {
            repr.runner.concurrency = Some(concurrency);
        }
        if let Some(interval) = &self.interval {
            repr.runner.interval = Some(interval.clone());
        }
        if let Some(timeout) = &self.request_timeout {
            repr.runner.request_timeout = Some(timeout.clone());
        }
        if let Some(timeout) = &self.global_timeout {
            repr.runner.global_timeout = Some(timeout.clone());
        }
        Ok(())
    }

    /// Names of the config flags supplied on the command line, sorted.
    pub fn which_set(&self) -> BTreeSet<&'static str> {
        let supplied = [
            (ConfigField::Method, self.method.is_some()),
            (ConfigField::Url, self.url.is_some()),
            (ConfigField::Header, !self.header.is_empty()),
            (ConfigField::Body, self.body.is_some()),
            (ConfigField::Requests, !self.requests.is_empty()),
            (ConfigField::Concurrency, !self.concurrency.is_empty()),
            (ConfigField::Interval, self.interval.is_some()),
            (ConfigField::RequestTimeout, self.request_timeout.is_some()),
            (ConfigField::GlobalTimeout, self.global_timeout.is_some()),
        ];
        supplied
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(field, _)| field.name())
            .collect()
    }
}

fn parse_header(raw: &str) -> Result<(&str, &str), ConfigError> {
    raw.split_once(':').ok_or_else(|| {
        ConfigError::invalid_flag(
            ConfigField::Header.name(),
            format!("expect format \"<key>:<value>\", got {:?}", raw),
        )
    })
}

fn parse_body(raw: &str) -> Result<BodyRepr, ConfigError> {
    let format_error = || {
        ConfigError::invalid_flag(
            ConfigField::Body.name(),
            format!("expect format \"<type>:<content>\", got {:?}", raw),
        )
    };
    let (kind, content) = raw.split_once(':').ok_or_else(format_error)?;
    if content.is_empty() {
        return Err(format_error());
    }
    match kind {
        "raw" => Ok(BodyRepr {
            kind: kind.to_string(),
            content: content.to_string(),
        }),
        other => Err(ConfigError::invalid_flag(
            ConfigField::Body.name(),
            format!("unsupported type: {} (only \"raw\" accepted)", other),
        )),
    }
}

/// Parse every occurrence of a count flag; the last one is kept.
fn parse_counts(field: ConfigField, occurrences: &[String]) -> Result<Option<i64>, ConfigError> {
    let mut last = None;
    for raw in occurrences {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::invalid_flag(field.name(), format!("{:?}: {}", raw, e)))?;
        last = Some(value);
    }
    Ok(last)
}

impl RunArgs {
    /// Config file to resolve: `--configFile`, else the first default file
    /// found in `cwd`.
    pub fn config_file_in(&self, cwd: &Path) -> Option<PathBuf> {
        self.config_file
            .clone()
            .or_else(|| find_default_config_file(cwd))
    }

    /// Resolve the run configuration: defaults, config file chain, then flags.
    pub fn resolve(&self, cwd: &Path) -> Result<Config, ConfigError> {
        let mut cli = Representation::default();
        self.flags.bind(&mut cli)?;
        debug!(flags = ?self.flags.which_set(), "config flags supplied");

        let config_file = self.config_file_in(cwd);
        ConfigResolver::resolve(config_file.as_deref(), &cli)
    }
}
