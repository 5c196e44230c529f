//! Configuration resolution: defaults, then the config file chain, then CLI
//! flags, then validation.

use crate::config::{default_config, fold_chain, resolve_chain, Config, Representation};
use crate::error::{ConfigError, Violation};
use std::path::Path;
use tracing::{debug, info};

/// Resolves the effective run configuration.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve from an optional config file and the CLI representation.
    ///
    /// A missing root config file is not an error: resolution continues from
    /// the defaults. Any other file error aborts. Validation reports every
    /// violation, including invalid CLI values.
    pub fn resolve(config_file: Option<&Path>, cli: &Representation) -> Result<Config, ConfigError> {
        let mut config = default_config();

        if let Some(path) = config_file {
            match resolve_chain(path) {
                Ok(chain) => {
                    debug!(files = chain.len(), "resolved config file chain");
                    config = fold_chain(config, &chain)?;
                }
                Err(err) if err.is_missing_root() => {
                    info!(
                        config_path = %path.display(),
                        "Config file not found, using defaults and flags only"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        let (cli_layer, mut violations): (_, Vec<Violation>) = cli.decode_partial();
        config = config.override_with(&cli_layer);

        if let Err(errors) = config.validate() {
            violations.extend(errors);
        }
        if !violations.is_empty() {
            return Err(ConfigError::Validation(violations));
        }

        info!(
            method = %config.request.method,
            url = %config.request.url,
            requests = config.runner.requests,
            concurrency = config.runner.concurrency,
            tests = config.tests.len(),
            "Resolved run configuration"
        );
        Ok(config)
    }
}
