//! CLI route: single route table and run context. Dispatches to the config
//! resolver and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_config_json, format_config_text};
use crate::error::ConfigError;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution.
pub struct RunContext {
    /// Directory searched for a default config file.
    working_dir: PathBuf,
}

impl RunContext {
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Execute a command and return the text to print on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ConfigError> {
        match command {
            Commands::Config { run, format } => {
                let config = run.resolve(&self.working_dir)?;
                info!(format = %format, silent = run.silent, "Printing resolved configuration");
                if run.silent {
                    return Ok(String::new());
                }
                Ok(match format.as_str() {
                    "json" => format_config_json(&config),
                    _ => format_config_text(&config),
                })
            }
        }
    }
}
