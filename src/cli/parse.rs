//! CLI parse: clap types for benchttp. No behavior; definitions only.

use crate::config::ConfigField;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Benchttp CLI - HTTP benchmarks driven by layered configuration
#[derive(Parser, Debug)]
#[command(name = "benchttp")]
#[command(about = "Resolve benchttp run configurations from defaults, config files and flags")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and print the effective run configuration
    #[command(args_override_self = true)]
    Config {
        #[command(flatten)]
        run: RunArgs,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

/// Arguments shared by every command that resolves a run configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Config file path (default: first of .benchttp.yml, .benchttp.yaml,
    /// .benchttp.json, .benchttp.toml in the working directory)
    #[arg(long = "configFile", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Print nothing; only the exit status reports the outcome
    #[arg(long)]
    pub silent: bool,

    #[command(flatten)]
    pub flags: ConfigFlags,
}

/// Config field flags. Values are kept raw and decoded by the binder, so
/// that flags and config files share one syntax. Count flags keep every
/// occurrence so that each one is checked; the last one wins.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFlags {
    #[arg(long, value_name = "METHOD", help = ConfigField::Method.usage())]
    pub method: Option<String>,

    #[arg(long, value_name = "URL", help = ConfigField::Url.usage())]
    pub url: Option<String>,

    #[arg(long, value_name = "KEY:VALUE", help = ConfigField::Header.usage())]
    pub header: Vec<String>,

    #[arg(long, value_name = "TYPE:CONTENT", help = ConfigField::Body.usage())]
    pub body: Option<String>,

    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = ConfigField::Requests.usage()
    )]
    pub requests: Vec<String>,

    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = ConfigField::Concurrency.usage()
    )]
    pub concurrency: Vec<String>,

    #[arg(long, value_name = "DURATION", help = ConfigField::Interval.usage())]
    pub interval: Option<String>,

    #[arg(
        long = "requestTimeout",
        value_name = "DURATION",
        help = ConfigField::RequestTimeout.usage()
    )]
    pub request_timeout: Option<String>,

    #[arg(
        long = "globalTimeout",
        value_name = "DURATION",
        help = ConfigField::GlobalTimeout.usage()
    )]
    pub global_timeout: Option<String>,
}
