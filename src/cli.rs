//! CLI domain: parse, bind, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to the config resolver.

mod bind;
mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ConfigFlags, RunArgs};
pub use presentation::{format_config_json, format_config_text};
pub use route::RunContext;
