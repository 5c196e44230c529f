//! Config file sources: the extends chain starting at a file, and discovery of
//! the default config file.

mod default_file;
mod extends_chain;

pub use default_file::{find_default_config_file, DEFAULT_CONFIG_FILES};
pub use extends_chain::{resolve_chain, ChainEntry};
