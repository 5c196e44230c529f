//! Default config file source: `.benchttp.{yml,yaml,json,toml}` in a directory.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Candidate names, in lookup order.
pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
    ".benchttp.yml",
    ".benchttp.yaml",
    ".benchttp.json",
    ".benchttp.toml",
];

/// First default config file present in `dir`, if any.
pub fn find_default_config_file(dir: &Path) -> Option<PathBuf> {
    let found = DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => debug!(config_path = %path.display(), "Found default config file"),
        None => debug!(dir = %dir.display(), "No default config file found"),
    }
    found
}
