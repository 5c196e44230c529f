//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ConfigError;

/// Map a resolution error to the single line printed on stderr.
pub fn map_error(e: &ConfigError) -> String {
    e.to_string().replace('\n', " ")
}
