//! Config file formats, selected by file extension.

use crate::config::Representation;
use crate::error::{ConfigError, DecodeError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Select a format from an extension, with or without the leading dot.
    pub fn from_extension(extension: &str) -> Result<Self, ConfigError> {
        let normalized = extension.trim_start_matches('.').to_lowercase();
        match normalized.as_str() {
            "yml" | "yaml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: None,
                extension: extension.to_string(),
            }),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&extension).map_err(|err| match err {
            ConfigError::UnsupportedFormat { extension, .. } => ConfigError::UnsupportedFormat {
                path: Some(path.to_path_buf()),
                extension,
            },
            other => other,
        })
    }

    /// Decode a whole document. Nothing is returned unless every field decodes.
    pub fn decode(self, bytes: &[u8]) -> Result<Representation, DecodeError> {
        let representation = match self {
            Format::Yaml => {
                // An empty YAML document sets nothing.
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Representation::default());
                }
                // A null document (`~`) sets nothing either.
                serde_yaml::from_slice::<Option<Representation>>(bytes)?.unwrap_or_default()
            }
            Format::Json => serde_json::from_slice(bytes)?,
            Format::Toml => toml::from_str(std::str::from_utf8(bytes)?)?,
        };
        Ok(representation)
    }
}
