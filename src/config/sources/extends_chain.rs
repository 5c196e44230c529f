//! Extends chain: a config file and every ancestor reached through `extends`.

use crate::config::{Format, Representation};
use crate::error::ConfigError;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// One loaded file of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    pub path: PathBuf,
    pub representation: Representation,
}

/// Load `path` and its ancestors, ordered leaf to root.
///
/// The first entry is the requested file, the last one declares no `extends`.
/// A file reached twice (including a file extending itself) fails with
/// [`ConfigError::CircularExtends`].
pub fn resolve_chain(path: &Path) -> Result<Vec<ChainEntry>, ConfigError> {
    let mut chain = Vec::new();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut current = normalize(path);
    let mut extended_by: Option<PathBuf> = None;

    loop {
        if !visited.insert(current.clone()) {
            return Err(ConfigError::CircularExtends { path: current });
        }

        let representation = load_file(&current, extended_by.as_deref())?;
        let parent = representation
            .extends
            .as_deref()
            .map(|extends| normalize(&directory_of(&current).join(extends)));

        debug!(
            path = %current.display(),
            extends = ?representation.extends,
            "loaded config file"
        );
        chain.push(ChainEntry {
            path: current.clone(),
            representation,
        });

        match parent {
            None => return Ok(chain),
            Some(parent) => {
                extended_by = Some(current);
                current = parent;
            }
        }
    }
}

fn load_file(path: &Path, extended_by: Option<&Path>) -> Result<Representation, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
            extended_by: extended_by.map(Path::to_path_buf),
        },
        _ => ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Format::from_path(path)?
        .decode(&bytes)
        .map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

fn directory_of(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Lexically clean a path: drop `.` components and fold `dir/..` pairs.
/// The filesystem is not consulted, so symlinks are not resolved.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
