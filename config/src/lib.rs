//! `.sdlc.json` project configuration.

pub mod error;
mod types;

pub use error::{ConfigError, Result, ResultExt};
pub use types::{
    Config, DEFAULT_LANGUAGE, DEFAULT_TRACKER, KNOWN_KEYS, RawConfig, Resolved, ValueSource,
    View, validate_field,
};

use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".sdlc.json";

/// What [`update_value`] did to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileUpdate {
    Written(PathBuf),
    Deleted(PathBuf),
    Unchanged,
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Loads and validates `.sdlc.json`; `None` when the file does not exist.
pub fn load(root: &Path) -> Result<Option<RawConfig>> {
    let path = config_path(root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::from(e).with_context(format!("Reading {}", path.display()))),
    };

    let value: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
        file: CONFIG_FILE_NAME.to_string(),
        message: e.to_string(),
    })?;

    RawConfig::from_value(value).map(Some)
}

/// Loads the file and merges it over the defaults.
pub fn resolve(root: &Path) -> Result<Config> {
    Ok(Config::merge(load(root)?))
}

/// Sets `key` to `value`, or removes it when `value` is `None`.
///
/// Removing the last key deletes the file.
pub fn update_value(root: &Path, key: &str, value: Option<&str>) -> Result<FileUpdate> {
    let path = config_path(root);
    let existing = load(root)?;

    let mut raw = match (existing, value) {
        (None, None) => return Ok(FileUpdate::Unchanged),
        (existing, _) => existing.unwrap_or_default(),
    };

    match value {
        Some(value) => raw.set(key, Value::String(value.to_string()))?,
        None => {
            if !raw.remove(key) {
                return Ok(FileUpdate::Unchanged);
            }
        }
    }

    if raw.is_empty() {
        debug!(path = %path.display(), "removing empty config file");
        fs::remove_file(&path)?;
        return Ok(FileUpdate::Deleted(path));
    }

    let rendered = serde_json::to_string_pretty(&raw.to_value()).map_err(|e| {
        ConfigError::InvalidJson {
            file: CONFIG_FILE_NAME.to_string(),
            message: e.to_string(),
        }
    })?;
    debug!(path = %path.display(), key, "writing config file");
    fs::write(&path, format!("{rendered}\n"))?;
    Ok(FileUpdate::Written(path))
}
