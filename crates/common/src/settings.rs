//! Plugin settings: a flat `KEY=VALUE` file kept beside the plugin.

use log::error;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings filename, looked up in the plugin directory
pub const SETTINGS_FILE: &str = "settings.cfg";

/// Remote path of the synced file, e.g. `/notes.txt`
pub const KEY_FILENAME: &str = "FILENAME";

/// Bearer credential for the Dropbox API
pub const KEY_DROPBOX_TOKEN: &str = "DROPBOX_TOKEN";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed settings line {line}: {content:?} (expected KEY=VALUE)")]
    MalformedLine { line: usize, content: String },
    #[error("Missing setting: {0}")]
    MissingKey(String),
}

/// Key/value pairs read from the settings file. No type coercion is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a key that the caller cannot proceed without
    pub fn require(&self, key: &str) -> Result<&str, SettingsError> {
        self.get(key)
            .ok_or_else(|| SettingsError::MissingKey(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Get the path of the settings file inside `dir`
pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

/// Load settings from `dir`.
///
/// A missing settings file is not an error: it is logged and an empty
/// [`Settings`] is returned, so the first required key lookup fails instead.
pub fn load_settings(dir: &Path) -> Result<Settings, SettingsError> {
    let path = settings_path(dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error!("Settings file is missing: {}", path.display());
            return Ok(Settings::default());
        }
        Err(source) => return Err(SettingsError::Io { path, source }),
    };
    parse_settings(&text)
}

/// Parse settings text. Blank lines are skipped; every other line must
/// contain exactly one `=`.
pub fn parse_settings(text: &str) -> Result<Settings, SettingsError> {
    let mut values = BTreeMap::new();
    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }
        let (key, value) = match line.split_once('=') {
            Some((key, value)) if !value.contains('=') => (key, value),
            _ => {
                return Err(SettingsError::MalformedLine {
                    line: index + 1,
                    content: line.to_string(),
                })
            }
        };
        values.insert(key.to_string(), value.to_string());
    }
    Ok(Settings { values })
}
