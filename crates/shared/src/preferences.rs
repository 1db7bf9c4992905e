//! Client-side preferences (session token and theme).
//!
//! A tiny key-value store persisted as JSON. It is loaded once at startup and
//! written back on every change, so the file always reflects the last setter.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading or writing the preferences file.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// The file exists but could not be read or written.
    #[error("failed to access preferences file '{path}': {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid preferences JSON.
    #[error("invalid preferences file '{path}': {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Persisted preference values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Bearer token of the signed-in user, if any.
    #[serde(default)]
    pub token: Option<String>,
    /// Whether the dark theme is selected.
    #[serde(default)]
    pub dark_mode: bool,
}

/// File-backed preferences with save-on-change semantics.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PreferencesStore {
    /// Loads preferences from `path`; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let prefs = match std::fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| PreferencesError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Preferences::default(),
            Err(source) => return Err(PreferencesError::Io { path, source }),
        };

        Ok(Self { path, prefs })
    }

    /// Current values.
    #[must_use]
    pub const fn get(&self) -> &Preferences {
        &self.prefs
    }

    /// Stored bearer token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.prefs.token.as_deref()
    }

    /// Whether dark mode is on.
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    /// Stores (or clears, with `None`) the bearer token and saves.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn set_token(&mut self, token: Option<String>) -> Result<(), PreferencesError> {
        self.prefs.token = token;
        self.save()
    }

    /// Switches the theme and saves.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), PreferencesError> {
        self.prefs.dark_mode = dark_mode;
        self.save()
    }

    fn save(&self) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| PreferencesError::Io {
                path: self.path.clone(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.prefs).map_err(|source| {
            PreferencesError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        std::fs::write(&self.path, json).map_err(|source| PreferencesError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::load(dir.path().join("prefs.json")).unwrap();

        assert_eq!(store.get(), &Preferences::default());
        assert!(store.token().is_none());
        assert!(!store.dark_mode());
    }

    #[test]
    fn changes_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = PreferencesStore::load(&path).unwrap();
        store.set_token(Some("abc.def.ghi".to_string())).unwrap();
        store.set_dark_mode(true).unwrap();

        let reloaded = PreferencesStore::load(&path).unwrap();
        assert_eq!(reloaded.token(), Some("abc.def.ghi"));
        assert!(reloaded.dark_mode());
    }

    #[test]
    fn clearing_token_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = PreferencesStore::load(&path).unwrap();
        store.set_token(Some("t".to_string())).unwrap();
        store.set_token(None).unwrap();

        assert!(PreferencesStore::load(&path).unwrap().token().is_none());
    }

    #[test]
    fn file_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = PreferencesStore::load(&path).unwrap();
        store.set_dark_mode(true).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"darkMode\": true"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            PreferencesStore::load(&path),
            Err(PreferencesError::Parse { .. })
        ));
    }
}
