//! Key-value settings store.
//!
//! Process-wide preferences (currently the theme) go through the
//! [`SettingsPort`] trait so the session can run against an in-memory store
//! in tests and a JSON file in the application.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

pub trait SettingsPort {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Volatile store, also the fallback when no backing file is usable.
#[derive(Debug, Default, Clone)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsPort for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object of string values, rewritten on every `set`.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
    /// Why the file could not be read, if it exists but is unusable.
    unreadable: Option<String>,
}

impl JsonSettingsStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable one makes `get` fail until the next successful `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (values, unreadable) = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => (values, None),
                Err(e) => {
                    tracing::warn!("Settings store {} is corrupt: {}", path.display(), e);
                    (BTreeMap::new(), Some(e.to_string()))
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (BTreeMap::new(), None),
            Err(e) => {
                tracing::warn!("Cannot read settings store {}: {}", path.display(), e);
                (BTreeMap::new(), Some(e.to_string()))
            }
        };

        Self {
            path,
            values,
            unreadable,
        }
    }

    /// Store next to `AppSettings` in the per-user config directory.
    pub fn open_default() -> Self {
        let mut path = crate::app::domain::settings::config_dir();
        path.push("preferences.json");
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json).map_err(|e| AppError::Config(format!(
            "cannot write {}: {}",
            self.path.display(),
            e
        )))
    }
}

impl SettingsPort for JsonSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        if let Some(ref reason) = self.unreadable {
            return Err(AppError::Config(format!(
                "{} is unreadable: {}",
                self.path.display(),
                reason
            )));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write() {
            match previous {
                Some(v) => self.values.insert(key.to_string(), v),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        self.unreadable = None;
        Ok(())
    }
}
