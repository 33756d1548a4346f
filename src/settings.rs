//! User settings and the key-value store they are persisted in.
//!
//! The viewer only remembers the last working directory. The store is a
//! narrow trait so the viewer never knows where values end up; the
//! production store is a TOML file in the platform config directory.

use crate::config::{SETTINGS_APPLICATION, SETTINGS_ORGANIZATION};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the last working directory is stored.
pub const WORK_DIR_KEY: &str = "workDir";

/// Narrow key-value interface the viewer persists its settings through.
pub trait SettingsStore {
    fn get(&self, key: &str, default: &str) -> String;
    fn set(&mut self, key: &str, value: &str);
    /// Writes pending values to durable storage.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Settings owned by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub last_working_directory: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_working_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

impl Settings {
    pub fn load(store: &dyn SettingsStore) -> Self {
        let default = Self::default();
        let work_dir = store.get(
            WORK_DIR_KEY,
            &default.last_working_directory.to_string_lossy(),
        );
        Self {
            last_working_directory: PathBuf::from(work_dir),
        }
    }

    pub fn save(&self, store: &mut dyn SettingsStore) {
        store.set(WORK_DIR_KEY, &self.last_working_directory.to_string_lossy());
    }
}

/// In-memory store, used when no config directory is available and in tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// On-disk layout of the settings file.
///
/// Keys this version does not know about are kept in `other` and written
/// back unchanged.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(rename = "workDir", default, skip_serializing_if = "Option::is_none")]
    work_dir: Option<String>,
    #[serde(flatten)]
    other: BTreeMap<String, String>,
}

impl SettingsFile {
    fn get(&self, key: &str) -> Option<&String> {
        match key {
            WORK_DIR_KEY => self.work_dir.as_ref(),
            _ => self.other.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            WORK_DIR_KEY => self.work_dir = Some(value.to_string()),
            _ => {
                self.other.insert(key.to_string(), value.to_string());
            }
        }
    }
}

/// Store persisted as a TOML file.
#[derive(Debug)]
pub struct TomlSettingsStore {
    path: PathBuf,
    file: SettingsFile,
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(SETTINGS_ORGANIZATION);
        path.push(format!("{SETTINGS_APPLICATION}.toml"));
        path
    })
}

impl TomlSettingsStore {
    /// Opens the store in the platform config directory.
    pub fn open_default() -> Option<Self> {
        default_settings_path().map(Self::open)
    }

    /// Opens the store at `path`. A missing or unreadable file yields an
    /// empty store so callers fall back to defaults.
    pub fn open(path: PathBuf) -> Self {
        let file = match load_file(&path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                SettingsFile::default()
            }
        };
        Self { path, file }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load_file(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = fs::read_to_string(path).map_err(|e| AppError::Settings(e.to_string()))?;
    Ok(toml::from_str(&content)?)
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str, default: &str) -> String {
        self.file
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.file.set(key, value);
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::Settings(e.to_string()))?;
        }
        let content = toml::to_string_pretty(&self.file)?;
        fs::write(&self.path, content).map_err(|e| AppError::Settings(e.to_string()))?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
