//! Platform-specific application data directory.
//!
//! The database, configuration file and log files all live under one base
//! directory chosen per operating system:
//!
//! - **Windows**: `%LOCALAPPDATA%\<vendor>\<app>`
//! - **macOS**: `$HOME/Library/Application Support/<vendor>/<app>`
//! - **Other**: `$HOME/.local/share/<vendor>/<app>`
//!
//! `STUDENTS_DATA_DIR` replaces the whole base path when set.

use crate::libs::error::{StoreError, StoreResult};
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const VENDOR_NAME: &str = APP_METADATA_OWNER;
pub const APP_NAME: &str = APP_METADATA_NAME;
pub const APP_VERSION: &str = APP_METADATA_VERSION;
pub const DATA_DIR_ENV: &str = "STUDENTS_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        if let Ok(dir) = var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Self::with_base(dir.trim());
            }
        }

        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Uses `base_path` as-is, without vendor/app suffixes.
    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolves `file_name` inside the base directory, creating the directory first.
    pub fn get_path(&self, file_name: &str) -> StoreResult<PathBuf> {
        self.ensure_dir(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }

    /// Subdirectory of the base directory, created when missing.
    pub fn get_dir(&self, dir_name: &str) -> StoreResult<PathBuf> {
        let dir = self.base_path.join(dir_name);
        self.ensure_dir(&dir)?;
        Ok(dir)
    }

    /// Creates `dir` and its parents when missing.
    pub fn ensure_dir(&self, dir: &Path) -> StoreResult<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| StoreError::DataDir { path: dir.to_path_buf(), source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_dir_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::with_base(temp_dir.path().join("base"));

        let dir = storage.get_dir("logs").unwrap();

        assert!(dir.is_dir());
        assert_eq!(dir, temp_dir.path().join("base").join("logs"));
    }
}
