//! Application configuration.
//!
//! Settings are kept as pretty-printed JSON in `config.json` inside the data
//! directory. Every section is optional; a missing file or section falls back
//! to defaults, so the application runs without any setup.
//!
//! ```json
//! {
//!   "database": { "path": "/home/me/students.db" },
//!   "logging": { "level": "info", "max_file_size": 10485760, "max_files": 5 },
//!   "phone": { "country_code": "+216" }
//! }
//! ```
//!
//! `students init` walks through the sections with interactive prompts.

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::libs::validator::Validator;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Database file. Relative paths resolve against the data directory.
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`. `RUST_LOG` overrides it.
    pub level: String,
    /// Size in bytes above which the current log file is rotated.
    pub max_file_size: u64,
    /// Number of rotated log files kept.
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            max_file_size: 10 * 1024 * 1024,
            max_files: 5,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PhoneConfig {
    /// Prefix accepted in front of the 8 digits, e.g. `+216`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Database file this configuration points at. Its directory is created
    /// when missing, since SQLite only creates the file itself.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        let path = match &self.database {
            Some(db) if db.path.is_absolute() => db.path.clone(),
            Some(db) => storage.base_path().join(&db.path),
            None => storage.base_path().join(DB_FILE_NAME),
        };
        if let Some(parent) = path.parent() {
            storage.ensure_dir(parent)?;
        }
        Ok(path)
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }

    pub fn validator(&self) -> Validator {
        Validator::with_country_code(self.phone.as_ref().and_then(|p| p.country_code.clone()))
    }

    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "database".to_string(),
                name: "Database".to_string(),
            },
            ConfigModule {
                key: "logging".to_string(),
                name: "Logging".to_string(),
            },
            ConfigModule {
                key: "phone".to_string(),
                name: "Phone numbers".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "database" => {
                    let storage = DataStorage::new();
                    let default = config.database_path(&storage)?;
                    msg_print!(Message::ConfigModuleDatabase);
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default.display().to_string())
                        .interact_text()?;
                    config.database = Some(DatabaseConfig { path: PathBuf::from(path) });
                }
                "logging" => {
                    let default = config.logging();
                    msg_print!(Message::ConfigModuleLogging);
                    config.logging = Some(LoggingConfig {
                        level: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLogLevel.to_string())
                            .default(default.level)
                            .validate_with(|input: &String| -> Result<(), String> {
                                match input.trim().to_ascii_lowercase().as_str() {
                                    "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
                                    _ => Err(Message::InvalidLogLevel(input.clone()).to_string()),
                                }
                            })
                            .interact_text()?,
                        max_file_size: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLogMaxFileSize.to_string())
                            .default(default.max_file_size)
                            .interact_text()?,
                        max_files: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLogMaxFiles.to_string())
                            .default(default.max_files)
                            .interact_text()?,
                    });
                }
                "phone" => {
                    let default = config.phone.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModulePhone);
                    let code: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptCountryCode.to_string())
                        .default(default.country_code.unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    let code = code.trim().to_string();
                    config.phone = Some(PhoneConfig {
                        country_code: if code.is_empty() { None } else { Some(code) },
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
