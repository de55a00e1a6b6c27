use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "students.db";

/// One open SQLite connection. Dropping it closes the connection.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> rusqlite::Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    /// Database file the current configuration points at.
    pub fn default_path() -> Result<PathBuf> {
        let storage = DataStorage::new();
        let config = Config::read_from(&storage)?;
        config.database_path(&storage)
    }
}
