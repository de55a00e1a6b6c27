//! Error types for the record store and its supporting layers.
//!
//! Store operations return [`StoreResult`]. Command handlers work with
//! `anyhow::Result` and convert through `?`, so a `StoreError` keeps its
//! message when it reaches the user.

use std::path::PathBuf;
use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Any failure reported by SQLite: open, prepare, execute or commit.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("no student with id {0}")]
    NotFound(i64),

    #[error("cannot create data directory {}: {source}", path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
