//! File logging bootstrap.
//!
//! Events are formatted by a `tracing-subscriber` fmt layer and written
//! through a `flexi_logger` file writer under `<data dir>/logs/`. The writer
//! rotates while the process runs: once the current file passes
//! `max_file_size` bytes it is renamed to a numbered backup, and only the
//! newest `max_files` backups are kept.
//!
//! The level comes from the configuration unless `RUST_LOG` is set. In debug
//! mode (see [`is_debug_mode`](crate::libs::messages::macros::is_debug_mode))
//! a second layer mirrors events to stderr.

use crate::libs::config::LoggingConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::macros::is_debug_mode;
use anyhow::{Context, Result};
use flexi_logger::writers::{ArcFileLogWriter, FileLogWriter, FileLogWriterHandle};
use flexi_logger::{Cleanup, Criterion, FileSpec, Naming};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_DIR_NAME: &str = "logs";
pub const LOG_FILE_BASENAME: &str = "app";
pub const LOG_FILE_SUFFIX: &str = "log";

/// Keeps the file writer alive. Dropping it flushes and closes the log file.
pub struct LogGuard {
    dir: PathBuf,
    _handle: FileLogWriterHandle,
}

impl LogGuard {
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Installs the global subscriber. Hold the returned guard until exit.
pub fn init(config: &LoggingConfig, storage: &DataStorage) -> Result<LogGuard> {
    let dir = log_dir(storage)?;
    let (writer, handle) = file_writer(config, &dir)?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.level.trim()))?;

    let file_layer = fmt::layer()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = is_debug_mode().then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("a global logger is already installed")?;

    tracing::info!(
        version = crate::libs::data_storage::APP_VERSION,
        platform = std::env::consts::OS,
        log_dir = %dir.display(),
        max_file_size = config.max_file_size,
        max_files = config.max_files,
        "logging initialized"
    );

    Ok(LogGuard { dir, _handle: handle })
}

/// `<data dir>/logs`, created when missing.
pub fn log_dir(storage: &DataStorage) -> Result<PathBuf> {
    Ok(storage.get_dir(LOG_DIR_NAME)?)
}

/// Size-rotating appender for `dir/app*.log`.
pub fn file_writer(config: &LoggingConfig, dir: &Path) -> Result<(ArcFileLogWriter, FileLogWriterHandle)> {
    FileLogWriter::builder(
        FileSpec::default()
            .directory(dir)
            .basename(LOG_FILE_BASENAME)
            .suffix(LOG_FILE_SUFFIX)
            .suppress_timestamp(),
    )
    .rotate(
        Criterion::Size(config.max_file_size),
        Naming::Numbers,
        Cleanup::KeepLogFiles(config.max_files),
    )
    .append()
    .try_build_with_handle()
    .with_context(|| format!("cannot open log files in {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    fn log_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == LOG_FILE_SUFFIX))
            .collect()
    }

    #[test]
    fn writer_rotates_once_size_is_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            max_file_size: 200,
            max_files: 3,
        };

        let (mut writer, handle) = file_writer(&config, dir.path()).unwrap();
        for n in 0..50 {
            writeln!(writer, "line {} of the rotation check", n).unwrap();
        }
        writer.flush().unwrap();
        drop(handle);

        let files = log_files(dir.path());
        assert!(files.len() > 1, "expected backups, found {:?}", files);
        for file in &files {
            assert!(fs::metadata(file).unwrap().len() < 200 + 64, "{} outgrew the limit", file.display());
        }
    }

    #[test]
    fn small_output_stays_in_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let (mut writer, handle) = file_writer(&LoggingConfig::default(), dir.path()).unwrap();

        writeln!(writer, "hello").unwrap();
        writer.flush().unwrap();
        drop(handle);

        assert_eq!(log_files(dir.path()).len(), 1);
    }

    #[test]
    fn log_dir_is_created_under_base() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::with_base(dir.path().join("data"));

        let logs = log_dir(&storage).unwrap();

        assert_eq!(logs, dir.path().join("data").join(LOG_DIR_NAME));
        assert!(logs.is_dir());
    }
}
