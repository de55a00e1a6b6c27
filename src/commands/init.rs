//! Configuration initialization command.
//!
//! Runs the setup wizard for the database location, logging and phone number
//! settings, or removes the configuration file with `--delete`.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration, returning to defaults
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::info!(path = %path.display(), "configuration removed");
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
