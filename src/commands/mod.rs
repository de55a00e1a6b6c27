pub mod add;
pub mod delete;
pub mod edit;
pub mod form;
pub mod init;
pub mod list;
pub mod menu;
pub mod search;

use crate::db::students::Students;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::records::Records;
use crate::libs::{logging, view::View};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Show all students")]
    List,
    #[command(about = "Register a new student")]
    Add(add::AddArgs),
    #[command(about = "Find students by full name")]
    Search(search::SearchArgs),
    #[command(about = "Edit a student's name, course or mobile")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a student")]
    Delete(delete::DeleteArgs),
    #[command(about = "List the courses a student can take")]
    Courses,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

/// Without a subcommand the interactive menu starts.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        let storage = DataStorage::new();
        let config = Config::read_from(&storage).unwrap_or_else(|e| {
            msg_warning!(Message::ConfigReadFailed(format!("{:#}", e)));
            Config::default()
        });
        let _log_guard = match logging::init(&config.logging(), &storage) {
            Ok(guard) => Some(guard),
            Err(e) => {
                msg_warning!(Message::LoggingInitFailed(format!("{:#}", e)));
                None
            }
        };

        let result = dispatch(cli.command, &config, &storage);

        if let Err(e) = &result {
            tracing::error!(error = ?e, "command failed");
        }
        result
    }
}

fn dispatch(command: Option<Commands>, config: &Config, storage: &DataStorage) -> Result<()> {
    match command {
        None => menu::cmd(&open_records(config, storage)?),
        Some(Commands::List) => list::cmd(&open_records(config, storage)?),
        Some(Commands::Add(args)) => add::cmd(&open_records(config, storage)?, args),
        Some(Commands::Search(args)) => search::cmd(&open_records(config, storage)?, args),
        Some(Commands::Edit(args)) => edit::cmd(&open_records(config, storage)?, args),
        Some(Commands::Delete(args)) => delete::cmd(&open_records(config, storage)?, args),
        Some(Commands::Courses) => {
            msg_print!(Message::CoursesHeader);
            View::courses();
            Ok(())
        }
        Some(Commands::Init(args)) => init::cmd(args),
    }
}

fn open_records(config: &Config, storage: &DataStorage) -> Result<Records> {
    let store = Students::open(&config.database_path(storage)?)?;
    tracing::info!(database = %store.path().display(), "student records opened");
    Ok(Records::new(store, config.validator()))
}
