//! Interactive main window: the table plus an action menu, in a loop.
//!
//! A failed action is logged and reported, then the loop carries on with a
//! freshly reloaded table.

use super::{add, delete, edit, form, search};
use crate::{
    libs::{messages::Message, records::Records},
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::collections::HashSet;
use std::io::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Search,
    Edit,
    Delete,
    ClearSelection,
    Quit,
}

const ACTIONS: [Action; 6] = [Action::Add, Action::Search, Action::Edit, Action::Delete, Action::ClearSelection, Action::Quit];

impl Action {
    fn label(self) -> Message {
        match self {
            Action::Add => Message::MenuAddStudent,
            Action::Search => Message::MenuSearch,
            Action::Edit => Message::MenuEditStudent,
            Action::Delete => Message::MenuDeleteStudent,
            Action::ClearSelection => Message::MenuClearSelection,
            Action::Quit => Message::MenuQuit,
        }
    }
}

pub fn cmd(records: &Records) -> Result<()> {
    let labels: Vec<String> = ACTIONS.iter().map(|a| a.label().to_string()).collect();
    let mut highlighted: HashSet<i64> = HashSet::new();

    loop {
        msg_print!(Message::StudentsHeader, true);
        if let Err(e) = form::show_table(records, &highlighted) {
            report_failure("load_table", &e);
        }

        let selection = match Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact()
        {
            Ok(selection) => selection,
            Err(e) => {
                let e = anyhow::Error::from(e);
                if is_cancelled(&e) {
                    msg_print!(Message::Goodbye);
                    return Ok(());
                }
                return Err(e);
            }
        };

        let action = ACTIONS[selection];
        let result = match action {
            Action::Add => add::run(records, add::AddArgs::default()).map(|id| {
                highlighted = id.into_iter().collect();
            }),
            Action::Search => search::run(records, search::SearchArgs::default()).map(|ids| highlighted = ids),
            Action::Edit => edit::run(records, edit::EditArgs::default()).map(|id| {
                highlighted = id.into_iter().collect();
            }),
            Action::Delete => delete::run(records, delete::DeleteArgs::default()).map(|_| highlighted.clear()),
            Action::ClearSelection => {
                highlighted.clear();
                msg_info!(Message::SelectionCleared);
                Ok(())
            }
            Action::Quit => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        };

        if let Err(e) = result {
            report_failure(&format!("{:?}", action), &e);
        }
    }
}

fn report_failure(action: &str, error: &anyhow::Error) {
    if is_cancelled(error) {
        msg_info!(Message::OperationCancelled);
        return;
    }
    tracing::error!(action, error = ?error, "menu action failed");
    msg_error!(Message::ActionFailed(format!("{:#}", error)));
}

/// Ctrl-C or Esc inside a prompt.
fn is_cancelled(error: &anyhow::Error) -> bool {
    if let Some(dialoguer::Error::IO(io)) = error.downcast_ref::<dialoguer::Error>() {
        return io.kind() == ErrorKind::Interrupted;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn interrupted_prompt_is_a_cancellation() {
        let interrupted = anyhow::Error::from(dialoguer::Error::IO(io::Error::from(ErrorKind::Interrupted)));
        assert!(is_cancelled(&interrupted));
    }

    #[test]
    fn other_failures_are_not_cancellations() {
        let broken_pipe = anyhow::Error::from(dialoguer::Error::IO(io::Error::from(ErrorKind::BrokenPipe)));
        assert!(!is_cancelled(&broken_pipe));
        assert!(!is_cancelled(&anyhow::anyhow!("database error")));
    }
}
