use super::form;
use crate::{
    libs::{messages::Message, records::Records},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

#[derive(Debug, Default, Args)]
pub struct DeleteArgs {
    /// Id of the student; prompted from the list when omitted
    id: Option<i64>,
    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(records: &Records, args: DeleteArgs) -> Result<()> {
    if run(records, args)? {
        form::show_table(records, &HashSet::new())?;
    }
    Ok(())
}

/// Deletes one student after confirmation; `true` when a row was removed.
pub fn run(records: &Records, args: DeleteArgs) -> Result<bool> {
    let student = match args.id {
        Some(id) => records.get(id)?,
        None => match form::pick_student(records, Message::SelectStudentToDelete)? {
            Some(student) => student,
            None => return Ok(false),
        },
    };

    if !args.yes && !form::confirm(Message::ConfirmDeleteStudent(student.to_string()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(false);
    }

    records.remove(student.id)?;
    msg_success!(Message::StudentDeleted(student.id));
    Ok(true)
}
