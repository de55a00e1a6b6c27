use super::form;
use crate::{
    libs::{messages::Message, records::Records, student::title_case},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Full name to look for; matched exactly after title-casing
    name: Option<String>,
}

pub fn cmd(records: &Records, args: SearchArgs) -> Result<()> {
    let found = run(records, args)?;
    if !found.is_empty() {
        form::show_table(records, &found)?;
    }
    Ok(())
}

/// Ids of the students matching the searched name. Empty when none match.
pub fn run(records: &Records, args: SearchArgs) -> Result<HashSet<i64>> {
    let name = match args.name {
        Some(name) => name,
        None => form::prompt_text(Message::PromptSearchName, "")?,
    };
    let name = title_case(name.trim());

    let students = records.search(&name)?;
    if students.is_empty() {
        msg_warning!(Message::StudentNotFound(name));
        return Ok(HashSet::new());
    }

    msg_success!(Message::StudentsFound(students.len(), name));
    Ok(students.iter().map(|s| s.id).collect())
}
