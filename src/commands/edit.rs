use super::form::{self, StudentFields, ALL_FIELDS};
use crate::{
    libs::{
        messages::Message,
        records::{Records, SaveOutcome},
        student::StudentForm,
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

#[derive(Debug, Default, Args)]
pub struct EditArgs {
    /// Id of the student; prompted from the list when omitted
    id: Option<i64>,
    #[command(flatten)]
    fields: StudentFields,
}

pub fn cmd(records: &Records, args: EditArgs) -> Result<()> {
    if let Some(id) = run(records, args)? {
        form::show_table(records, &HashSet::from([id]))?;
    }
    Ok(())
}

/// Edits one student; returns its id when the row was written.
///
/// Field flags skip the prompts. Submitting the stored values unchanged writes
/// nothing and reports it.
pub fn run(records: &Records, args: EditArgs) -> Result<Option<i64>> {
    let student = match args.id {
        Some(id) => records.get(id)?,
        None => match form::pick_student(records, Message::SelectStudentToEdit)? {
            Some(student) => student,
            None => return Ok(None),
        },
    };
    let current = StudentForm::from_student(&student);

    let outcome = if args.fields.is_empty() {
        form::submit(current, &ALL_FIELDS, |f| Ok(records.modify(student.id, f)?))?
    } else {
        records.modify(student.id, &args.fields.apply_to(&current))?
    };

    match outcome {
        SaveOutcome::Saved(student) => {
            msg_success!(Message::StudentUpdated { name: student.name, id: student.id });
            Ok(Some(student.id))
        }
        SaveOutcome::Unchanged(_) => {
            msg_info!(Message::NoModification);
            Ok(None)
        }
        SaveOutcome::Invalid(report) => {
            form::show_report(&report);
            msg_bail_anyhow!(Message::ValidationRejected)
        }
    }
}
