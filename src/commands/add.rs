use super::form::{self, StudentFields};
use crate::{
    libs::{
        messages::Message,
        records::{Records, SaveOutcome},
        student::StudentForm,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

#[derive(Debug, Default, Args)]
pub struct AddArgs {
    #[command(flatten)]
    fields: StudentFields,
}

pub fn cmd(records: &Records, args: AddArgs) -> Result<()> {
    if let Some(id) = run(records, args)? {
        form::show_table(records, &HashSet::from([id]))?;
    }
    Ok(())
}

/// Registers a student and returns the new id.
///
/// With every field given on the command line nothing is prompted and invalid
/// input is an error; otherwise the missing fields are asked for.
pub fn run(records: &Records, args: AddArgs) -> Result<Option<i64>> {
    let initial = args.fields.apply_to(&StudentForm::default());

    let outcome = if args.fields.is_complete() {
        records.register(&initial)?
    } else {
        form::submit(initial, &args.fields.missing(), |f| Ok(records.register(f)?))?
    };

    match outcome {
        SaveOutcome::Saved(student) => {
            msg_success!(Message::StudentAdded { name: student.name, id: student.id });
            Ok(Some(student.id))
        }
        SaveOutcome::Invalid(report) => {
            form::show_report(&report);
            msg_bail_anyhow!(Message::ValidationRejected)
        }
        SaveOutcome::Unchanged(_) => Ok(None),
    }
}
