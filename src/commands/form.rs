//! Prompt-driven forms shared by the subcommands and the interactive menu.

use crate::{
    libs::{
        messages::Message,
        records::{Records, SaveOutcome},
        student::{course_index, Student, StudentForm, COURSES},
        validator::{Field, ValidationReport},
        view::View,
    },
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::collections::HashSet;

pub const ALL_FIELDS: [Field; 3] = [Field::Name, Field::Course, Field::Mobile];

/// Field values passed on the command line instead of prompted.
#[derive(Debug, Default, Args)]
pub struct StudentFields {
    /// First and last name, e.g. "John Doe"
    #[arg(short, long)]
    pub name: Option<String>,
    /// One of the courses listed by `students courses`
    #[arg(short, long)]
    pub course: Option<String>,
    /// 8-digit phone number
    #[arg(short, long)]
    pub mobile: Option<String>,
}

impl StudentFields {
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.course.is_some() && self.mobile.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.course.is_none() && self.mobile.is_none()
    }

    /// Fields that were not given and still need a prompt.
    pub fn missing(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(Field::Name);
        }
        if self.course.is_none() {
            missing.push(Field::Course);
        }
        if self.mobile.is_none() {
            missing.push(Field::Mobile);
        }
        missing
    }

    /// `base` with every given field replaced.
    pub fn apply_to(&self, base: &StudentForm) -> StudentForm {
        StudentForm {
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            course: self.course.clone().unwrap_or_else(|| base.course.clone()),
            mobile: self.mobile.clone().unwrap_or_else(|| base.mobile.clone()),
        }
    }
}

/// Prompts for `pending` fields and submits until the outcome is not `Invalid`.
///
/// After a rejected submit every violated rule is shown and prompting resumes
/// at the first offending field.
pub fn submit(
    mut form: StudentForm,
    pending: &[Field],
    mut save: impl FnMut(&StudentForm) -> Result<SaveOutcome>,
) -> Result<SaveOutcome> {
    let mut pending = pending.to_vec();
    loop {
        for field in &pending {
            prompt_field(&mut form, *field)?;
        }

        match save(&form)? {
            SaveOutcome::Invalid(report) => {
                show_report(&report);
                let Some(first) = report.first_invalid_field() else {
                    return Ok(SaveOutcome::Invalid(report));
                };
                msg_info!(Message::ValidationFailedFor(first.to_string()));
                pending = fields_from(first);
            }
            outcome => return Ok(outcome),
        }
    }
}

/// `first` and every field after it, in form order.
pub fn fields_from(first: Field) -> Vec<Field> {
    ALL_FIELDS.iter().copied().filter(|f| *f >= first).collect()
}

pub fn prompt_field(form: &mut StudentForm, field: Field) -> Result<()> {
    match field {
        Field::Name => form.name = prompt_text(Message::PromptStudentName, &form.name)?,
        Field::Course => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCourse.to_string())
                .items(&COURSES)
                .default(course_index(&form.course))
                .interact()?;
            form.course = COURSES[selection].to_string();
        }
        Field::Mobile => form.mobile = prompt_text(Message::PromptPhoneNumber, &form.mobile)?,
    }
    Ok(())
}

pub fn prompt_text(prompt: Message, current: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

pub fn show_report(report: &ValidationReport) {
    msg_error!(Message::ValidationFailed);
    msg_print!(report.message());
}

/// Lets the user pick a row; `None` when the table is empty.
pub fn pick_student(records: &Records, prompt: Message) -> Result<Option<Student>> {
    let students = records.list()?;
    if students.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(None);
    }

    let items: Vec<String> = students.iter().map(|s| s.to_string()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(students.into_iter().nth(selection))
}

pub fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Reloads and prints the whole table, highlighting `highlighted` rows.
pub fn show_table(records: &Records, highlighted: &HashSet<i64>) -> Result<()> {
    let students = records.list()?;
    if students.is_empty() {
        msg_info!(Message::NoStudentsFound);
    } else {
        View::students_highlighted(&students, highlighted);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_fields_in_form_order() {
        let fields = StudentFields {
            name: None,
            course: Some("Math".into()),
            mobile: None,
        };
        assert_eq!(fields.missing(), vec![Field::Name, Field::Mobile]);
        assert!(!fields.is_complete());
        assert!(!fields.is_empty());
    }

    #[test]
    fn fields_from_resumes_at_first_invalid_field() {
        assert_eq!(fields_from(Field::Name), ALL_FIELDS.to_vec());
        assert_eq!(fields_from(Field::Course), vec![Field::Course, Field::Mobile]);
        assert_eq!(fields_from(Field::Mobile), vec![Field::Mobile]);
    }

    #[test]
    fn apply_to_keeps_unset_fields() {
        let base = StudentForm::new("John Doe", "Math", "12345678");
        let fields = StudentFields {
            name: None,
            course: Some("Physics".into()),
            mobile: None,
        };
        assert_eq!(fields.apply_to(&base), StudentForm::new("John Doe", "Physics", "12345678"));
    }
}
