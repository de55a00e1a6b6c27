//! Form → validator → store flow shared by the subcommands and the menu.
//!
//! [`Records`] normalizes a [`StudentForm`], validates it, and only then
//! touches the store. Validation failures and no-op edits are ordinary
//! outcomes rather than errors, so callers can re-prompt or report them.

use crate::db::students::Students;
use crate::libs::error::{StoreError, StoreResult};
use crate::libs::student::{title_case, Student, StudentForm};
use crate::libs::validator::{ValidationReport, Validator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The row was written; holds it as stored.
    Saved(Student),
    /// Nothing was written; holds every violated rule.
    Invalid(ValidationReport),
    /// Edit matched the stored row, so nothing was written.
    Unchanged(Student),
}

pub struct Records {
    store: Students,
    validator: Validator,
}

impl Records {
    pub fn new(store: Students, validator: Validator) -> Self {
        Records { store, validator }
    }

    pub fn list(&self) -> StoreResult<Vec<Student>> {
        self.store.list_all()
    }

    pub fn get(&self, id: i64) -> StoreResult<Student> {
        self.store.find_by_id(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Students whose name equals `name` once title-cased.
    pub fn search(&self, name: &str) -> StoreResult<Vec<Student>> {
        self.store.find_by_name(&title_case(name.trim()))
    }

    pub fn register(&self, form: &StudentForm) -> StoreResult<SaveOutcome> {
        let form = form.normalized();
        let report = self.validator.validate(&form);
        if !report.is_ok() {
            return Ok(SaveOutcome::Invalid(report));
        }

        let id = self.store.insert(&form.name, &form.course, &form.mobile)?;
        Ok(SaveOutcome::Saved(Student {
            id,
            name: form.name,
            course: form.course,
            mobile: form.mobile,
        }))
    }

    pub fn modify(&self, id: i64, form: &StudentForm) -> StoreResult<SaveOutcome> {
        let current = self.get(id)?;
        let form = form.normalized();
        if form.matches(&current) {
            return Ok(SaveOutcome::Unchanged(current));
        }

        let report = self.validator.validate(&form);
        if !report.is_ok() {
            return Ok(SaveOutcome::Invalid(report));
        }

        self.store.update(id, &form.name, &form.course, &form.mobile)?;
        Ok(SaveOutcome::Saved(Student {
            id,
            name: form.name,
            course: form.course,
            mobile: form.mobile,
        }))
    }

    pub fn remove(&self, id: i64) -> StoreResult<()> {
        self.store.delete(id)
    }
}
