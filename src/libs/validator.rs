//! Field format rules for student forms.
//!
//! Validation never stops at the first problem: a [`ValidationReport`]
//! carries one [`FieldError`] per violated rule, in form order, so the caller
//! can show them together and move the cursor to the first bad field.

use crate::libs::student::{StudentForm, COURSES, COURSE_PLACEHOLDER};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Two alphabetic tokens separated by exactly one space, e.g. `John Doe`.
pub const NAME_PATTERN: &str = r"^[a-zA-Z]+ [a-zA-Z]+$";
/// Exactly eight digits.
pub const PHONE_NUMBER_PATTERN: &str = r"^\d{8}$";

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"))
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(PHONE_NUMBER_PATTERN).expect("phone pattern is a valid regex"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Course,
    Mobile,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "Name",
            Field::Course => "Course",
            Field::Mobile => "Phone number",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The field the form should focus after a failed submit.
    pub fn first_invalid_field(&self) -> Option<Field> {
        self.errors.first().map(|e| e.field)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// All violated rules joined into one message, one rule per line.
    pub fn message(&self) -> String {
        self.errors.iter().map(|e| format!("- {}", e)).collect::<Vec<_>>().join("\n")
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    country_code: Option<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts mobiles prefixed with `code`, e.g. `+216 12345678`.
    pub fn with_country_code(code: Option<String>) -> Self {
        let country_code = code.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
        Validator { country_code }
    }

    pub fn validate(&self, form: &StudentForm) -> ValidationReport {
        let mut report = ValidationReport::default();

        if !self.is_valid_name(&form.name) {
            report.push(Field::Name, "must be a first and last name made of letters, separated by one space (e.g. John Doe)");
        }

        if form.course == COURSE_PLACEHOLDER || form.course.is_empty() {
            report.push(Field::Course, "please select a course");
        } else if !COURSES[1..].contains(&form.course.as_str()) {
            report.push(Field::Course, format!("must be one of: {}", COURSES[1..].join(", ")));
        }

        if !self.is_valid_mobile(&form.mobile) {
            let message = match &self.country_code {
                Some(code) => format!("must be exactly 8 digits, optionally prefixed with {}", code),
                None => "must be exactly 8 digits".to_string(),
            };
            report.push(Field::Mobile, message);
        }

        report
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        name_re().is_match(name)
    }

    pub fn is_valid_mobile(&self, mobile: &str) -> bool {
        phone_re().is_match(self.strip_country_code(mobile))
    }

    fn strip_country_code<'a>(&self, mobile: &'a str) -> &'a str {
        match &self.country_code {
            Some(code) => match mobile.strip_prefix(code.as_str()) {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => mobile,
            },
            None => mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_country_code_and_one_space() {
        let validator = Validator::with_country_code(Some("+216".to_string()));
        assert_eq!(validator.strip_country_code("+216 12345678"), "12345678");
        assert_eq!(validator.strip_country_code("+21612345678"), "12345678");
        assert_eq!(validator.strip_country_code("+216  12345678"), " 12345678");
        assert_eq!(validator.strip_country_code("12345678"), "12345678");
    }

    #[test]
    fn blank_country_code_is_ignored() {
        let validator = Validator::with_country_code(Some("  ".to_string()));
        assert!(validator.country_code.is_none());
    }
}
