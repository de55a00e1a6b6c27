use serde::{Deserialize, Serialize};
use std::fmt;

/// First entry of the course selection list. Never a valid course.
pub const COURSE_PLACEHOLDER: &str = "Select Course";

/// Selection list shown by the course prompt, placeholder first.
pub const COURSES: [&str; 5] = [COURSE_PLACEHOLDER, "Math", "Astronomy", "Biology", "Physics"];

pub const TABLE_HEADERS: [&str; 4] = ["Id", "Names", "Course", "Mobile"];

/// A stored student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub course: String,
    pub mobile: String,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({}, {})", self.id, self.name, self.course, self.mobile)
    }
}

/// Unsaved input of the insert and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub course: String,
    pub mobile: String,
}

impl StudentForm {
    pub fn new(name: &str, course: &str, mobile: &str) -> Self {
        StudentForm {
            name: name.to_string(),
            course: course.to_string(),
            mobile: mobile.to_string(),
        }
    }

    pub fn from_student(student: &Student) -> Self {
        Self::new(&student.name, &student.course, &student.mobile)
    }

    /// Trims every field and title-cases the name, the form stored records use.
    pub fn normalized(&self) -> Self {
        StudentForm {
            name: title_case(self.name.trim()),
            course: self.course.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
        }
    }

    /// True when saving this form over `student` would change nothing.
    pub fn matches(&self, student: &Student) -> bool {
        self.name == student.name && self.course == student.course && self.mobile == student.mobile
    }
}

/// Index of `course` in [`COURSES`], or the placeholder index when unknown.
pub fn course_index(course: &str) -> usize {
    COURSES.iter().position(|c| *c == course).unwrap_or(0)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
///
/// `"jOHN dOE"` becomes `"John Doe"`, `"mary-ann"` becomes `"Mary-Ann"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("john doe"), "John Doe");
        assert_eq!(title_case("JOHN DOE"), "John Doe");
        assert_eq!(title_case("mary-ann o'neil"), "Mary-Ann O'Neil");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn normalized_trims_and_title_cases() {
        let form = StudentForm::new("  jane   ", " Math ", " 12345678 ").normalized();
        assert_eq!(form, StudentForm::new("Jane", "Math", "12345678"));
    }

    #[test]
    fn course_index_falls_back_to_placeholder() {
        assert_eq!(course_index("Biology"), 3);
        assert_eq!(course_index("Chemistry"), 0);
    }
}
