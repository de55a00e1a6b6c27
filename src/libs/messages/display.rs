//! Display implementation for application messages.
//!
//! All text shown to the user is defined here, in one match. Messages with
//! parameters interpolate them with `format!`; plain ones are string literals.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STUDENT MESSAGES ===
            Message::StudentAdded { name, id } => format!("Student '{}' added with id {}.", name, id),
            Message::StudentUpdated { name, id } => format!("Student #{} updated: {}.", id, name),
            Message::StudentDeleted(id) => format!("Student #{} deleted.", id),
            Message::StudentNotFound(name) => format!("No records found for student: {}", name),
            Message::StudentsFound(count, name) => format!("Found {} record(s) for {} (highlighted).", count, name),
            Message::NoStudentsFound => "No students registered yet.".to_string(),
            Message::StudentsHeader => "Student Management System".to_string(),
            Message::NoModification => "No modification: the record already has these values.".to_string(),
            Message::ConfirmDeleteStudent(summary) => format!("Delete {}?", summary),
            Message::SelectStudentToEdit => "Select a student to edit".to_string(),
            Message::SelectStudentToDelete => "Select a student to delete".to_string(),
            Message::SelectionCleared => "Selection cleared.".to_string(),
            Message::CoursesHeader => "Available courses:".to_string(),

            // === VALIDATION MESSAGES ===
            Message::ValidationFailed => "Please correct the following:".to_string(),
            Message::ValidationFailedFor(field) => format!("Invalid input, starting again from: {}", field),
            Message::ValidationRejected => "Input rejected, nothing was saved.".to_string(),

            // === MENU ===
            Message::SelectAction => "What would you like to do?".to_string(),
            Message::MenuAddStudent => "Add student".to_string(),
            Message::MenuSearch => "Search".to_string(),
            Message::MenuEditStudent => "Edit student".to_string(),
            Message::MenuDeleteStudent => "Delete student".to_string(),
            Message::MenuClearSelection => "Clear selection".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::Goodbye => "Bye.".to_string(),
            Message::ActionFailed(error) => format!("Action failed: {}", error),

            // === PROMPTS ===
            Message::PromptStudentName => "Name".to_string(),
            Message::PromptCourse => "Course".to_string(),
            Message::PromptPhoneNumber => "Phone number".to_string(),
            Message::PromptSearchName => "Student name".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptLogLevel => "Log level (trace, debug, info, warn, error)".to_string(),
            Message::PromptLogMaxFileSize => "Rotate the log above (bytes)".to_string(),
            Message::PromptLogMaxFiles => "Rotated log files to keep".to_string(),
            Message::PromptCountryCode => "Country code accepted before phone numbers (empty for none)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults apply from now on.".to_string(),
            Message::ConfigNotFound => "No configuration file to remove.".to_string(),
            Message::ConfigReadFailed(error) => format!("Could not read configuration, using defaults: {}", error),
            Message::ConfigModuleDatabase => "Database".to_string(),
            Message::ConfigModuleLogging => "Logging".to_string(),
            Message::ConfigModulePhone => "Phone numbers".to_string(),
            Message::InvalidLogLevel(level) => format!("Unsupported log level '{}'", level),

            // === LOGGING MESSAGES ===
            Message::LoggingInitFailed(error) => format!("File logging disabled: {}", error),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
