#[derive(Debug, Clone)]
pub enum Message {
    // === STUDENT MESSAGES ===
    StudentAdded { name: String, id: i64 },
    StudentUpdated { name: String, id: i64 },
    StudentDeleted(i64),
    StudentNotFound(String),  // searched name
    StudentsFound(usize, String), // count, name
    NoStudentsFound,
    StudentsHeader,
    NoModification,
    ConfirmDeleteStudent(String), // student summary
    SelectStudentToEdit,
    SelectStudentToDelete,
    SelectionCleared,
    CoursesHeader,

    // === VALIDATION MESSAGES ===
    ValidationFailed,
    ValidationFailedFor(String), // first invalid field
    ValidationRejected,

    // === MENU ===
    SelectAction,
    MenuAddStudent,
    MenuSearch,
    MenuEditStudent,
    MenuDeleteStudent,
    MenuClearSelection,
    MenuQuit,
    Goodbye,
    ActionFailed(String), // error

    // === PROMPTS ===
    PromptStudentName,
    PromptCourse,
    PromptPhoneNumber,
    PromptSearchName,
    PromptSelectModules,
    PromptDatabasePath,
    PromptLogLevel,
    PromptLogMaxFileSize,
    PromptLogMaxFiles,
    PromptCountryCode,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigReadFailed(String), // error
    ConfigModuleDatabase,
    ConfigModuleLogging,
    ConfigModulePhone,
    InvalidLogLevel(String),

    // === LOGGING MESSAGES ===
    LoggingInitFailed(String), // error

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
