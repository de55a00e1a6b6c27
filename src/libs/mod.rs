//! Core library modules.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use students::db::students::Students;
//! use students::libs::records::{Records, SaveOutcome};
//! use students::libs::student::StudentForm;
//! use students::libs::validator::Validator;
//!
//! let records = Records::new(Students::new()?, Validator::new());
//! match records.register(&StudentForm::new("john doe", "Math", "12345678"))? {
//!     SaveOutcome::Saved(student) => println!("added {}", student),
//!     SaveOutcome::Invalid(report) => eprintln!("{}", report.message()),
//!     SaveOutcome::Unchanged(_) => {}
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod records;
pub mod student;
pub mod validator;
pub mod view;
