//! # Students - Student record management
//!
//! A command-line utility for keeping student records (name, course, mobile
//! number) in a local SQLite database.
//!
//! ## Features
//!
//! - **Record Store**: List, insert, search, update and delete rows of the `students` table
//! - **Validation**: Name and phone number format rules, reported all at once
//! - **Interactive Forms**: Prompted input that resumes at the first invalid field
//! - **Table View**: Terminal table with search results highlighted
//!
//! ## Usage
//!
//! ```rust,no_run
//! use students::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
