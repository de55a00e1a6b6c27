//! Database layer.
//!
//! A single SQLite file holds the `students` table. [`db::Db`] opens
//! connections and resolves the configured file location; [`students::Students`]
//! is the record store built on top of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use students::db::students::Students;
//!
//! let store = Students::new()?;
//! for student in store.list_all()? {
//!     println!("{}", student);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection opening and database file resolution.
pub mod db;

/// CRUD operations on the `students` table.
pub mod students;
