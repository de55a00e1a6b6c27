//! Record store for the `students` table.
//!
//! The store holds only the database path. Every operation opens its own
//! connection, runs one parameterized statement inside a transaction and
//! commits. An error before the commit drops the transaction, which rolls it
//! back, and the connection closes when the operation returns on any path.
//!
//! ```rust,no_run
//! use students::db::students::Students;
//!
//! let store = Students::new()?;
//! let id = store.insert("John Doe", "Math", "12345678")?;
//! store.update(id, "John Doe", "Physics", "12345678")?;
//! store.delete(id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::error::{StoreError, StoreResult};
use crate::libs::student::Student;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row, Transaction};
use std::path::{Path, PathBuf};

const SCHEMA_STUDENTS: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    course TEXT,
    mobile TEXT
);";
const SELECT_ALL_STUDENTS: &str = "SELECT id, name, course, mobile FROM students ORDER BY id";
const INSERT_STUDENT: &str = "INSERT INTO students (name, course, mobile) VALUES (?1, ?2, ?3)";
const SELECT_STUDENTS_BY_NAME: &str = "SELECT id, name, course, mobile FROM students WHERE name = ?1 ORDER BY id";
const SELECT_STUDENT_BY_ID: &str = "SELECT id, name, course, mobile FROM students WHERE id = ?1";
const UPDATE_STUDENT: &str = "UPDATE students SET name = ?1, course = ?2, mobile = ?3 WHERE id = ?4";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE id = ?1";

#[derive(Debug, Clone)]
pub struct Students {
    path: PathBuf,
}

impl Students {
    /// Store backed by the configured database file.
    pub fn new() -> Result<Students> {
        let path = Db::default_path()?;
        Ok(Self::open(&path)?)
    }

    /// Store backed by `path`. Creates the table when it does not exist yet.
    pub fn open(path: &Path) -> StoreResult<Students> {
        let store = Students { path: path.to_path_buf() };
        store.run("create_schema", |tx| {
            tx.execute(SCHEMA_STUDENTS, [])?;
            Ok(())
        })?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list_all(&self) -> StoreResult<Vec<Student>> {
        self.run("list_all", |tx| {
            let mut stmt = tx.prepare(SELECT_ALL_STUDENTS)?;
            let rows = stmt.query_map([], student_from_row)?;
            let mut students = Vec::new();
            for student in rows {
                students.push(student?);
            }
            Ok(students)
        })
    }

    /// Inserts a row and returns the id SQLite assigned to it.
    pub fn insert(&self, name: &str, course: &str, mobile: &str) -> StoreResult<i64> {
        self.run("insert", |tx| {
            tx.execute(INSERT_STUDENT, params![name, course, mobile])?;
            Ok(tx.last_insert_rowid())
        })
    }

    /// Exact, case-sensitive name match.
    pub fn find_by_name(&self, name: &str) -> StoreResult<Vec<Student>> {
        self.run("find_by_name", |tx| {
            let mut stmt = tx.prepare(SELECT_STUDENTS_BY_NAME)?;
            let rows = stmt.query_map(params![name], student_from_row)?;
            let mut students = Vec::new();
            for student in rows {
                students.push(student?);
            }
            Ok(students)
        })
    }

    pub fn find_by_id(&self, id: i64) -> StoreResult<Option<Student>> {
        self.run("find_by_id", |tx| {
            let student = tx.query_row(SELECT_STUDENT_BY_ID, params![id], student_from_row).optional()?;
            Ok(student)
        })
    }

    pub fn update(&self, id: i64, name: &str, course: &str, mobile: &str) -> StoreResult<()> {
        self.run("update", |tx| {
            let affected = tx.execute(UPDATE_STUDENT, params![name, course, mobile, id])?;
            if affected == 0 {
                return Err(StoreError::NotFound(id));
            }
            Ok(())
        })
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.run("delete", |tx| {
            let affected = tx.execute(DELETE_STUDENT, params![id])?;
            if affected == 0 {
                return Err(StoreError::NotFound(id));
            }
            Ok(())
        })
    }

    /// Runs `op` in a fresh connection and transaction, committing on success.
    fn run<T>(&self, name: &'static str, op: impl FnOnce(&Transaction<'_>) -> StoreResult<T>) -> StoreResult<T> {
        msg_debug!(format!("students.{} on {}", name, self.path.display()));

        let result = self.execute(op);

        match &result {
            Ok(_) => tracing::info!(operation = name, "students store operation succeeded"),
            Err(e) => tracing::error!(operation = name, error = %e, "students store operation failed"),
        }
        result
    }

    fn execute<T>(&self, op: impl FnOnce(&Transaction<'_>) -> StoreResult<T>) -> StoreResult<T> {
        let mut db = Db::open(&self.path)?;
        let tx = db.conn.transaction()?;
        let value = op(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        course: row.get(2)?,
        mobile: row.get(3)?,
    })
}
