//! # Roster - Student Roster Manager
//!
//! Single-user tool for keeping a small roster of student records
//! (name, age, grade) in a local SQLite table.
//!
//! Roster provides:
//! - A narrow persistence gateway (`StudentStore`) with one statement per call
//! - A toolkit-independent form controller driving add/update/delete/select
//! - A terminal frontend rendering the roster as a four-column table

pub mod student;
pub mod storage;
pub mod controller;
pub mod ui;
pub mod config;

// Re-exports for convenient access
pub use student::Student;
pub use storage::{SqliteStore, StudentStore};
pub use controller::{FieldValues, FormController, FormError};

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for roster operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
