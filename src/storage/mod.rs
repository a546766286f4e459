//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - students(id, name, age, grade)
//!
//! The gateway is deliberately narrow: one operation, one statement, one
//! connection. The form controller only ever talks to the [`StudentStore`]
//! trait, so tests can inject a fake gateway and assert on the calls made.

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::Result;
use crate::student::Student;

/// The persistence gateway contract: four CRUD operations, each a single
/// round trip to the store. Schema initialization happens when the store is
/// opened, not through this trait.
pub trait StudentStore {
    /// Insert one row; the id is generated by the store.
    fn add_student(&self, name: &str, age: i64, grade: &str) -> Result<()>;

    /// All rows in store-native order (insertion order for this schema).
    fn list_students(&self) -> Result<Vec<Student>>;

    /// Overwrite all mutable fields of the row matching `id`.
    /// Silently affects zero rows if `id` does not exist.
    fn update_student(&self, id: i64, name: &str, age: i64, grade: &str) -> Result<()>;

    /// Remove the row matching `id`. No-op if absent.
    fn delete_student(&self, id: i64) -> Result<()>;
}
