//! SQLite storage implementation

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};

use super::{StudentStore, schema};
use crate::Result;
use crate::student::Student;

/// SQLite-backed roster store.
///
/// Holds only the database path: every operation opens a fresh connection,
/// executes one statement, and closes the connection before returning. At
/// this scale a long-lived handle or pool would buy nothing, and the
/// per-call lifetime keeps the gateway free of shared mutable state.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist) and ensure the
    /// schema is present. Idempotent, safe to call on every process start.
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };
        let conn = store.connect()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    fn row_to_student(row: &rusqlite::Row) -> rusqlite::Result<Student> {
        Ok(Student {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            grade: row.get(3)?,
        })
    }
}

impl StudentStore for SqliteStore {
    fn add_student(&self, name: &str, age: i64, grade: &str) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO students (name, age, grade) VALUES (?1, ?2, ?3)",
            params![name, age, grade],
        )?;
        Ok(())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name, age, grade FROM students")?;
        let students = stmt
            .query_map([], Self::row_to_student)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(students)
    }

    fn update_student(&self, id: i64, name: &str, age: i64, grade: &str) -> Result<()> {
        let conn = self.connect()?;
        let affected = conn.execute(
            "UPDATE students SET name = ?1, age = ?2, grade = ?3 WHERE id = ?4",
            params![name, age, grade, id],
        )?;
        if affected == 0 {
            tracing::debug!(id, "update matched no row");
        }
        Ok(())
    }

    fn delete_student(&self, id: i64) -> Result<()> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM students WHERE id = ?1", params![id])?;
        if affected == 0 {
            tracing::debug!(id, "delete matched no row");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SqliteStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(&dir.path().join("students.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_add_and_list() {
        let (_dir, store) = temp_store();

        store.add_student("Alice", 20, "A").unwrap();
        store.add_student("Bob", 22, "B").unwrap();

        let students = store.list_students().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[0].age, 20);
        assert_eq!(students[0].grade, "A");
        assert_eq!(students[1].name, "Bob");

        // Store-generated ids are unique
        assert_ne!(students[0].id, students[1].id);
    }

    #[test]
    fn test_update_changes_only_target_row() {
        let (_dir, store) = temp_store();

        store.add_student("Alice", 20, "A").unwrap();
        store.add_student("Bob", 22, "B").unwrap();
        let students = store.list_students().unwrap();

        store
            .update_student(students[0].id, "Alice B", 21, "A+")
            .unwrap();

        let after = store.list_students().unwrap();
        assert_eq!(after[0].name, "Alice B");
        assert_eq!(after[0].age, 21);
        assert_eq!(after[0].grade, "A+");
        assert_eq!(after[1], students[1]);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let (_dir, store) = temp_store();

        store.add_student("Alice", 20, "A").unwrap();
        let before = store.list_students().unwrap();

        store.update_student(9999, "Ghost", 0, "F").unwrap();

        assert_eq!(store.list_students().unwrap(), before);
    }

    #[test]
    fn test_delete_removes_exactly_one_row() {
        let (_dir, store) = temp_store();

        store.add_student("Alice", 20, "A").unwrap();
        store.add_student("Bob", 22, "B").unwrap();
        let students = store.list_students().unwrap();

        store.delete_student(students[0].id).unwrap();

        let after = store.list_students().unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0], students[1]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (_dir, store) = temp_store();

        store.add_student("Alice", 20, "A").unwrap();

        store.delete_student(9999).unwrap();

        assert_eq!(store.list_students().unwrap().len(), 1);
    }

    #[test]
    fn test_open_is_idempotent_and_persistent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.db");

        let store = SqliteStore::open(&path).unwrap();
        store.add_student("Alice", 20, "A").unwrap();

        // Re-opening must not clobber existing rows
        let reopened = SqliteStore::open(&path).unwrap();
        let students = reopened.list_students().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Alice");
    }

    #[test]
    fn test_full_lifecycle_scenario() {
        let (_dir, store) = temp_store();

        store.add_student("Alice", 20, "A").unwrap();
        let students = store.list_students().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, 1);
        assert_eq!(
            (students[0].name.as_str(), students[0].age, students[0].grade.as_str()),
            ("Alice", 20, "A")
        );

        store.update_student(1, "Alice B", 21, "A+").unwrap();
        let students = store.list_students().unwrap();
        assert_eq!(
            (students[0].name.as_str(), students[0].age, students[0].grade.as_str()),
            ("Alice B", 21, "A+")
        );

        store.delete_student(1).unwrap();
        assert!(store.list_students().unwrap().is_empty());
    }
}
