//! Student record - the sole entity of the roster

/// One row of the roster as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Store-generated id, unique and immutable once assigned
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>, age: i64, grade: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade: grade.into(),
        }
    }
}
