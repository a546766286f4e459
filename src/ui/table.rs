//! Roster table rendering

use tabled::{Table, Tabled, settings::Style};

use crate::student::Student;

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: i64,
    #[tabled(rename = "Grade")]
    grade: String,
}

impl From<&Student> for StudentRow {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            age: s.age,
            grade: s.grade.clone(),
        }
    }
}

/// Render the full roster as a four-column table. The view is rebuilt from
/// scratch on every call; the caller passes whatever the controller mirrors.
pub fn roster_table(students: &[Student]) -> String {
    let rows: Vec<StudentRow> = students.iter().map(StudentRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
