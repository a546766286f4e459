//! Form controller - translates user actions into gateway calls and refreshes
//!
//! The controller is a small sequential state machine: Idle (no selection)
//! and RowSelected (one row mirrored into the input fields). Every user
//! event is a named method taking the current field values and selection and
//! producing at most one store call plus a full table refresh. The
//! controller never touches a real widget toolkit, so it can be exercised
//! with an injected fake gateway.

use crate::storage::StudentStore;
use crate::student::Student;

/// The three text inputs of the form, held as raw strings exactly as the
/// widgets would hold them. Parsing happens per-transition.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    pub name: String,
    pub age: String,
    pub grade: String,
}

impl FieldValues {
    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.grade.clear();
    }
}

/// Errors surfaced to the user where a desktop form would pop a dialog.
/// All of them abort only the attempted action; the form stays usable.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("All fields are required")]
    EmptyFields,

    #[error("Age must be an integer")]
    AgeNotInteger,

    #[error("Select a student to {0}")]
    NoSelection(&'static str),

    #[error("No student with id {0} in the table")]
    UnknownRow(i64),

    #[error(transparent)]
    Store(#[from] crate::Error),
}

/// Drives the form over any [`StudentStore`].
pub struct FormController<S: StudentStore> {
    store: S,
    fields: FieldValues,
    selection: Option<i64>,
    rows: Vec<Student>,
}

impl<S: StudentStore> FormController<S> {
    /// A controller starts Idle with an empty table; call [`refresh`] to
    /// load the initial rows.
    ///
    /// [`refresh`]: FormController::refresh
    pub fn new(store: S) -> Self {
        Self {
            store,
            fields: FieldValues::default(),
            selection: None,
            rows: Vec::new(),
        }
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldValues {
        &mut self.fields
    }

    /// The current mirror of the table view.
    pub fn rows(&self) -> &[Student] {
        &self.rows
    }

    /// `Some(id)` in the RowSelected state, `None` when Idle.
    pub fn selection(&self) -> Option<i64> {
        self.selection
    }

    /// Full reload: replace the table mirror with the store's rows in the
    /// order returned. No diffing; row counts stay small.
    pub fn refresh(&mut self) -> Result<(), FormError> {
        self.rows = self.store.list_students()?;
        Ok(())
    }

    /// Row click: mirror the row's values into the input fields and keep
    /// its id as the selection.
    pub fn select_row(&mut self, id: i64) -> Result<(), FormError> {
        let row = self
            .rows
            .iter()
            .find(|s| s.id == id)
            .ok_or(FormError::UnknownRow(id))?;
        self.fields.name = row.name.clone();
        self.fields.age = row.age.to_string();
        self.fields.grade = row.grade.clone();
        self.selection = Some(id);
        tracing::debug!(id, "row selected");
        Ok(())
    }

    /// Add: requires all three fields non-empty and age parseable. On any
    /// validation failure nothing is written and the fields are left as the
    /// user typed them.
    pub fn add(&mut self) -> Result<(), FormError> {
        if self.fields.name.is_empty() || self.fields.age.is_empty() || self.fields.grade.is_empty()
        {
            return Err(FormError::EmptyFields);
        }
        let age = self.parse_age()?;
        self.store.add_student(&self.fields.name, age, &self.fields.grade)?;
        tracing::debug!(name = %self.fields.name, "student added");
        self.fields.clear();
        self.selection = None;
        self.refresh()
    }

    /// Update: overwrites the selected row with the current field values.
    /// Only the age parse is re-validated; name and grade were populated
    /// from the row when it was selected.
    pub fn update(&mut self) -> Result<(), FormError> {
        let id = self.selection.ok_or(FormError::NoSelection("update"))?;
        let age = self.parse_age()?;
        self.store
            .update_student(id, &self.fields.name, age, &self.fields.grade)?;
        tracing::debug!(id, "student updated");
        self.fields.clear();
        self.selection = None;
        self.refresh()
    }

    /// Delete: removes the selected row. Field values are left untouched.
    pub fn delete(&mut self) -> Result<(), FormError> {
        let id = self.selection.ok_or(FormError::NoSelection("delete"))?;
        self.store.delete_student(id)?;
        tracing::debug!(id, "student deleted");
        self.selection = None;
        self.refresh()
    }

    fn parse_age(&self) -> Result<i64, FormError> {
        self.fields
            .age
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::AgeNotInteger)
    }
}
