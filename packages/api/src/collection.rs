//! The notes currently on screen.

use crate::error::ApiError;
use crate::models::Note;

/// Read-only snapshot of the notes being displayed.
///
/// Either exactly what the backend returned, in the same order, or empty.
/// Failed loads are not modelled separately from "no notes".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotesCollection {
    notes: Vec<Note>,
}

impl NotesCollection {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Build the collection from the outcome of a fetch, logging failures.
    pub fn from_fetch(result: Result<Vec<Note>, ApiError>) -> Self {
        match result {
            Ok(notes) => Self::new(notes),
            Err(e) => {
                tracing::error!("Error fetching notes: {}", e);
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Note identifiers in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.notes.iter().map(|n| n.id.as_str()).collect()
    }
}
