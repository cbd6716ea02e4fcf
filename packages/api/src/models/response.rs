use serde::{Deserialize, Serialize};

use super::Note;

/// Body of `GET /allNotes`.
///
/// Only `content` is read. A missing or `null` `content` means the backend has
/// nothing to show; anything else that is not a list of notes fails to decode.
///
/// Validation covers the whole list: a single element without a string `_id`
/// rejects the entire response, so none of its notes are shown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotesResponse {
    #[serde(default)]
    pub content: Option<Vec<Note>>,
}

impl NotesResponse {
    /// The notes carried by the response, in server order.
    pub fn into_notes(self) -> Vec<Note> {
        self.content.unwrap_or_default()
    }
}
