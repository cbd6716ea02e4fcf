//! Data models exchanged with the notes backend.

mod note;
mod response;

pub use note::{Note, NoteDraft};
pub use response::NotesResponse;
