//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const NOTES_CSS: Asset = asset!("/assets/styling/notes.css");

mod config;
pub use config::{use_api_config, ApiConfigProvider};

mod note_card;
pub use note_card::NoteCard;

mod add_note;
pub use add_note::AddNote;

mod notes_home;
pub use notes_home::{NotesBody, NotesHome, EMPTY_MESSAGE};
