//! The home view: every saved note, plus the form for adding one.

use api::{load_notes, LoadGuard, Note, NotesClient, NotesCollection};
use dioxus::prelude::*;

use crate::add_note::AddNote;
use crate::config::use_api_config;
use crate::note_card::NoteCard;
use crate::NOTES_CSS;

/// Shown in place of the cards when there is nothing to display.
pub const EMPTY_MESSAGE: &str = "No Notes To Show";

/// What the cards container holds for a given collection.
#[derive(Debug, Clone, PartialEq)]
pub enum NotesBody {
    /// One card per note, in collection order.
    Cards(Vec<Note>),
    Placeholder,
}

impl NotesBody {
    pub fn from_collection(collection: &NotesCollection) -> Self {
        if collection.is_empty() {
            NotesBody::Placeholder
        } else {
            NotesBody::Cards(collection.iter().cloned().collect())
        }
    }

    pub fn cards(&self) -> &[Note] {
        match self {
            NotesBody::Cards(notes) => notes,
            NotesBody::Placeholder => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, NotesBody::Placeholder)
    }
}

/// Lists the notes from `<base>/allNotes` and offers the add-note form.
///
/// Loads once on mount and again whenever the configuration signal changes.
/// Responses from a superseded load, or arriving after unmount, are dropped.
#[component]
pub fn NotesHome() -> Element {
    let config = use_api_config();
    let guard = use_hook(LoadGuard::new);
    let mut notes = use_signal(NotesCollection::default);

    use_drop({
        let guard = guard.clone();
        move || guard.retire()
    });

    let _loader = use_resource(move || {
        let guard = guard.clone();
        async move {
            let client = NotesClient::new(config());
            if let Some(collection) = load_notes(&client, guard.begin()).await {
                notes.set(collection);
            }
        }
    });

    let body = NotesBody::from_collection(&notes.read());

    rsx! {
        document::Stylesheet { href: NOTES_CSS }

        div {
            class: "notes-home",
            h1 {
                class: "headline",
                "Save Your "
                span { "Notes" }
                " Here"
            }

            div {
                class: "cards",
                for note in body.cards() {
                    NoteCard { key: "{note.id}", note: note.clone() }
                }
                if body.is_placeholder() {
                    p { class: "notes-empty", "{EMPTY_MESSAGE}" }
                }
            }

            AddNote {}
        }
    }
}
