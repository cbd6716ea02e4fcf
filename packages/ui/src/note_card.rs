use api::Note;
use dioxus::prelude::*;

/// A single note in the notes grid.
#[component]
pub fn NoteCard(note: Note) -> Element {
    let title = note.title().unwrap_or("Untitled").to_string();
    let description = note.description().unwrap_or_default().to_string();

    rsx! {
        div {
            class: "note-card",
            "data-note-id": "{note.id}",
            h3 { class: "note-card-title", "{title}" }
            if !description.is_empty() {
                p { class: "note-card-description", "{description}" }
            }
        }
    }
}
