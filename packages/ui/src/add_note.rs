use api::{NoteDraft, NotesClient};
use dioxus::prelude::*;

use crate::config::use_api_config;
use crate::icons::FaPlus;
use crate::Icon;

/// Inline form for adding a new note.
///
/// Posts the draft to the configured backend on its own. `on_created` fires
/// after the backend accepted it.
#[component]
pub fn AddNote(on_created: Option<EventHandler<NoteDraft>>) -> Element {
    let config = use_api_config();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_save = move |_| async move {
        let draft = NoteDraft::new(title(), description());
        if !draft.is_submittable() || saving() {
            return;
        }

        saving.set(true);
        let client = NotesClient::new(config());
        match client.create_note(&draft).await {
            Ok(()) => {
                tracing::info!("Saved note {:?}", draft.title);
                title.set(String::new());
                description.set(String::new());
                if let Some(handler) = on_created {
                    handler.call(draft);
                }
            }
            Err(e) => {
                tracing::error!("Error saving note: {}", e);
            }
        }
        saving.set(false);
    };

    rsx! {
        div {
            class: "add-note",
            h2 { class: "add-note-heading", "Add a Note" }

            div {
                class: "form-field",
                label { r#for: "add-note-title", "Title" }
                input {
                    id: "add-note-title",
                    r#type: "text",
                    placeholder: "Title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "add-note-description", "Description" }
                textarea {
                    id: "add-note-description",
                    rows: "4",
                    placeholder: "Write your note...",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: saving(),
                    onclick: handle_save,
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    if saving() {
                        " Saving..."
                    } else {
                        " Save"
                    }
                }
            }
        }
    }
}
