use dioxus::prelude::*;
use ui::NotesHome;

#[component]
pub fn Home() -> Element {
    rsx! {
        NotesHome {}
    }
}
