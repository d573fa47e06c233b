use dioxus::prelude::*;

struct Note {
    title: &'static str,
    body: &'static str,
}

// Placeholder content until the sync backend lands.
const NOTES: &[Note] = &[
    Note {
        title: "Welcome",
        body: "Notes you create on this device show up here.",
    },
    Note {
        title: "Shopping",
        body: "Coffee, oat milk, rye bread.",
    },
    Note {
        title: "Ideas",
        body: "Tag support, pinned notes, export to Markdown.",
    },
];

#[component]
pub fn NotesPage() -> Element {
    rsx! {
        div { class: "page",
            h2 { class: "page-title", "Notes" }
            ul { class: "note-list",
                for note in NOTES {
                    li { class: "note-card",
                        h3 { class: "note-title", "{note.title}" }
                        p { class: "note-body", "{note.body}" }
                    }
                }
            }
        }
    }
}
