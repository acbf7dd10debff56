use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader};

/// Collaborative editing view. Reachable by URL only; it has no menu entry.
#[component]
pub fn LiveEdits() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader {
            title: "Live Edits",
            subtitle: "Follow edits to a manuscript as they happen",
        }

        Card {
            CardContent {
                p { class: "page-empty", "No editing sessions are active." }
            }
        }
    }
}
