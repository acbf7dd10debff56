use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageHeader};

use crate::session::use_session;

/// Writer and editor conversations. No messaging backend exists yet.
#[component]
pub fn Messages() -> Element {
    let session = use_session();
    let role = session.role().map(|r| r.label()).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader {
            title: "Messages",
            subtitle: "Conversations between writers and editors",
        }

        Card {
            CardContent {
                p { class: "page-empty", "No messages yet. {role} conversations will appear here." }
            }
        }
    }
}
