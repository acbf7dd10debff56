use dioxus::prelude::*;
use shared_types::manuscript::writer_scripts;
use shared_ui::{
    Badge, Card, CardContent, CardHeader, CardTitle, PageHeader, Progress,
};

use super::dashboard::editor::status_badge;

/// Every script the signed-in writer has submitted.
#[component]
pub fn MyScripts() -> Element {
    let scripts = writer_scripts();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader {
            title: "My Scripts",
            subtitle: "All of your submitted manuscripts",
        }

        if scripts.is_empty() {
            p { class: "page-empty", "You have not submitted any scripts yet." }
        }

        div { class: "script-grid",
            for script in scripts {
                Card { key: "{script.id}",
                    CardHeader {
                        CardTitle { "{script.title}" }
                        Badge { variant: status_badge(script.status), {script.status.label()} }
                    }
                    CardContent {
                        p { class: "script-meta", "Genre: {script.genre}" }
                        p { class: "script-meta",
                            "Editor: "
                            {script.editor.clone().unwrap_or_else(|| "Unassigned".to_string())}
                        }
                        Progress { value: script.progress }
                    }
                }
            }
        }
    }
}
