use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdClock, LdUpload};
use dioxus_free_icons::Icon;
use shared_types::manuscript::{writer_scripts, WorkStatus};
use shared_ui::{
    Badge, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, Progress,
};

use super::editor::{status_badge, OverviewCard};
use crate::routes::Route;
use crate::session::SessionStore;

/// Writer home: own submissions at a glance.
#[component]
pub fn WriterDashboard(session: SessionStore) -> Element {
    let first_name = session
        .identity()
        .and_then(|i| i.name.split_whitespace().next().map(str::to_string))
        .unwrap_or_default();

    let scripts = writer_scripts();
    let total = scripts.len().to_string();
    let in_progress = scripts
        .iter()
        .filter(|s| s.status == WorkStatus::InProgress)
        .count()
        .to_string();
    let completed = scripts
        .iter()
        .filter(|s| s.status == WorkStatus::Completed)
        .count()
        .to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: format!("Welcome back, {first_name}"),
            subtitle: "Track your manuscripts from draft to publication",
            Link { to: Route::UploadScript {},
                Button {
                    Icon::<LdUpload> { icon: LdUpload, width: 16, height: 16 }
                    "Upload Script"
                }
            }
        }

        div { class: "dashboard-overview",
            OverviewCard { label: "My Scripts", value: total,
                Icon::<LdBookOpen> { icon: LdBookOpen, width: 22, height: 22 }
            }
            OverviewCard { label: "In Editing", value: in_progress,
                Icon::<LdClock> { icon: LdClock, width: 22, height: 22 }
            }
            OverviewCard { label: "Completed", value: completed,
                Icon::<LdBookOpen> { icon: LdBookOpen, width: 22, height: 22 }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Recent Scripts" }
                CardDescription { "Editing progress on your latest submissions" }
            }
            CardContent {
                div { class: "assignment-list",
                    for script in scripts {
                        div { key: "{script.id}", class: "assignment-row",
                            div { class: "assignment-heading",
                                div {
                                    h4 { class: "assignment-title", "{script.title}" }
                                    p { class: "assignment-meta",
                                        "{script.genre}"
                                        {script.editor.as_ref().map(|e| format!(" · Editor: {e}"))}
                                    }
                                }
                                Badge { variant: status_badge(script.status), {script.status.label()} }
                            }
                            Progress { value: script.progress }
                        }
                    }
                }
            }
        }
    }
}
