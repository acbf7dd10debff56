use dioxus::prelude::*;
use shared_types::manuscript::{assigned_scripts, PipelineSummary};
use shared_types::{demo_identity, Role};
use shared_ui::{
    Avatar, Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, StatCard,
};

use crate::session::SessionStore;

/// Admin home: manuscript pipeline counts and the people on the platform.
#[component]
pub fn AdminDashboard(session: SessionStore) -> Element {
    let summary = PipelineSummary::from_scripts(&assigned_scripts());
    let me = session.identity().map(|i| i.id).unwrap_or_default();
    let people: Vec<_> = Role::ALL.iter().map(|r| demo_identity(*r)).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Admin Dashboard",
            subtitle: "Oversee manuscripts, editors, and writers",
        }

        div { class: "dashboard-overview dashboard-overview-wide",
            StatCard { label: "Total Manuscripts", value: summary.total().to_string() }
            StatCard { label: "Not Started", value: summary.not_started.to_string() }
            StatCard { label: "In Progress", value: summary.in_progress.to_string() }
            StatCard { label: "Completed", value: summary.completed.to_string() }
        }

        Card {
            CardHeader {
                CardTitle { "Team" }
                CardDescription { "Accounts with access to Script Master" }
            }
            CardContent {
                ul { class: "team-list",
                    for person in people {
                        li { key: "{person.id}", class: "team-row",
                            Avatar {
                                src: person.avatar.clone().unwrap_or_default(),
                                alt: person.name.clone(),
                                fallback: person.fallback_initial(),
                            }
                            div { class: "team-info",
                                span { class: "team-name", "{person.name}" }
                                span { class: "team-email", "{person.email}" }
                            }
                            Badge { variant: BadgeVariant::Outline, {person.role.label()} }
                            if person.id == me {
                                Badge { variant: BadgeVariant::Primary, "You" }
                            }
                        }
                    }
                }
            }
        }
    }
}
