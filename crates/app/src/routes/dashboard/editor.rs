use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdClock, LdFileText, LdMessageSquare};
use dioxus_free_icons::Icon;
use shared_types::manuscript::{assigned_scripts, format_deadline, Priority, WorkStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, PageHeader, Progress,
};

use crate::routes::Route;
use crate::session::SessionStore;

const DUE_THIS_WEEK: usize = 1;
const NEW_MESSAGES: usize = 5;

/// Priority level to badge variant mapping.
pub fn priority_badge(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Danger,
        Priority::Medium => BadgeVariant::Warning,
        Priority::Low => BadgeVariant::Info,
    }
}

pub fn status_badge(status: WorkStatus) -> BadgeVariant {
    match status {
        WorkStatus::NotStarted => BadgeVariant::Outline,
        WorkStatus::InProgress => BadgeVariant::Secondary,
        WorkStatus::Completed => BadgeVariant::Primary,
    }
}

/// Editor home: workload overview, current assignments, and monthly metrics.
#[component]
pub fn EditorDashboard(session: SessionStore) -> Element {
    let scripts = assigned_scripts();
    let assigned = scripts.len().to_string();
    let due = DUE_THIS_WEEK.to_string();
    let messages = NEW_MESSAGES.to_string();
    let name = session.identity().map(|i| i.name).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Editor Dashboard",
            subtitle: "Manage your assigned manuscripts and tasks",
            span { class: "dashboard-signed-in", "Signed in as {name}" }
        }

        div { class: "dashboard-overview",
            OverviewCard { label: "Assigned Scripts", value: assigned,
                Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 }
            }
            OverviewCard { label: "Due This Week", value: due,
                Icon::<LdClock> { icon: LdClock, width: 22, height: 22 }
            }
            OverviewCard { label: "New Messages", value: messages,
                Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 22, height: 22 }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Current Assignments" }
                CardDescription { "Scripts waiting on your review" }
            }
            CardContent {
                div { class: "assignment-list",
                    for script in scripts {
                        div { key: "{script.id}", class: "assignment-row",
                            div { class: "assignment-heading",
                                div {
                                    h4 { class: "assignment-title", "{script.title}" }
                                    p { class: "assignment-meta", "by {script.author}" }
                                }
                                div { class: "assignment-badges",
                                    Badge { variant: priority_badge(script.priority),
                                        {script.priority.label()}
                                    }
                                    Badge { variant: status_badge(script.status),
                                        {script.status.label()}
                                    }
                                }
                            }
                            div { class: "assignment-progress",
                                div { class: "assignment-progress-label",
                                    span { "Progress" }
                                    span { "{script.progress}%" }
                                }
                                Progress { value: script.progress }
                            }
                            div { class: "assignment-footer",
                                span { class: "assignment-meta",
                                    "Deadline: "
                                    {format_deadline(script.deadline)}
                                }
                                Link { to: Route::Assignments {},
                                    Button { variant: ButtonVariant::Outline, "Edit" }
                                }
                            }
                        }
                    }
                }
            }
            CardFooter {
                Link { to: Route::Assignments {}, class: "dashboard-link", "View All Assignments" }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Performance Metrics" }
                CardDescription { "Your editing statistics for the past month" }
            }
            CardContent {
                div { class: "metrics-grid",
                    Metric { value: "12", label: "Manuscripts Completed" }
                    Metric { value: "98%", label: "On-time Completion" }
                    Metric { value: "4.9/5", label: "Writer Satisfaction" }
                }
            }
            CardFooter {
                Button { variant: ButtonVariant::Outline,
                    Icon::<LdActivity> { icon: LdActivity, width: 16, height: 16 }
                    "View Full Statistics"
                }
            }
        }
    }
}

/// Centered count with an icon, used in the overview row.
#[component]
pub fn OverviewCard(label: String, value: String, children: Element) -> Element {
    rsx! {
        Card { class: "overview-card",
            CardContent {
                div { class: "overview-card-body",
                    div { class: "overview-card-icon", {children} }
                    h3 { class: "overview-card-value", "{value}" }
                    p { class: "overview-card-label", "{label}" }
                }
            }
        }
    }
}

#[component]
fn Metric(value: String, label: String) -> Element {
    rsx! {
        div { class: "metric",
            div { class: "metric-value", "{value}" }
            div { class: "metric-label", "{label}" }
        }
    }
}
