use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronUp, LdClock};
use dioxus_free_icons::Icon;
use shared_types::manuscript::{format_deadline, manuscripts_with_chapters, ManuscriptWithChapters};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, PageHeader, Progress,
};

use super::dashboard::editor::{priority_badge, status_badge};

/// Editor assignments broken down by chapter.
#[component]
pub fn Assignments() -> Element {
    let manuscripts = manuscripts_with_chapters();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./assignments.css") }

        PageHeader {
            title: "Assignments",
            subtitle: "Chapter-level progress on every manuscript you are editing",
        }

        div { class: "chapter-progress-list",
            for manuscript in manuscripts {
                ChapterProgressCard { key: "{manuscript.id}", manuscript }
            }
        }
    }
}

/// One manuscript with its overall progress and a collapsible chapter list.
#[component]
fn ChapterProgressCard(manuscript: ManuscriptWithChapters) -> Element {
    let mut expanded = use_signal(|| false);
    let overall = manuscript.overall_progress();
    let chapter_count = manuscript.chapter_count_label();
    let deadline = format_deadline(manuscript.deadline);
    let priority = manuscript.priority.label();

    rsx! {
        Card { class: "chapter-card",
            CardHeader {
                div { class: "chapter-card-heading",
                    div {
                        CardTitle { "{manuscript.title}" }
                        CardDescription { "by {manuscript.author}" }
                    }
                    Badge { variant: priority_badge(manuscript.priority), "{priority} Priority" }
                }
            }
            CardContent {
                div { class: "chapter-overall",
                    div { class: "chapter-progress-label",
                        span { "Overall Progress" }
                        span { "{overall}%" }
                    }
                    Progress { value: overall }
                }
                div { class: "chapter-meta",
                    span { class: "chapter-due",
                        Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                        " Due: {deadline}"
                    }
                    span { "{chapter_count}" }
                }
                if expanded() {
                    div { class: "chapter-details",
                        h4 { "Chapter Progress" }
                        for chapter in manuscript.chapters.iter() {
                            div { key: "{chapter.id}", class: "chapter-row",
                                div { class: "chapter-row-heading",
                                    h5 { "Chapter {chapter.id}: {chapter.title}" }
                                    Badge { variant: status_badge(chapter.status), {chapter.status.label()} }
                                }
                                div { class: "chapter-progress-label",
                                    span { "Progress" }
                                    span { "{chapter.progress}%" }
                                }
                                Progress { value: chapter.progress }
                            }
                        }
                    }
                }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    class: "chapter-toggle",
                    onclick: move |_| expanded.toggle(),
                    if expanded() {
                        Icon::<LdChevronUp> { icon: LdChevronUp, width: 16, height: 16 }
                        span { "Hide Chapters" }
                    } else {
                        Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                        span { "View Chapters" }
                    }
                }
            }
        }
    }
}
