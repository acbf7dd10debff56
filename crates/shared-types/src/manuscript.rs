//! Manuscript records shown on the dashboards, plus the static demo data
//! that stands in for a backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Editing priority of an assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Progress state of a script or chapter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl WorkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "Not Started",
            WorkStatus::InProgress => "In Progress",
            WorkStatus::Completed => "Completed",
        }
    }
}

/// Script genres offered by the upload form, as `(value, label)`.
pub const GENRES: &[(&str, &str)] = &[
    ("fiction", "Fiction"),
    ("non-fiction", "Non-Fiction"),
    ("sci-fi", "Science Fiction"),
    ("fantasy", "Fantasy"),
    ("mystery", "Mystery"),
    ("romance", "Romance"),
    ("thriller", "Thriller"),
    ("horror", "Horror"),
    ("poetry", "Poetry"),
    ("academic", "Academic"),
    ("technical", "Technical"),
    ("other", "Other"),
];

/// A script assigned to an editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignedScript {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub deadline: NaiveDate,
    pub status: WorkStatus,
    pub progress: u8,
    pub priority: Priority,
}

/// Long-form date used on cards, e.g. "May 20, 2025".
pub fn format_deadline(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    pub id: u32,
    pub title: String,
    pub progress: u8,
    pub status: WorkStatus,
}

/// An assignment broken down by chapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManuscriptWithChapters {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub author_id: String,
    pub deadline: NaiveDate,
    pub chapters: Vec<Chapter>,
    pub priority: Priority,
}

impl ManuscriptWithChapters {
    /// Rounded mean of chapter progress; 0 when there are no chapters.
    pub fn overall_progress(&self) -> u8 {
        if self.chapters.is_empty() {
            return 0;
        }
        let total: u32 = self.chapters.iter().map(|c| u32::from(c.progress)).sum();
        let mean = f64::from(total) / self.chapters.len() as f64;
        mean.round() as u8
    }

    pub fn chapter_count_label(&self) -> String {
        match self.chapters.len() {
            1 => "1 Chapter".to_string(),
            n => format!("{n} Chapters"),
        }
    }
}

/// A script submitted by the signed-in writer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WriterScript {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub status: WorkStatus,
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

/// Details entered on the upload form. The manuscript file itself is
/// handled by the page, not by this record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ScriptSubmission {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Genre is required"))
    )]
    pub genre: String,
}

impl ScriptSubmission {
    /// Label for a genre value, if it is one of [`GENRES`].
    pub fn genre_label(&self) -> Option<&'static str> {
        GENRES
            .iter()
            .find(|(value, _)| *value == self.genre)
            .map(|(_, label)| *label)
    }
}

/// Status counts across a set of assignments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl PipelineSummary {
    pub fn from_scripts(scripts: &[AssignedScript]) -> Self {
        scripts.iter().fold(Self::default(), |mut acc, s| {
            match s.status {
                WorkStatus::NotStarted => acc.not_started += 1,
                WorkStatus::InProgress => acc.in_progress += 1,
                WorkStatus::Completed => acc.completed += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.not_started + self.in_progress + self.completed
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn chapter(id: u32, title: &str, progress: u8, status: WorkStatus) -> Chapter {
    Chapter {
        id,
        title: title.to_string(),
        progress,
        status,
    }
}

/// Scripts currently assigned to the demo editor.
pub fn assigned_scripts() -> Vec<AssignedScript> {
    vec![
        AssignedScript {
            id: 1,
            title: "The Lost Chapter".into(),
            author: "Sarah Johnson".into(),
            deadline: date(2025, 5, 20),
            status: WorkStatus::InProgress,
            progress: 65,
            priority: Priority::Medium,
        },
        AssignedScript {
            id: 2,
            title: "Beyond the Stars".into(),
            author: "Michael Chen".into(),
            deadline: date(2025, 5, 18),
            status: WorkStatus::NotStarted,
            progress: 0,
            priority: Priority::High,
        },
        AssignedScript {
            id: 3,
            title: "Shadows of Tomorrow".into(),
            author: "Elena Rodriguez".into(),
            deadline: date(2025, 5, 30),
            status: WorkStatus::InProgress,
            progress: 25,
            priority: Priority::Low,
        },
    ]
}

/// Chapter breakdown of the demo editor's assignments.
pub fn manuscripts_with_chapters() -> Vec<ManuscriptWithChapters> {
    vec![
        ManuscriptWithChapters {
            id: 1,
            title: "The Lost Chapter".into(),
            author: "Sarah Johnson".into(),
            author_id: "w1".into(),
            deadline: date(2025, 5, 20),
            priority: Priority::Medium,
            chapters: vec![
                chapter(1, "The Beginning", 100, WorkStatus::Completed),
                chapter(2, "Into the Woods", 80, WorkStatus::InProgress),
                chapter(3, "The Discovery", 15, WorkStatus::InProgress),
            ],
        },
        ManuscriptWithChapters {
            id: 2,
            title: "Beyond the Stars".into(),
            author: "Michael Chen".into(),
            author_id: "w2".into(),
            deadline: date(2025, 5, 18),
            priority: Priority::High,
            chapters: vec![
                chapter(1, "Launch", 0, WorkStatus::NotStarted),
                chapter(2, "Orbit", 0, WorkStatus::NotStarted),
            ],
        },
        ManuscriptWithChapters {
            id: 3,
            title: "Shadows of Tomorrow".into(),
            author: "Elena Rodriguez".into(),
            author_id: "w3".into(),
            deadline: date(2025, 5, 30),
            priority: Priority::Low,
            chapters: vec![chapter(1, "Dusk", 25, WorkStatus::InProgress)],
        },
    ]
}

/// Scripts submitted by the demo writer.
pub fn writer_scripts() -> Vec<WriterScript> {
    vec![
        WriterScript {
            id: 1,
            title: "The Lost Chapter".into(),
            genre: "Mystery".into(),
            status: WorkStatus::InProgress,
            progress: 65,
            editor: Some("Mark Davis".into()),
        },
        WriterScript {
            id: 4,
            title: "Letters from the Coast".into(),
            genre: "Fiction".into(),
            status: WorkStatus::Completed,
            progress: 100,
            editor: Some("Mark Davis".into()),
        },
        WriterScript {
            id: 5,
            title: "Untitled Draft".into(),
            genre: "Other".into(),
            status: WorkStatus::NotStarted,
            progress: 0,
            editor: None,
        },
    ]
}
