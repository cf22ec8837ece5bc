//! Task records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kanban status of a task.
///
/// Tasks move freely between these in any direction; none is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Awaiting review
    Review,
    /// Finished
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [TaskStatus; 4] =
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Review, TaskStatus::Done];
}

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Can slip
    Low,
    /// Normal
    #[default]
    Medium,
    /// Blocking or client-visible
    High,
}

/// An independently completable checklist entry on a task.
///
/// Completion here is informational only; it never drives the task status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique identifier within the task
    pub id: String,

    /// What needs doing
    pub text: String,

    /// Whether this item is done
    pub completed: bool,

    /// Optional reference image in the external file store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// Quality inspection report attached to a task after review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionReport {
    /// Quality score, 0-100
    pub score: u8,

    /// Inspector's comments
    pub comments: String,

    /// Ids of supporting media in the external file store
    #[serde(default)]
    pub media_ids: Vec<String>,
}

/// A unit of work within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Owning project
    pub project_id: String,

    /// Owning client organization
    pub client_id: String,

    /// Short title shown on the board
    pub title: String,

    /// Longer description
    pub description: String,

    /// Name of the assigned staff member
    pub assignee: String,

    /// When this task is due
    pub due_date: DateTime<Utc>,

    /// Priority level
    pub priority: Priority,

    /// Current board column
    pub status: TaskStatus,

    /// Checklist entries, in order
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    /// Opaque attachment ids in the external file store
    #[serde(default)]
    pub attachments: Vec<String>,

    /// Archived tasks are hidden from the board; orthogonal to status
    #[serde(default)]
    pub is_archived: bool,

    /// Inspection report, once one has been filed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection: Option<InspectionReport>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task in the `Todo` column.
    pub fn new(
        project_id: impl Into<String>,
        client_id: impl Into<String>,
        title: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: super::generate_id("task"),
            project_id: project_id.into(),
            client_id: client_id.into(),
            title: title.into(),
            description: String::new(),
            assignee: String::new(),
            due_date,
            priority: Priority::default(),
            status: TaskStatus::Todo,
            checklist: Vec::new(),
            attachments: Vec::new(),
            is_archived: false,
            inspection: None,
            created_at: Utc::now(),
        }
    }

    /// Append a checklist item with a fresh id.
    pub fn with_checklist_item(mut self, text: impl Into<String>) -> Self {
        self.checklist.push(ChecklistItem {
            id: super::generate_id("chk"),
            text: text.into(),
            completed: false,
            image_id: None,
        });
        self
    }
}
