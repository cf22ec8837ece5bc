//! Project records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Work in progress
    Active,
    /// Temporarily paused
    OnHold,
    /// Delivered
    Completed,
}

/// A delivery project for a client.
///
/// Tasks reference their project by id; the project does not embed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: String,

    /// Owning client organization
    pub client_id: String,

    /// Project title
    pub title: String,

    /// What the project delivers
    pub description: String,

    /// Overall delivery deadline
    pub due_date: DateTime<Utc>,

    /// Names of staff working on this project
    #[serde(default)]
    pub members: Vec<String>,

    /// Archived projects are hidden from active views; orthogonal to status
    #[serde(default)]
    pub is_archived: bool,

    /// Current lifecycle status
    pub status: ProjectStatus,
}

impl Project {
    /// Create a new active project.
    pub fn new(
        client_id: impl Into<String>,
        title: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: super::generate_id("proj"),
            client_id: client_id.into(),
            title: title.into(),
            description: String::new(),
            due_date,
            members: Vec::new(),
            is_archived: false,
            status: ProjectStatus::Active,
        }
    }
}
