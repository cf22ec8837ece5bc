//! Task transitions and edits.
//!
//! Task status moves freely between the four board columns, in any
//! direction; archiving is an orthogonal flag, not a status. Checklist
//! completion never feeds back into status.

use crate::error::{EngineError, EngineResult};
use crate::model::{InspectionReport, Role, Task, TaskStatus};

/// Move a task to a board column.
///
/// Every `(from, to)` pair among the four statuses is legal, including
/// no-ops; only the `status` field changes.
pub fn set_status(task: &Task, target: TaskStatus, role: Role) -> EngineResult<Task> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "move a task" });
    }
    let mut updated = task.clone();
    updated.status = target;
    Ok(updated)
}

/// Archive or unarchive a task. Allowed at any status.
pub fn set_archived(task: &Task, archived: bool, role: Role) -> EngineResult<Task> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "archive a task" });
    }
    let mut updated = task.clone();
    updated.is_archived = archived;
    Ok(updated)
}

/// Append a checklist item to a task.
pub fn add_checklist_item(task: &Task, text: &str, role: Role) -> EngineResult<Task> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "edit a checklist" });
    }
    Ok(task.clone().with_checklist_item(text))
}

/// Edit one checklist item's text and/or completion.
///
/// Leaves every other item untouched: same order, same length.
pub fn update_checklist_item(
    task: &Task,
    item_id: &str,
    text: Option<&str>,
    completed: Option<bool>,
    role: Role,
) -> EngineResult<Task> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "edit a checklist" });
    }

    let mut updated = task.clone();
    let item = updated
        .checklist
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or_else(|| EngineError::not_found("checklist item", item_id))?;

    if let Some(text) = text {
        item.text = text.to_string();
    }
    if let Some(completed) = completed {
        item.completed = completed;
    }
    Ok(updated)
}

/// Attach or replace the inspection report on a task.
pub fn file_inspection(
    task: &Task,
    report: InspectionReport,
    role: Role,
) -> EngineResult<Task> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "file an inspection report" });
    }
    if report.score > 100 {
        return Err(EngineError::InvalidTransition {
            entity: "task",
            id: task.id.clone(),
            detail: format!("inspection score {} is out of range", report.score),
        });
    }
    let mut updated = task.clone();
    updated.inspection = Some(report);
    Ok(updated)
}
