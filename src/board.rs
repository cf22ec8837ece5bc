//! Kanban task board.
//!
//! Pure read-side partitioning of tasks into status columns, plus the one
//! board mutation (drag-and-drop status reassignment) and the progress
//! aggregates. Everything here is recomputed per call; nothing is cached.

use crate::engine;
use crate::error::{EngineError, EngineResult};
use crate::model::{Role, Task, TaskStatus};
use crate::store::EntityStore;

/// One status column of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    /// Which status this column holds
    pub status: TaskStatus,

    /// Tasks in list order (most recently created first)
    pub tasks: Vec<Task>,
}

/// Partition a project's tasks into status columns.
///
/// A single stable pass: each task lands in exactly one column, chosen
/// solely by its status, keeping the store's list order. The archived
/// filter is exclusive and exhaustive: `archived = false` shows only live
/// tasks, `archived = true` only archived ones.
pub fn columns(store: &EntityStore, project_id: &str, archived: bool) -> Vec<BoardColumn> {
    let mut columns: Vec<BoardColumn> = TaskStatus::ALL
        .iter()
        .map(|&status| BoardColumn { status, tasks: Vec::new() })
        .collect();

    for task in store.tasks_for_project(project_id) {
        if task.is_archived != archived {
            continue;
        }
        if let Some(column) = columns.iter_mut().find(|c| c.status == task.status) {
            column.tasks.push(task.clone());
        }
    }
    columns
}

/// Drag-and-drop a task to another column.
///
/// A single-field status update on exactly one task: applied immediately,
/// at most once, last write wins, no other field touched.
pub fn move_task(
    store: &mut EntityStore,
    task_id: &str,
    target: TaskStatus,
    role: Role,
) -> EngineResult<()> {
    let task = store
        .task(task_id)
        .ok_or_else(|| EngineError::not_found("task", task_id))?;
    let updated = engine::set_task_status(task, target, role)?;
    store.replace_task(updated)
}

/// Percentage of a project's non-archived tasks that are done.
///
/// `round(100 * done / total)`; 0 when the project has no live tasks.
pub fn project_progress(store: &EntityStore, project_id: &str) -> u32 {
    let live: Vec<&Task> = store
        .tasks_for_project(project_id)
        .into_iter()
        .filter(|t| !t.is_archived)
        .collect();
    if live.is_empty() {
        return 0;
    }
    let done = live.iter().filter(|t| t.status == TaskStatus::Done).count();
    (100.0 * done as f64 / live.len() as f64).round() as u32
}

/// Fraction of a task's checklist that is completed, 0.0 when empty.
///
/// Informational only; never drives the task status.
pub fn checklist_progress(task: &Task) -> f64 {
    if task.checklist.is_empty() {
        return 0.0;
    }
    let completed = task.checklist.iter().filter(|item| item.completed).count();
    completed as f64 / task.checklist.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn seeded_store() -> (EntityStore, String) {
        let mut store = EntityStore::new();
        let project_id = "proj-board".to_string();
        for title in ["a", "b", "c", "d"] {
            store.add_task(Task::new(&project_id, "org-1", title, Utc::now()));
        }
        (store, project_id)
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let (mut store, project_id) = seeded_store();
        let first = store.tasks()[0].id.clone();
        let second = store.tasks()[1].id.clone();
        move_task(&mut store, &first, TaskStatus::Done, Role::OpsHead).unwrap();
        move_task(&mut store, &second, TaskStatus::Review, Role::OpsHead).unwrap();

        let cols = columns(&store, &project_id, false);
        let total: usize = cols.iter().map(|c| c.tasks.len()).sum();
        assert_eq!(total, 4);
        for col in &cols {
            for task in &col.tasks {
                assert_eq!(task.status, col.status);
            }
        }
    }

    #[test]
    fn test_columns_keep_newest_first_order() {
        let (store, project_id) = seeded_store();
        let cols = columns(&store, &project_id, false);
        let todo = &cols[0];
        let titles: Vec<_> = todo.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["d", "c", "b", "a"]);
    }

    #[test]
    fn test_archived_filter_is_exclusive_and_exhaustive() {
        let (mut store, project_id) = seeded_store();
        let task = store.tasks()[0].clone();
        let archived = engine::set_task_archived(&task, true, Role::OpsHead).unwrap();
        store.replace_task(archived).unwrap();

        let live: usize =
            columns(&store, &project_id, false).iter().map(|c| c.tasks.len()).sum();
        let shelved: usize =
            columns(&store, &project_id, true).iter().map(|c| c.tasks.len()).sum();
        assert_eq!(live, 3);
        assert_eq!(shelved, 1);
    }

    #[test]
    fn test_move_task_is_single_field() {
        let (mut store, _) = seeded_store();
        let before = store.tasks()[2].clone();
        move_task(&mut store, &before.id, TaskStatus::InProgress, Role::Employee).unwrap();

        let after = store.task(&before.id).unwrap();
        assert_eq!(after.status, TaskStatus::InProgress);
        assert_eq!(after.title, before.title);
        assert_eq!(after.checklist, before.checklist);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn test_move_missing_task_is_not_found() {
        let (mut store, _) = seeded_store();
        assert!(matches!(
            move_task(&mut store, "task-missing", TaskStatus::Done, Role::OpsHead),
            Err(EngineError::NotFound { .. })
        ));
    }

    #[test]
    fn test_project_progress_rounds() {
        let (mut store, project_id) = seeded_store();
        let id = store.tasks()[0].id.clone();
        move_task(&mut store, &id, TaskStatus::Done, Role::OpsHead).unwrap();

        // 1 of 4 done
        assert_eq!(project_progress(&store, &project_id), 25);
    }

    #[test]
    fn test_project_progress_ignores_archived() {
        let (mut store, project_id) = seeded_store();
        let done_id = store.tasks()[0].id.clone();
        move_task(&mut store, &done_id, TaskStatus::Done, Role::OpsHead).unwrap();

        let task = store.tasks()[1].clone();
        let archived = engine::set_task_archived(&task, true, Role::OpsHead).unwrap();
        store.replace_task(archived).unwrap();

        // 1 of 3 live tasks done
        assert_eq!(project_progress(&store, &project_id), 33);
    }

    #[test]
    fn test_empty_project_progress_is_zero() {
        let store = EntityStore::new();
        assert_eq!(project_progress(&store, "proj-empty"), 0);
    }

    #[test]
    fn test_checklist_progress() {
        let mut task = Task::new("proj-1", "org-1", "Shoot", Utc::now())
            .with_checklist_item("Storyboard")
            .with_checklist_item("Film")
            .with_checklist_item("Edit")
            .with_checklist_item("Publish");
        assert_eq!(checklist_progress(&task), 0.0);

        task.checklist[0].completed = true;
        task.checklist[1].completed = true;
        task.checklist[2].completed = true;
        assert_eq!(checklist_progress(&task), 0.75);

        let empty = Task::new("proj-1", "org-1", "No list", Utc::now());
        assert_eq!(checklist_progress(&empty), 0.0);
    }
}
