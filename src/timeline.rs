//! Timeline (Gantt) projection.
//!
//! Maps task due dates onto a fixed-width rolling date window as row
//! coordinates, with proportional sub-rows for checklist items. The window
//! start is "today" and moves continuously, so every projection is computed
//! from scratch on each call; nothing is cached and the task is never
//! mutated.

use chrono::{DateTime, Utc};

use crate::model::Task;

/// Default window width, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Fixed lead-in rendered before each due date, in days.
///
/// Tasks have no stored start date, so every bar gets a uniform 3-day
/// run-up ending at its due date. A visual convention, nothing more.
pub const LEAD_IN_DAYS: i64 = 3;

/// Grid coordinates of one task bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskBar {
    /// Days from window start to the bar's left edge
    pub start_offset: i64,

    /// Bar width in days; at least 1
    pub duration: i64,

    /// Whether the bar lands inside the window at all
    pub visible: bool,
}

/// Grid coordinates of one checklist sub-row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistBar {
    /// Id of the checklist item this bar belongs to
    pub item_id: String,

    /// Days from window start to the slice's left edge
    pub start_offset: i64,

    /// Slice width in days; at least 1
    pub duration: i64,

    /// Hidden individually when the slice starts outside the window,
    /// independent of the parent bar's visibility
    pub visible: bool,
}

/// Project a task onto a window starting at `window_start`.
///
/// Both dates are normalized to midnight before subtracting, so
/// time-of-day and timezone artifacts cannot shift a bar by a day.
pub fn project_task(task: &Task, window_start: DateTime<Utc>, window_days: i64) -> TaskBar {
    let start = window_start.date_naive();
    let due = task.due_date.date_naive();
    let diff_days = (due - start).num_days();

    let visible = diff_days >= 0 && diff_days < window_days;
    let start_offset = (diff_days - LEAD_IN_DAYS).max(0);
    let mut duration = (diff_days - start_offset + 1).max(1);
    if start_offset + duration > window_days {
        duration = (window_days - start_offset).max(1);
    }

    TaskBar { start_offset, duration, visible }
}

/// Project a task onto the default 30-day window starting today.
pub fn project_task_today(task: &Task) -> TaskBar {
    project_task(task, Utc::now(), DEFAULT_WINDOW_DAYS)
}

/// Slice a task's bar into equal sub-rows, one per checklist item.
///
/// Each item gets `max(1, duration / len)` days, laid out sequentially
/// from the parent's start offset. Items whose slice begins past the
/// window edge are hidden one by one; the parent bar's own visibility
/// plays no part in that.
pub fn project_checklist(task: &Task, bar: TaskBar, window_days: i64) -> Vec<ChecklistBar> {
    let len = task.checklist.len() as i64;
    if len == 0 {
        return Vec::new();
    }
    let item_duration = (bar.duration / len).max(1);

    task.checklist
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let start_offset = bar.start_offset + index as i64 * item_duration;
            ChecklistBar {
                item_id: item.id.clone(),
                start_offset,
                duration: item_duration,
                visible: start_offset >= 0 && start_offset < window_days,
            }
        })
        .collect()
}
