//! Derived dashboard numbers. Everything here is computed on demand from
//! the store; nothing is persisted.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::types::{Task, TodoData};

/// Completion roll-up for one folder.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderProgress {
    pub folder_id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub total: usize,
    pub completed: usize,
    /// Rounded completion percentage, 0 for an empty folder.
    pub percent: u8,
}

/// Aggregate numbers for the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub percent: u8,
    /// Tasks whose due date equals the reference day, in store order.
    pub due_today: Vec<Task>,
    pub completed_today: usize,
    /// One entry per folder, in folder-store order.
    pub folder_progress: Vec<FolderProgress>,
}

/// Derive the dashboard numbers for the current local day.
pub fn dashboard_summary(data: &TodoData) -> DashboardSummary {
    dashboard_summary_on(data, Local::now().date_naive())
}

/// Derive the dashboard numbers against an explicit calendar day.
///
/// "Due today" goes by the due date itself, not the stored category tag, so
/// a stale bucket never hides a task from the day view.
pub fn dashboard_summary_on(data: &TodoData, today: NaiveDate) -> DashboardSummary {
    let total = data.todos.len();
    let completed = data.todos.iter().filter(|task| task.completed).count();

    let due_today: Vec<Task> = data
        .todos
        .iter()
        .filter(|task| task.due_date == Some(today))
        .cloned()
        .collect();
    let completed_today = due_today.iter().filter(|task| task.completed).count();

    let folder_progress = data
        .folders
        .iter()
        .map(|folder| {
            let folder_total = data
                .todos
                .iter()
                .filter(|task| task.folder_id == folder.id)
                .count();
            let folder_completed = data
                .todos
                .iter()
                .filter(|task| task.folder_id == folder.id && task.completed)
                .count();

            FolderProgress {
                folder_id: folder.id.clone(),
                name: folder.name.clone(),
                color: folder.color.clone(),
                icon: folder.icon.clone(),
                total: folder_total,
                completed: folder_completed,
                percent: percent_of(folder_completed, folder_total),
            }
        })
        .collect();

    DashboardSummary {
        total,
        completed,
        remaining: total - completed,
        percent: percent_of(completed, total),
        due_today,
        completed_today,
        folder_progress,
    }
}

fn percent_of(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u8
}
