//! Read-side views over [`TodoData`]. Nothing here mutates the store.

use super::category::Category;
use super::types::{Task, TodoData};

/// All tasks in the given category, in store order.
pub fn filter_by_category<'a>(data: &'a TodoData, category: Category) -> Vec<&'a Task> {
    data.todos
        .iter()
        .filter(|task| task.category == category)
        .collect()
}

/// All tasks referencing the given folder, in store order.
pub fn tasks_in_folder<'a>(data: &'a TodoData, folder_id: &str) -> Vec<&'a Task> {
    data.todos
        .iter()
        .filter(|task| task.folder_id == folder_id)
        .collect()
}

/// Arrange a task view for list display.
///
/// Incomplete tasks come first, completed ones last. Within each completion
/// group tasks keep creation order, except that the slots occupied by tasks
/// carrying a due time are refilled with those same tasks in ascending
/// time-of-day order. Untimed tasks therefore never move relative to each
/// other, and timed tasks always read chronologically top to bottom.
pub fn sort_for_display(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    let mut start = 0;
    while start < tasks.len() {
        let completed = tasks[start].completed;
        let mut end = start;
        while end < tasks.len() && tasks[end].completed == completed {
            end += 1;
        }
        reorder_timed_slots(&mut tasks[start..end]);
        start = end;
    }
}

/// Reorder the timed tasks of one completion group among their own slots by
/// `(due_time, created_at)`.
fn reorder_timed_slots(group: &mut [&Task]) {
    let slots: Vec<usize> = group
        .iter()
        .enumerate()
        .filter(|(_, task)| task.due_time.is_some())
        .map(|(index, _)| index)
        .collect();

    if slots.len() < 2 {
        return;
    }

    let mut timed: Vec<&Task> = slots.iter().map(|&index| group[index]).collect();
    timed.sort_by(|a, b| {
        a.due_time
            .cmp(&b.due_time)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    for (slot, task) in slots.into_iter().zip(timed) {
        group[slot] = task;
    }
}
