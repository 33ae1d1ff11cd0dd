//! Pure mutations over [`TodoData`]. Every function either applies its whole
//! change or returns an error with the data untouched; persistence is the
//! caller's job.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::category::{classify, classify_on};
use super::errors::TodoError;
use super::helpers::{find_folder_mut, find_task_mut};
use super::types::{Folder, FolderDraft, Task, TaskDraft, TodoData, FALLBACK_FOLDER_ID};

/// Validate and normalize a task draft: the trimmed title must be non-empty,
/// a blank memo collapses to `None`, and a due time without a due date is
/// dropped.
fn normalize_task_draft(draft: TaskDraft) -> Result<TaskDraft, TodoError> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(TodoError::validation("Task title cannot be empty"));
    }

    let memo = draft
        .memo
        .map(|memo| memo.trim().to_string())
        .filter(|memo| !memo.is_empty());

    // A time of day only means something on a dated task.
    let due_time = if draft.due_date.is_some() {
        draft.due_time
    } else {
        None
    };

    Ok(TaskDraft {
        title,
        memo,
        due_date: draft.due_date,
        due_time,
        folder_id: draft.folder_id,
    })
}

/// Add a new task. Its category is derived from the draft's due date and
/// `completed` starts false.
pub fn add_task(data: &mut TodoData, draft: TaskDraft) -> Result<Task, TodoError> {
    let draft = normalize_task_draft(draft)?;

    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        memo: draft.memo,
        category: classify(draft.due_date),
        due_date: draft.due_date,
        due_time: draft.due_time,
        folder_id: draft.folder_id,
        created_at: Utc::now(),
        completed: false,
    };

    data.todos.push(task.clone());
    Ok(task)
}

/// Replace the editable fields of an existing task and re-derive its
/// category. `id`, `created_at` and `completed` are preserved.
pub fn update_task(data: &mut TodoData, id: &str, draft: TaskDraft) -> Result<Task, TodoError> {
    let draft = normalize_task_draft(draft)?;

    let task = find_task_mut(data, id).ok_or_else(|| TodoError::TaskNotFound(id.to_string()))?;

    task.title = draft.title;
    task.memo = draft.memo;
    task.due_date = draft.due_date;
    task.due_time = draft.due_time;
    task.folder_id = draft.folder_id;
    task.category = classify(task.due_date);

    Ok(task.clone())
}

pub fn delete_task(data: &mut TodoData, id: &str) -> Result<(), TodoError> {
    let existed = data.todos.iter().any(|task| task.id == id);
    if !existed {
        return Err(TodoError::TaskNotFound(id.to_string()));
    }

    data.todos.retain(|task| task.id != id);
    Ok(())
}

/// Flip a task's completed flag, leaving every other field alone. Returns
/// the new value.
pub fn toggle_task_completed(data: &mut TodoData, id: &str) -> Result<bool, TodoError> {
    let task = find_task_mut(data, id).ok_or_else(|| TodoError::TaskNotFound(id.to_string()))?;
    task.completed = !task.completed;
    Ok(task.completed)
}

/// Re-derive every task's category against `today`. Returns how many tasks
/// moved to a different bucket.
pub fn reclassify_all(data: &mut TodoData, today: NaiveDate) -> usize {
    let mut changed = 0;
    for task in &mut data.todos {
        let fresh = classify_on(task.due_date, today);
        if task.category != fresh {
            task.category = fresh;
            changed += 1;
        }
    }
    changed
}

pub fn add_folder(data: &mut TodoData, draft: FolderDraft) -> Result<Folder, TodoError> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(TodoError::validation("Folder name cannot be empty"));
    }

    let folder = Folder {
        id: Uuid::new_v4().to_string(),
        name,
        color: draft.color,
        icon: draft.icon,
    };

    data.folders.push(folder.clone());
    Ok(folder)
}

/// Replace a folder's name, color and icon. The id never changes.
pub fn update_folder(data: &mut TodoData, id: &str, draft: FolderDraft) -> Result<Folder, TodoError> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(TodoError::validation("Folder name cannot be empty"));
    }

    let folder =
        find_folder_mut(data, id).ok_or_else(|| TodoError::FolderNotFound(id.to_string()))?;

    folder.name = name;
    folder.color = draft.color;
    folder.icon = draft.icon;

    Ok(folder.clone())
}

/// Delete a folder and reassign its tasks to the first remaining folder, or
/// to [`FALLBACK_FOLDER_ID`] when no folder remains. Returns how many tasks
/// were reassigned.
pub fn delete_folder(data: &mut TodoData, id: &str) -> Result<usize, TodoError> {
    let existed = data.folders.iter().any(|folder| folder.id == id);
    if !existed {
        return Err(TodoError::FolderNotFound(id.to_string()));
    }

    data.folders.retain(|folder| folder.id != id);

    let new_home = data
        .folders
        .first()
        .map(|folder| folder.id.clone())
        .unwrap_or_else(|| FALLBACK_FOLDER_ID.to_string());

    let mut reassigned = 0;
    for task in &mut data.todos {
        if task.folder_id == id {
            task.folder_id = new_home.clone();
            reassigned += 1;
        }
    }

    Ok(reassigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::category::Category;
    use chrono::{Days, Local};

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            folder_id: "1".to_string(),
            ..Default::default()
        }
    }

    fn folder_draft(name: &str) -> FolderDraft {
        FolderDraft {
            name: name.to_string(),
            color: "#D4F1B6".to_string(),
            icon: "🎯".to_string(),
        }
    }

    #[test]
    fn test_add_task_due_today_lands_in_today() {
        let mut data = TodoData::seeded();
        let today = Local::now().date_naive();

        let task = add_task(
            &mut data,
            TaskDraft {
                due_date: Some(today),
                ..draft("Buy milk")
            },
        )
        .unwrap();

        assert_eq!(task.category, Category::Today);
        assert!(!task.completed);
        assert_eq!(task.folder_id, "1");
        assert_eq!(data.todos.len(), 1);
    }

    #[test]
    fn test_add_task_without_due_date_lands_in_later() {
        let mut data = TodoData::seeded();
        let task = add_task(&mut data, draft("Someday")).unwrap();
        assert_eq!(task.category, Category::Later);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_add_task_rejects_blank_title() {
        let mut data = TodoData::seeded();

        let err = add_task(&mut data, draft("   ")).unwrap_err();
        assert!(err.is_validation());
        assert!(data.todos.is_empty(), "store must stay unchanged");
    }

    #[test]
    fn test_add_task_trims_title_and_memo() {
        let mut data = TodoData::seeded();

        let task = add_task(
            &mut data,
            TaskDraft {
                memo: Some("  call first  ".to_string()),
                ..draft("  Buy milk  ")
            },
        )
        .unwrap();

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.memo.as_deref(), Some("call first"));
    }

    #[test]
    fn test_add_task_blank_memo_becomes_none() {
        let mut data = TodoData::seeded();
        let task = add_task(
            &mut data,
            TaskDraft {
                memo: Some("   ".to_string()),
                ..draft("Buy milk")
            },
        )
        .unwrap();
        assert_eq!(task.memo, None);
    }

    #[test]
    fn test_add_task_drops_time_without_date() {
        let mut data = TodoData::seeded();
        let task = add_task(
            &mut data,
            TaskDraft {
                due_time: chrono::NaiveTime::from_hms_opt(9, 0, 0),
                ..draft("Untimed")
            },
        )
        .unwrap();
        assert_eq!(task.due_time, None);
    }

    #[test]
    fn test_update_task_rederives_category_and_preserves_identity() {
        let mut data = TodoData::seeded();
        let today = Local::now().date_naive();

        let created = add_task(
            &mut data,
            TaskDraft {
                due_date: Some(today),
                ..draft("Buy milk")
            },
        )
        .unwrap();
        toggle_task_completed(&mut data, &created.id).unwrap();

        let updated = update_task(
            &mut data,
            &created.id,
            TaskDraft {
                due_date: Some(today + Days::new(10)),
                ..draft("Buy oat milk")
            },
        )
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.completed, "completed flag survives an edit");
        assert_eq!(updated.title, "Buy oat milk");
        assert_eq!(updated.category, Category::Later);
    }

    #[test]
    fn test_update_task_unknown_id() {
        let mut data = TodoData::seeded();
        let err = update_task(&mut data, "missing", draft("x")).unwrap_err();
        assert!(matches!(err, TodoError::TaskNotFound(_)));
    }

    #[test]
    fn test_update_task_validates_before_lookup() {
        let mut data = TodoData::seeded();
        let err = update_task(&mut data, "missing", draft("  ")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_task_removes_only_target() {
        let mut data = TodoData::seeded();
        let keep = add_task(&mut data, draft("keep")).unwrap();
        let gone = add_task(&mut data, draft("gone")).unwrap();

        delete_task(&mut data, &gone.id).unwrap();

        assert_eq!(data.todos.len(), 1);
        assert_eq!(data.todos[0].id, keep.id);

        let err = delete_task(&mut data, &gone.id).unwrap_err();
        assert!(matches!(err, TodoError::TaskNotFound(_)));
    }

    #[test]
    fn test_toggle_twice_restores_original_state() {
        let mut data = TodoData::seeded();
        let task = add_task(&mut data, draft("flip me")).unwrap();

        assert!(toggle_task_completed(&mut data, &task.id).unwrap());
        assert!(!toggle_task_completed(&mut data, &task.id).unwrap());
    }

    #[test]
    fn test_reclassify_all_counts_moved_tasks() {
        let mut data = TodoData::seeded();
        let today = Local::now().date_naive();

        add_task(
            &mut data,
            TaskDraft {
                due_date: Some(today),
                ..draft("stale soon")
            },
        )
        .unwrap();
        add_task(&mut data, draft("never moves")).unwrap();

        // Same day: nothing changes.
        assert_eq!(reclassify_all(&mut data, today), 0);

        // Seven days later the dated task has slipped from Today to Later.
        let changed = reclassify_all(&mut data, today + Days::new(7));
        assert_eq!(changed, 1);
        assert_eq!(data.todos[0].category, Category::Later);
        assert_eq!(data.todos[1].category, Category::Later);
    }

    #[test]
    fn test_add_folder_trims_and_validates_name() {
        let mut data = TodoData::seeded();

        let folder = add_folder(&mut data, folder_draft("  Fitness  ")).unwrap();
        assert_eq!(folder.name, "Fitness");
        assert_eq!(data.folders.len(), 4);

        let err = add_folder(&mut data, folder_draft(" ")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(data.folders.len(), 4);
    }

    #[test]
    fn test_update_folder_keeps_id() {
        let mut data = TodoData::seeded();

        let updated = update_folder(
            &mut data,
            "2",
            FolderDraft {
                name: "Home".to_string(),
                color: "#FFD4E1".to_string(),
                icon: "🏃".to_string(),
            },
        )
        .unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Home");
        assert_eq!(updated.icon, "🏃");

        let err = update_folder(&mut data, "missing", folder_draft("x")).unwrap_err();
        assert!(matches!(err, TodoError::FolderNotFound(_)));
    }

    #[test]
    fn test_delete_folder_reassigns_to_first_remaining() {
        let mut data = TodoData::seeded();
        add_task(&mut data, draft("in work")).unwrap();
        add_task(&mut data, draft("also in work")).unwrap();
        add_task(
            &mut data,
            TaskDraft {
                folder_id: "3".to_string(),
                ..draft("in study")
            },
        )
        .unwrap();

        let reassigned = delete_folder(&mut data, "1").unwrap();

        assert_eq!(reassigned, 2);
        assert_eq!(data.folders.len(), 2);
        // "2" is now the first remaining folder.
        assert_eq!(data.todos[0].folder_id, "2");
        assert_eq!(data.todos[1].folder_id, "2");
        assert_eq!(data.todos[2].folder_id, "3", "other folders untouched");
    }

    #[test]
    fn test_delete_last_folder_falls_back_to_well_known_id() {
        let mut data = TodoData::seeded();
        add_task(
            &mut data,
            TaskDraft {
                folder_id: "3".to_string(),
                ..draft("orphan")
            },
        )
        .unwrap();

        delete_folder(&mut data, "1").unwrap();
        delete_folder(&mut data, "2").unwrap();
        let reassigned = delete_folder(&mut data, "3").unwrap();

        assert_eq!(reassigned, 1);
        assert!(data.folders.is_empty());
        assert_eq!(data.todos[0].folder_id, FALLBACK_FOLDER_ID);
    }

    #[test]
    fn test_delete_folder_unknown_id() {
        let mut data = TodoData::seeded();
        let err = delete_folder(&mut data, "missing").unwrap_err();
        assert!(matches!(err, TodoError::FolderNotFound(_)));
        assert_eq!(data.folders.len(), 3);
    }
}
