use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Folder id tasks fall back to when the last folder is deleted.
pub const FALLBACK_FOLDER_ID: &str = "1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,
    pub folder_id: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

/// Combined persisted state: every task and every folder.
///
/// A file missing the `folders` key deserializes with the default folder
/// set; an explicitly empty list stays empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoData {
    #[serde(default)]
    pub todos: Vec<Task>,
    #[serde(default = "seed_folders")]
    pub folders: Vec<Folder>,
}

impl TodoData {
    /// First-run state: no tasks, the default folder set.
    pub fn seeded() -> Self {
        Self {
            todos: Vec::new(),
            folders: seed_folders(),
        }
    }
}

fn seed_folders() -> Vec<Folder> {
    DEFAULT_FOLDERS.clone()
}

/// Editable fields of a task, as submitted by a task form.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub folder_id: String,
}

/// Editable fields of a folder, as submitted by the folder editor.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDraft {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// Folders seeded on first run.
pub static DEFAULT_FOLDERS: Lazy<Vec<Folder>> = Lazy::new(|| {
    vec![
        Folder {
            id: "1".to_string(),
            name: "Work".to_string(),
            color: "#FFB6E1".to_string(),
            icon: "💼".to_string(),
        },
        Folder {
            id: "2".to_string(),
            name: "Personal".to_string(),
            color: "#B6E1FF".to_string(),
            icon: "👤".to_string(),
        },
        Folder {
            id: "3".to_string(),
            name: "Study".to_string(),
            color: "#FFE1B6".to_string(),
            icon: "📚".to_string(),
        },
    ]
});

/// Icon choices offered by the folder editor.
pub const PRESET_ICONS: [&str; 12] = [
    "💼", "👤", "📚", "🏃", "🎨", "🎵", "🍽️", "✈️", "💰", "🎯", "📺", "⚽",
];

/// Color choices offered by the folder editor.
pub const PRESET_COLORS: [&str; 8] = [
    "#FFB6E1", "#B6E1FF", "#FFE1B6", "#D4F1B6", "#F1D4FF", "#FFD4E1", "#D4F5FF", "#F5D4FF",
];
