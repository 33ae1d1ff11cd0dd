use std::path::{Path, PathBuf};

use crate::paths::{ensure_dir, get_storage_dir};

use super::errors::StorageError;
use super::types::TodoData;

/// Well-known key the combined state lives under. The data file is this key
/// plus a `.json` extension.
pub const STORAGE_KEY: &str = "todoManagerData";

/// Default data file location: `{storage_dir}/todoManagerData.json`.
pub fn default_data_path() -> PathBuf {
    get_storage_dir().join(format!("{}.json", STORAGE_KEY))
}

/// Load the combined state from `path`.
///
/// A missing file is a first run; a malformed file is treated the same way.
/// Both produce the seeded default state rather than an error.
pub fn load(path: &Path) -> TodoData {
    if !path.exists() {
        tracing::info!(
            target: "todos::storage",
            "No data file at {:?}, starting from defaults",
            path
        );
        return TodoData::seeded();
    }

    match read_data(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(
                target: "todos::storage",
                "Could not load data file {:?}: {}. Starting from defaults",
                path,
                e
            );
            TodoData::seeded()
        }
    }
}

fn read_data(path: &Path) -> Result<TodoData, StorageError> {
    let content = std::fs::read_to_string(path)?;
    let data: TodoData = serde_json::from_str(&content)?;
    Ok(data)
}

/// Write the combined state to `path` as pretty-printed JSON, creating the
/// parent directory if needed.
pub fn save(path: &Path, data: &TodoData) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        ensure_dir(dir)
            .map_err(|e| StorageError::Directory(format!("{}: {}", dir.display(), e)))?;
    }

    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
