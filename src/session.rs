//! The application session: one in-memory store bound to one data file.
//!
//! Reads go through [`Session::store`]; every mutation applies the change
//! in memory and then writes the whole state back to disk, so the file
//! always mirrors the last successful operation.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::todos::errors::TodoError;
use crate::todos::stats::{dashboard_summary, DashboardSummary};
use crate::todos::types::{Folder, FolderDraft, Task, TaskDraft, TodoData};
use crate::todos::{ops, storage, TodoStore};

pub struct Session {
    store: TodoStore,
    data_path: PathBuf,
}

impl Session {
    /// Open a session over the default XDG data location.
    pub fn open() -> Self {
        Self::open_at(storage::default_data_path())
    }

    /// Open a session over an explicit data file.
    ///
    /// Loading never fails: a missing or unreadable file yields the seeded
    /// default state. Categories are re-derived against the current day, so
    /// buckets saved on an earlier day are fresh before the first read.
    pub fn open_at(data_path: PathBuf) -> Self {
        let mut data = storage::load(&data_path);

        let rebucketed = ops::reclassify_all(&mut data, Local::now().date_naive());
        if rebucketed > 0 {
            tracing::info!(target: "todos", "Reclassified {} task(s) on load", rebucketed);
            if let Err(e) = storage::save(&data_path, &data) {
                tracing::warn!(target: "todos", "Could not persist reclassified state: {}", e);
            }
        }

        tracing::info!(
            target: "todos",
            "Session opened: {} task(s), {} folder(s)",
            data.todos.len(),
            data.folders.len()
        );

        Self {
            store: TodoStore::new(data),
            data_path,
        }
    }

    /// The underlying store, for read-side views and queries.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Where this session persists its state.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Owned snapshot of the combined state.
    pub fn snapshot(&self) -> TodoData {
        self.store.read().clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.read().todos.clone()
    }

    pub fn folders(&self) -> Vec<Folder> {
        self.store.read().folders.clone()
    }

    /// Dashboard numbers for the current local day.
    pub fn dashboard(&self) -> DashboardSummary {
        dashboard_summary(&self.store.read())
    }

    pub fn add_task(&self, draft: TaskDraft) -> Result<Task, TodoError> {
        let mut data = self.store.write();
        let task = ops::add_task(&mut data, draft)?;
        storage::save(&self.data_path, &data)?;

        tracing::debug!(target: "todos", "Added task {}", task.id);
        Ok(task)
    }

    pub fn update_task(&self, id: &str, draft: TaskDraft) -> Result<Task, TodoError> {
        let mut data = self.store.write();
        let task = ops::update_task(&mut data, id, draft)?;
        storage::save(&self.data_path, &data)?;
        Ok(task)
    }

    pub fn delete_task(&self, id: &str) -> Result<(), TodoError> {
        let mut data = self.store.write();
        ops::delete_task(&mut data, id)?;
        storage::save(&self.data_path, &data)?;
        Ok(())
    }

    /// Flip a task's completed flag; returns the new value.
    pub fn toggle_task_completed(&self, id: &str) -> Result<bool, TodoError> {
        let mut data = self.store.write();
        let completed = ops::toggle_task_completed(&mut data, id)?;
        storage::save(&self.data_path, &data)?;
        Ok(completed)
    }

    pub fn add_folder(&self, draft: FolderDraft) -> Result<Folder, TodoError> {
        let mut data = self.store.write();
        let folder = ops::add_folder(&mut data, draft)?;
        storage::save(&self.data_path, &data)?;

        tracing::debug!(target: "todos", "Added folder {} ({})", folder.name, folder.id);
        Ok(folder)
    }

    pub fn update_folder(&self, id: &str, draft: FolderDraft) -> Result<Folder, TodoError> {
        let mut data = self.store.write();
        let folder = ops::update_folder(&mut data, id, draft)?;
        storage::save(&self.data_path, &data)?;
        Ok(folder)
    }

    /// Delete a folder. Its tasks are reassigned, never deleted.
    pub fn delete_folder(&self, id: &str) -> Result<(), TodoError> {
        let mut data = self.store.write();
        let reassigned = ops::delete_folder(&mut data, id)?;
        if reassigned > 0 {
            tracing::debug!(
                target: "todos",
                "Reassigned {} task(s) from deleted folder {}",
                reassigned,
                id
            );
        }
        storage::save(&self.data_path, &data)?;
        Ok(())
    }
}
