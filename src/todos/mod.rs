pub mod category;
pub mod display;
pub mod errors;
pub mod helpers;
pub mod ops;
pub mod queries;
pub mod stats;
pub mod storage;
pub mod types;

use std::sync::RwLock;
use types::TodoData;

/// Thread-safe in-memory store, persisted as a single JSON file.
pub struct TodoStore(pub RwLock<TodoData>);

impl TodoStore {
    pub fn new(data: TodoData) -> Self {
        Self(RwLock::new(data))
    }

    pub fn read(&self) -> std::sync::RwLockReadGuard<'_, TodoData> {
        self.0.read().unwrap()
    }

    pub fn write(&self) -> std::sync::RwLockWriteGuard<'_, TodoData> {
        self.0.write().unwrap()
    }
}
