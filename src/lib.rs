//! Core of a single-user todo manager: folders, date-bucketed tasks and a
//! JSON-backed session for a presentation layer to drive.
//!
//! State lives in a [`todos::TodoStore`] owned by a [`Session`]. Every
//! mutation validates its input, re-derives the affected task's category
//! and writes the combined state back to a single data file.

pub mod logging;
pub mod paths;
pub mod session;
pub mod todos;

pub use session::Session;
pub use todos::category::{classify, Category};
pub use todos::errors::{StorageError, TodoError};
pub use todos::types::{Folder, FolderDraft, Task, TaskDraft, TodoData};
