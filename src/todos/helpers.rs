use super::types::{Folder, Task, TodoData};

pub fn find_task<'a>(data: &'a TodoData, id: &str) -> Option<&'a Task> {
    data.todos.iter().find(|task| task.id == id)
}

pub fn find_task_mut<'a>(data: &'a mut TodoData, id: &str) -> Option<&'a mut Task> {
    data.todos.iter_mut().find(|task| task.id == id)
}

pub fn find_folder<'a>(data: &'a TodoData, id: &str) -> Option<&'a Folder> {
    data.folders.iter().find(|folder| folder.id == id)
}

pub fn find_folder_mut<'a>(data: &'a mut TodoData, id: &str) -> Option<&'a mut Folder> {
    data.folders.iter_mut().find(|folder| folder.id == id)
}
