use super::error::StoreError;
use super::storage::{FileStorage, Storage};
use crate::libs::formatter;
use crate::libs::task::{Listing, Outcome, Status, Task};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::PathBuf;
use tracing::{debug, warn};

const JSON_INDENT: &[u8] = b"    ";

/// Returns one more than the highest id in `tasks`, or 1 for an empty list.
///
/// Only the current snapshot is considered. Deleting the task with the
/// highest id makes that id available again. Fails once the highest id is
/// `u64::MAX`.
pub fn next_id(tasks: &[Task]) -> Result<u64, StoreError> {
    match tasks.iter().map(|task| task.id).max() {
        Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
        None => Ok(1),
    }
}

/// Position of the first task with the given id.
pub fn find_index(id: u64, tasks: &[Task]) -> Option<usize> {
    tasks.iter().position(|task| task.id == id)
}

/// Length of the longest description, counted in characters.
fn description_width(tasks: &[Task]) -> usize {
    tasks.iter().map(|task| task.description.chars().count()).max().unwrap_or(0)
}

/// Task operations over a [`Storage`] backend.
pub struct TaskStore<S: Storage> {
    storage: S,
}

impl TaskStore<FileStorage> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStorage::new(path))
    }
}

impl<S: Storage> TaskStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the full collection.
    ///
    /// A missing, unreadable or undecodable document is treated as an empty
    /// collection. The failure is logged but never returned.
    pub fn load(&self) -> Vec<Task> {
        let contents = match self.storage.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!("no task file yet, starting with an empty list");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "cannot read task file, starting with an empty list");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(error = %e, "task file is not a valid task list, starting with an empty list");
                Vec::new()
            }
        }
    }

    /// Replaces the stored collection with `tasks`.
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
        tasks.serialize(&mut serializer)?;
        let contents = String::from_utf8(buf)?;

        self.storage.write(&contents)?;
        debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Appends a new `todo` task and returns it.
    pub fn add(&mut self, description: &str) -> Result<Task, StoreError> {
        let mut tasks = self.load();
        let task = Task::new(next_id(&tasks)?, description, &formatter::now());

        tasks.push(task.clone());
        self.save(&tasks)?;
        debug!(id = task.id, "added task");
        Ok(task)
    }

    /// Tasks matching `status` (all tasks when `None`), in stored order.
    pub fn list(&self, status: Option<Status>) -> Listing {
        let tasks = self.load();
        let description_width = description_width(&tasks);

        let tasks = match status {
            Some(status) => tasks.into_iter().filter(|task| task.status == status).collect(),
            None => tasks,
        };

        Listing {
            tasks,
            description_width,
        }
    }

    /// Changes the description of a task that is not done yet.
    pub fn update(&mut self, id: u64, description: &str) -> Result<Outcome, StoreError> {
        let mut tasks = self.load();
        let Some(index) = find_index(id, &tasks) else {
            return Ok(Outcome::NotFound(id));
        };
        if tasks[index].is_done() {
            return Ok(Outcome::AlreadyDone(id));
        }

        let task = &mut tasks[index];
        task.description = description.to_string();
        task.updated_at = Some(formatter::now());
        let updated = task.clone();

        self.save(&tasks)?;
        debug!(id, "updated task description");
        Ok(Outcome::Updated(updated))
    }

    pub fn delete(&mut self, id: u64) -> Result<Outcome, StoreError> {
        let mut tasks = self.load();
        let Some(index) = find_index(id, &tasks) else {
            return Ok(Outcome::NotFound(id));
        };

        let removed = tasks.remove(index);
        self.save(&tasks)?;
        debug!(id, "deleted task");
        Ok(Outcome::Deleted(removed))
    }

    /// Sets the status of a task. Every transition is allowed.
    pub fn mark(&mut self, id: u64, status: Status) -> Result<Outcome, StoreError> {
        let mut tasks = self.load();
        let Some(index) = find_index(id, &tasks) else {
            return Ok(Outcome::NotFound(id));
        };

        let task = &mut tasks[index];
        task.status = status;
        task.updated_at = Some(formatter::now());
        let marked = task.clone();

        self.save(&tasks)?;
        debug!(id, status = %status, "marked task");
        Ok(Outcome::Marked(marked))
    }
}
