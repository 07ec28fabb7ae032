//! Task domain types.
//!
//! A [`Task`] is a fixed-shape record persisted as one element of the JSON
//! array in the backing file. Field names on disk use camelCase
//! (`createdAt`, `updatedAt`) and `updatedAt` is written as `null` until
//! the task is first modified.
//!
//! ```rust
//! use task_cli::libs::task::{Status, Task};
//!
//! let task = Task::new(1, "Buy milk", "19-10-2026 09:30:00");
//! assert_eq!(task.status, Status::Todo);
//! assert!(task.updated_at.is_none());
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow state of a task.
///
/// Any status may move to any other, including to itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working in table layouts
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}', expected one of: todo, in-progress, done")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: Status,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl Task {
    /// Builds a fresh `todo` task that has never been updated.
    pub fn new(id: u64, description: &str, created_at: &str) -> Self {
        Task {
            id,
            description: description.to_string(),
            status: Status::Todo,
            created_at: created_at.to_string(),
            updated_at: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}

/// Result of an operation that targets an existing task by id.
///
/// Not-found and already-done are ordinary outcomes, not errors: the
/// caller reports them and the backing file is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated(Task),
    Deleted(Task),
    Marked(Task),
    NotFound(u64),
    AlreadyDone(u64),
}

/// Tasks selected for display together with the description column width.
///
/// The width is measured over the whole collection, not just `tasks`, so
/// a filtered listing keeps the same column layout as the full one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub tasks: Vec<Task>,
    pub description_width: usize,
}
