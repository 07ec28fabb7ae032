//! `Display` implementation for task-cli messages.
//!
//! All user-facing text lives here so that wording stays consistent across
//! commands. Messages carrying ids or statuses interpolate them directly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task added successfully (ID: {})", id),
            Message::TaskUpdated(id) => format!("Task with ID {} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task with ID {} deleted successfully", id),
            Message::TaskMarked(id, status) => format!("Task with ID {} marked as {}", id, status),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TaskAlreadyDone(id) => format!("Task with ID {} is already marked as done", id),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoTasksWithStatus(status) => format!("No tasks with status '{}'.", status),

            // === STORAGE MESSAGES ===
            Message::TaskFileWriteFailed(error) => format!("Failed to write task file: {}", error),
            Message::UsingTaskFile(path) => format!("Using task file {}", path),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Status;

    #[test]
    fn task_messages_name_the_id() {
        assert_eq!(Message::TaskNotFound(7).to_string(), "Task with ID 7 not found");
        assert_eq!(Message::TaskAlreadyDone(2).to_string(), "Task with ID 2 is already marked as done");
        assert_eq!(Message::TaskMarked(3, Status::InProgress).to_string(), "Task with ID 3 marked as in-progress");
    }
}
