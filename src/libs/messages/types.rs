use crate::libs::task::Status;

/// Every user-facing line printed by task-cli.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(u64),              // id
    TaskUpdated(u64),            // id
    TaskDeleted(u64),            // id
    TaskMarked(u64, Status),     // id, new status
    TaskNotFound(u64),           // id
    TaskAlreadyDone(u64),        // id
    NoTasksFound,
    NoTasksWithStatus(Status),

    // === STORAGE MESSAGES ===
    TaskFileWriteFailed(String), // error message
    UsingTaskFile(String),       // path
}
