//! Core library modules for task-cli.
//!
//! - **Domain**: task records, statuses and operation outcomes
//! - **Presentation**: timestamp formatting, table rendering, messages
//! - **Infrastructure**: configuration and logging setup
//!
//! ```rust
//! use task_cli::libs::task::{Status, Task};
//!
//! let task = Task::new(1, "Review code", "19-10-2026 10:00:00");
//! assert_eq!(task.status, Status::Todo);
//! ```

pub mod config;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
