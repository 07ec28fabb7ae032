//! Persistence layer for the task list.
//!
//! The whole task collection lives in one JSON document. Every operation
//! loads it fresh, changes it in memory and writes it back in full; nothing
//! is cached between calls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::db::tasks::TaskStore;
//! use task_cli::libs::task::Status;
//!
//! let mut store = TaskStore::open("tasks.json");
//! let task = store.add("Buy milk")?;
//! store.mark(task.id, Status::Done)?;
//! # Ok::<(), task_cli::db::error::StoreError>(())
//! ```

pub mod error;
pub mod storage;
pub mod tasks;
