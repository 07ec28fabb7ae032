//! # task-cli
//!
//! A command-line task tracker that keeps its task list in a local JSON
//! file.
//!
//! ## Features
//!
//! - **Task Management**: Add, update, delete and list tasks
//! - **Status Tracking**: Move tasks between `todo`, `in-progress` and `done`
//! - **Plain Storage**: The whole list is one human-readable JSON file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
