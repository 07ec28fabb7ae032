//! Runtime configuration.
//!
//! task-cli keeps its whole state in a single JSON file. By default that is
//! `tasks.json` in the current working directory; the global `--file`
//! option points it elsewhere.
//!
//! ```rust
//! use task_cli::libs::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.tasks_file.to_str(), Some("tasks.json"));
//! ```

use crate::db::storage::FileStorage;
use crate::db::tasks::TaskStore;
use std::path::PathBuf;

/// Task file used when no `--file` option is given.
pub const TASKS_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON file holding the task list.
    pub tasks_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: PathBuf::from(TASKS_FILE_NAME),
        }
    }
}

impl Config {
    /// Builds the configuration from command-line overrides.
    pub fn new(tasks_file: Option<PathBuf>) -> Self {
        match tasks_file {
            Some(tasks_file) => Config { tasks_file },
            None => Config::default(),
        }
    }

    /// Opens the task store this configuration points at.
    pub fn store(&self) -> TaskStore<FileStorage> {
        TaskStore::open(&self.tasks_file)
    }
}
