//! Command-line dispatcher.
//!
//! Parses arguments with `clap`, validates them (argument counts, numeric
//! ids, status names, non-empty descriptions) and hands off to the task
//! store. Each subcommand lives in its own module exposing `cmd`.

pub mod add;
pub mod delete;
pub mod list;
pub mod mark;
pub mod update;

use crate::db::error::StoreError;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Outcome, Status};
use crate::{msg_debug, msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks or tasks with a specific status")]
    List(list::ListArgs),
    #[command(about = "Update a task description")]
    Update(update::UpdateArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Set the status of a task")]
    Mark(mark::MarkArgs),
    #[command(about = "Mark a task as todo")]
    MarkTodo(mark::MarkIdArgs),
    #[command(about = "Mark a task as in progress")]
    MarkInProgress(mark::MarkIdArgs),
    #[command(about = "Mark a task as done")]
    MarkDone(mark::MarkIdArgs),
}

#[derive(Debug, Parser)]
#[command(name = "task-cli", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// JSON file holding the task list
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let config = Config::new(self.file);
        msg_debug!(Message::UsingTaskFile(config.tasks_file.display().to_string()));

        match self.command {
            Commands::Add(args) => add::cmd(args, &config),
            Commands::List(args) => list::cmd(args, &config),
            Commands::Update(args) => update::cmd(args, &config),
            Commands::Delete(args) => delete::cmd(args, &config),
            Commands::Mark(args) => mark::cmd(args, &config),
            Commands::MarkTodo(args) => mark::cmd(args.with_status(Status::Todo), &config),
            Commands::MarkInProgress(args) => mark::cmd(args.with_status(Status::InProgress), &config),
            Commands::MarkDone(args) => mark::cmd(args.with_status(Status::Done), &config),
        }
    }
}

/// Prints the result of an operation on an existing task.
///
/// Missing tasks and refused updates are reported, not returned as errors.
fn report(outcome: Outcome) {
    match outcome {
        Outcome::Updated(task) => msg_success!(Message::TaskUpdated(task.id)),
        Outcome::Deleted(task) => msg_success!(Message::TaskDeleted(task.id)),
        Outcome::Marked(task) => msg_success!(Message::TaskMarked(task.id, task.status)),
        Outcome::NotFound(id) => msg_error!(Message::TaskNotFound(id)),
        Outcome::AlreadyDone(id) => msg_error!(Message::TaskAlreadyDone(id)),
    }
}

fn write_failed(e: StoreError) -> anyhow::Error {
    msg_error_anyhow!(Message::TaskFileWriteFailed(e.to_string()))
}
