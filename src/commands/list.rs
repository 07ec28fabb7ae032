use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::Status;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status
    status: Option<Status>,
}

pub fn cmd(args: ListArgs, config: &Config) -> Result<()> {
    let listing = config.store().list(args.status);

    View::tasks(&listing).printstd();
    if listing.tasks.is_empty() {
        match args.status {
            Some(status) => msg_info!(Message::NoTasksWithStatus(status)),
            None => msg_info!(Message::NoTasksFound),
        }
    }

    Ok(())
}
