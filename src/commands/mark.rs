use super::{report, write_failed};
use crate::libs::config::Config;
use crate::libs::task::Status;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MarkArgs {
    /// ID of the task to mark
    id: u64,
    /// New status
    status: Status,
}

/// Arguments of the `mark-<status>` shorthands.
#[derive(Debug, Args)]
pub struct MarkIdArgs {
    /// ID of the task to mark
    id: u64,
}

impl MarkIdArgs {
    pub fn with_status(self, status: Status) -> MarkArgs {
        MarkArgs { id: self.id, status }
    }
}

pub fn cmd(args: MarkArgs, config: &Config) -> Result<()> {
    let outcome = config.store().mark(args.id, args.status).map_err(write_failed)?;

    report(outcome);
    Ok(())
}
