use super::{report, write_failed};
use crate::libs::config::Config;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: u64,
}

pub fn cmd(args: DeleteArgs, config: &Config) -> Result<()> {
    let outcome = config.store().delete(args.id).map_err(write_failed)?;

    report(outcome);
    Ok(())
}
