use super::{report, write_failed};
use crate::libs::config::Config;
use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the task to update
    id: u64,
    /// New task description
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    description: String,
}

pub fn cmd(args: UpdateArgs, config: &Config) -> Result<()> {
    let outcome = config.store().update(args.id, &args.description).map_err(write_failed)?;

    report(outcome);
    Ok(())
}
