use super::write_failed;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true, value_parser = NonEmptyStringValueParser::new())]
    description: String,
}

pub fn cmd(args: AddArgs, config: &Config) -> Result<()> {
    let task = config.store().add(&args.description).map_err(write_failed)?;

    msg_success!(Message::TaskAdded(task.id));
    Ok(())
}
