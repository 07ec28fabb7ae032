use task_cli::commands::Cli;
use task_cli::libs::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu()
}
