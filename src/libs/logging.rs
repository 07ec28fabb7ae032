//! Tracing subscriber setup.
//!
//! Logging stays off unless `RUST_LOG` or `TASK_CLI_DEBUG` is set. Logs go
//! to stderr and never replace the regular output on stdout. The filter
//! comes from `RUST_LOG` and falls back to `task_cli=debug` when only
//! `TASK_CLI_DEBUG` is set.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "task_cli=debug";

pub fn is_enabled() -> bool {
    is_debug_mode() || std::env::var(EnvFilter::DEFAULT_ENV).is_ok()
}

pub fn init() {
    if !is_enabled() {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // a subscriber may already be installed, e.g. by a test harness
    let _ = tracing::subscriber::set_global_default(subscriber);
}
