//! Output macros for application messages.
//!
//! Every user-facing line goes through one of these macros. The text is
//! always printed to stdout (or stderr for errors). In debug mode, enabled
//! by setting `TASK_CLI_DEBUG`, the same text is also emitted as a
//! `tracing` event so it lines up with the store's own debug events.
//! `RUST_LOG` alone only tunes logging and never changes what is printed.
//!
//! ```text
//! msg_success!(..) ──▶ println!   (+ tracing::info!  in debug mode)
//! msg_error!(..)   ──▶ eprintln!  (+ tracing::error! in debug mode)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use task_cli::{msg_error, msg_success};
//! use task_cli::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded(1));
//! msg_error!(Message::TaskNotFound(42));
//! ```

use std::sync::OnceLock;

/// Environment variable that enables debug mode.
pub const DEBUG_ENV: &str = "TASK_CLI_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled. The result is cached on first use.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok())
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {{
        let msg = $msg;
        println!("✅ {}", msg);
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", msg);
        }
    }};
}

/// Prints an error message with ❌ prefix.
///
/// Goes to stderr so scripts can keep task output and failures apart.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {{
        let msg = $msg;
        eprintln!("❌ {}", msg);
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", msg);
        }
    }};
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {{
        let msg = $msg;
        println!("ℹ️ {}", msg);
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", msg);
        }
    }};
}

/// Debug-only message with 🔍 prefix. Prints nothing in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
