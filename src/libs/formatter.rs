//! Timestamp formatting for task records.
//!
//! Task timestamps are stored as plain strings in local time using the
//! `DD-MM-YYYY HH:MM:SS` layout, e.g. `19-10-2026 14:05:09`. They are
//! written once on creation (`createdAt`) and refreshed on every change
//! (`updatedAt`), and are never parsed back by the application.
//!
//! ```rust
//! use chrono::{Local, TimeZone};
//! use task_cli::libs::formatter::format_timestamp;
//!
//! let at = Local.with_ymd_and_hms(2026, 10, 19, 14, 5, 9).unwrap();
//! assert_eq!(format_timestamp(&at), "19-10-2026 14:05:09");
//! ```

use chrono::{DateTime, Local};

/// `strftime` pattern for every timestamp written to the backing file.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Placeholder shown in listings for tasks that were never updated.
pub const NO_UPDATE: &str = "No Update";

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time in the task timestamp layout.
pub fn now() -> String {
    format_timestamp(&Local::now())
}

/// Text for the "Updated At" column.
pub fn format_updated_at(updated_at: Option<&str>) -> &str {
    updated_at.unwrap_or(NO_UPDATE)
}
