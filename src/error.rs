use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(
        "Invalid date \"{input}\" (expected HH:MM, YYYY-MM-DD [HH:MM] or DD-MM-YYYY [HH:MM])"
    )]
    InvalidFormat { input: String },

    #[error("Date \"{input}\" is not a valid calendar date or time")]
    CalendarInvalid { input: String },

    #[error("Invalid timezone: {input} (expected local, utc or an offset like +02:00)")]
    InvalidTimezone { input: String },

    #[error("Record file name \"{name}\" has no YYYYMMDD-HHMMSS stamp")]
    MalformedRecordName { name: String },

    #[error("Invalid project mapping {}: {reason}", .path.display())]
    ProjectMapping { path: PathBuf, reason: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
