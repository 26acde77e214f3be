use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the activity tools.
#[derive(Error, Debug)]
pub enum ActivityError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory argument could not be listed.
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A CSV document could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A numeric field could not be parsed.
    #[error("Invalid value \"{value}\": {reason}")]
    ValueParse { value: String, reason: String },

    /// A timezone name is not a recognised IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The archive source pattern is not a valid regular expression.
    #[error("Invalid archive pattern: {0}")]
    InvalidPattern(String),

    /// The streak scanner was handed a store without any dates.
    #[error("No activity data loaded; cannot compute a streak")]
    EmptyStore,

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the activity crates.
pub type Result<T> = std::result::Result<T, ActivityError>;
