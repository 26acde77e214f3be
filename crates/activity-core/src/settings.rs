use clap::{Args, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::time_utils::{resolve_timezone_name, DEFAULT_SOURCE_TIMEZONE};

/// Step goal used when none is given.
pub const DEFAULT_STEP_GOAL: u32 = 10_000;

/// Pattern identifying the bulk account archive among CSV sources.
pub const DEFAULT_ARCHIVE_PATTERN: &str = "MyFitbitData";

// ── Shared options ─────────────────────────────────────────────────────────────

/// Logging options shared by both tools.
#[derive(Args, Debug, Clone)]
pub struct LogOptions {
    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path (default: stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl LogOptions {
    /// `--debug` overrides the log level.
    fn resolve(&mut self) {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
    }
}

/// Which class of CSV source wins when both carry the same date.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourcePrecedence {
    /// Individual exports override the archive (archive is read first).
    #[default]
    Supplementary,
    /// The archive overrides individual exports (archive is read last).
    Archive,
}

// ── fitbit-import ──────────────────────────────────────────────────────────────

/// Convert Fitbit JSON step exports to a daily activity CSV
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fitbit-import",
    about = "Convert Fitbit JSON step exports to a daily activity CSV",
    version
)]
pub struct ImportSettings {
    /// JSON export files to read, in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Timezone the export was stamped in ("auto" for the system timezone)
    #[arg(long, default_value = DEFAULT_SOURCE_TIMEZONE)]
    pub timezone: String,

    /// Write the CSV here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogOptions,
}

impl ImportSettings {
    /// Parse the process arguments and resolve `"auto"` values.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    /// Same as [`load`](Self::load) over an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut settings = Self::parse_from(args);
        settings.timezone = resolve_timezone_name(&settings.timezone);
        settings.log.resolve();
        settings
    }
}

// ── fitbit-stepstreak ──────────────────────────────────────────────────────────

/// Compute the current step streak from Fitbit CSV exports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fitbit-stepstreak",
    about = "Compute the current step streak from Fitbit CSV exports",
    version
)]
pub struct StreakSettings {
    /// CSV files or directories of CSV files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Number of steps in goal
    #[arg(long, default_value_t = DEFAULT_STEP_GOAL)]
    pub step_goal: u32,

    /// Which source wins on dates present in both the archive and an export
    #[arg(long, value_enum, default_value_t = SourcePrecedence::Supplementary)]
    pub precedence: SourcePrecedence,

    /// Regular expression matched against paths to recognise the archive
    #[arg(long, default_value = DEFAULT_ARCHIVE_PATTERN)]
    pub archive_pattern: String,

    #[command(flatten)]
    pub log: LogOptions,
}

impl StreakSettings {
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut settings = Self::parse_from(args);
        settings.log.resolve();
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
