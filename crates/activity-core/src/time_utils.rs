use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone as _};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{ActivityError, Result};

/// Timezone the tracker account exports in unless told otherwise.
pub const DEFAULT_SOURCE_TIMEZONE: &str = "America/Los_Angeles";

/// Wall-clock formats seen in tracker exports, tried in order.
///
/// The two-digit year form must come first: `%Y` would happily read `24` as
/// the year 24.
const LOCAL_FORMATS: &[&str] = &[
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

// ── System timezone detection ─────────────────────────────────────────────────

/// Detect the IANA timezone name of the running system.
///
/// Falls back to `"UTC"` if detection fails.
pub fn get_system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

/// Resolve the `"auto"` sentinel to the system timezone; other names pass
/// through unchanged.
pub fn resolve_timezone_name(name: &str) -> String {
    if name.eq_ignore_ascii_case("auto") {
        get_system_timezone()
    } else {
        name.to_string()
    }
}

// ── SourceClock ───────────────────────────────────────────────────────────────

/// Buckets export timestamps into calendar dates of the exporting account.
///
/// Exports are stamped in the account's configured timezone, not UTC.
/// Bucketing them in any other zone moves samples near midnight onto the
/// neighbouring day.
#[derive(Debug, Clone, Copy)]
pub struct SourceClock {
    tz: Tz,
}

impl SourceClock {
    /// Build a clock for the IANA timezone `tz_name` (or `"auto"`).
    pub fn new(tz_name: &str) -> Result<Self> {
        let resolved = resolve_timezone_name(tz_name);
        let tz = resolved
            .parse::<Tz>()
            .map_err(|_| ActivityError::InvalidTimezone(resolved.clone()))?;
        debug!("Bucketing timestamps in {}", tz.name());
        Ok(Self { tz })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Validate that `tz_name` is a recognised IANA timezone identifier.
    pub fn validate_timezone(tz_name: &str) -> bool {
        tz_name.parse::<Tz>().is_ok()
    }

    /// Calendar date, in this clock's timezone, of the timestamp `raw`.
    ///
    /// Timestamps with an explicit offset (RFC 3339) are converted into the
    /// timezone first. Offset-free timestamps are wall-clock time in the
    /// timezone: an ambiguous time resolves to its earlier instant, and a
    /// time skipped by a DST jump keeps its wall-clock date.
    pub fn calendar_date(&self, raw: &str) -> Result<NaiveDate> {
        let s = raw.trim();

        if let Some(instant) = parse_with_offset(s) {
            return Ok(instant.with_timezone(&self.tz).date_naive());
        }

        let naive =
            parse_wall_clock(s).ok_or_else(|| ActivityError::TimestampParse(raw.to_string()))?;

        Ok(self
            .tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.date_naive())
            .unwrap_or_else(|| naive.date()))
    }
}

impl Default for SourceClock {
    fn default() -> Self {
        Self {
            tz: Tz::America__Los_Angeles,
        }
    }
}

fn parse_with_offset(s: &str) -> Option<DateTime<chrono::FixedOffset>> {
    let normalised = match s.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => s.to_string(),
    };
    DateTime::parse_from_rfc3339(&normalised).ok()
}

fn parse_wall_clock(s: &str) -> Option<NaiveDateTime> {
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
