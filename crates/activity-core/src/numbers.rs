//! Numeric field parsing for tracker exports.
//!
//! Archive CSVs format counters with thousands separators (`"1,234"`); the
//! JSON exports use plain digit strings.

use crate::error::{ActivityError, Result};

/// Remove thousands separators from `raw`.
///
/// # Examples
///
/// ```
/// use activity_core::numbers::strip_thousands;
///
/// assert_eq!(strip_thousands("1,234,567"), "1234567");
/// assert_eq!(strip_thousands("12.50"), "12.50");
/// ```
pub fn strip_thousands(raw: &str) -> String {
    raw.chars().filter(|c| *c != ',').collect()
}

/// Parse a non-negative integer counter, tolerating thousands separators and
/// surrounding whitespace.
///
/// # Examples
///
/// ```
/// use activity_core::numbers::parse_counter;
///
/// assert_eq!(parse_counter("12,345").unwrap(), 12_345);
/// assert!(parse_counter("-3").is_err());
/// ```
pub fn parse_counter(raw: &str) -> Result<u32> {
    strip_thousands(raw.trim())
        .parse::<u32>()
        .map_err(|e| ActivityError::ValueParse {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a non-negative real distance, tolerating thousands separators.
pub fn parse_distance(raw: &str) -> Result<f64> {
    let value = strip_thousands(raw.trim())
        .parse::<f64>()
        .map_err(|e| ActivityError::ValueParse {
            value: raw.to_string(),
            reason: e.to_string(),
        })?;

    if !value.is_finite() || value < 0.0 {
        return Err(ActivityError::ValueParse {
            value: raw.to_string(),
            reason: "distance must be a finite, non-negative number".to_string(),
        });
    }
    Ok(value)
}

/// Format a distance with two decimal places, as written to reports.
///
/// # Examples
///
/// ```
/// use activity_core::numbers::format_distance;
///
/// assert_eq!(format_distance(5.0), "5.00");
/// assert_eq!(format_distance(3.14159), "3.14");
/// ```
pub fn format_distance(value: f64) -> String {
    format!("{:.2}", value)
}
