//! Column layout of the Fitbit "Activities" CSV section.
//!
//! Both the CSV reader and the report emitter walk [`ACTIVITY_COLUMNS`], so
//! a change in the export layout is made here only.

use activity_core::error::Result;
use activity_core::numbers::{format_distance, parse_counter, parse_distance};
use activity_core::Activity;
use chrono::NaiveDate;

/// Literal row opening the activities section.
pub const SECTION_MARKER: &str = "Activities";

/// First cell of the header row inside the section.
pub const DATE_HEADER: &str = "Date";

/// Date format written to reports. Parsing also accepts non-padded
/// month and day (`2024-1-5`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One metric column following the date column.
pub struct Column {
    pub name: &'static str,
    pub parse: fn(&mut Activity, &str) -> Result<()>,
    pub format: fn(&Activity) -> String,
}

/// Metric columns in export order; the date column precedes them.
pub const ACTIVITY_COLUMNS: &[Column] = &[
    Column {
        name: "Calories Burned",
        parse: |a, v| {
            a.calories_burned = parse_counter(v)?;
            Ok(())
        },
        format: |a| a.calories_burned.to_string(),
    },
    Column {
        name: "Steps",
        parse: |a, v| {
            a.steps = parse_counter(v)?;
            Ok(())
        },
        format: |a| a.steps.to_string(),
    },
    Column {
        name: "Distance",
        parse: |a, v| {
            a.distance = parse_distance(v)?;
            Ok(())
        },
        format: |a| format_distance(a.distance),
    },
    Column {
        name: "Floors",
        parse: |a, v| {
            a.floors = parse_counter(v)?;
            Ok(())
        },
        format: |a| a.floors.to_string(),
    },
    Column {
        name: "Minutes Sedentary",
        parse: |a, v| {
            a.minutes_sedentary = parse_counter(v)?;
            Ok(())
        },
        format: |a| a.minutes_sedentary.to_string(),
    },
    Column {
        name: "Minutes Lightly Active",
        parse: |a, v| {
            a.minutes_lightly_active = parse_counter(v)?;
            Ok(())
        },
        format: |a| a.minutes_lightly_active.to_string(),
    },
    Column {
        name: "Minutes Fairly Active",
        parse: |a, v| {
            a.minutes_fairly_active = parse_counter(v)?;
            Ok(())
        },
        format: |a| a.minutes_fairly_active.to_string(),
    },
    Column {
        name: "Minutes Very Active",
        parse: |a, v| {
            a.minutes_very_active = parse_counter(v)?;
            Ok(())
        },
        format: |a| a.minutes_very_active.to_string(),
    },
    Column {
        name: "Activity Calories",
        parse: |a, v| {
            a.activity_calories = parse_counter(v)?;
            Ok(())
        },
        format: |a| a.activity_calories.to_string(),
    },
];

/// Date column plus every metric column.
pub fn row_width() -> usize {
    1 + ACTIVITY_COLUMNS.len()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render `activity` as a report row in column order.
pub fn format_row(activity: &Activity) -> Vec<String> {
    std::iter::once(format_date(activity.date))
        .chain(ACTIVITY_COLUMNS.iter().map(|c| (c.format)(activity)))
        .collect()
}
