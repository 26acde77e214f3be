//! Fitbit JSON step exports.
//!
//! Each export is an array of sub-daily samples:
//! `[{"dateTime": "1/15/24 08:00:00", "value": "500"}, ...]`. Samples are
//! bucketed by calendar date and summed into the store's `steps`.
//!
//! The reader fails fast: the first malformed sample aborts the file.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use activity_core::error::{ActivityError, Result};
use activity_core::time_utils::SourceClock;
use activity_core::ActivityStore;
use serde::Deserialize;
use tracing::debug;

/// One sub-daily step sample as it appears in the export.
#[derive(Debug, Clone, Deserialize)]
pub struct StepSample {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub value: String,
}

/// What a JSON ingestion contributed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub entries_read: usize,
    pub dates_touched: usize,
}

/// Parse the samples of one export document.
pub fn parse_step_samples<R: Read>(reader: R) -> Result<Vec<StepSample>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Add every sample's steps to the store under its calendar date.
///
/// Stops at the first sample whose timestamp or value does not parse;
/// samples before it have already been applied, so callers treat an error
/// as fatal for the whole run.
pub fn ingest_step_samples(
    store: &mut ActivityStore,
    samples: &[StepSample],
    clock: &SourceClock,
) -> Result<IngestSummary> {
    let mut dates = HashSet::new();

    for sample in samples {
        let date = clock.calendar_date(&sample.date_time)?;
        let steps = parse_sample_value(&sample.value)?;
        store.upsert(date, |activity| activity.add_steps(steps));
        dates.insert(date);
    }

    Ok(IngestSummary {
        entries_read: samples.len(),
        dates_touched: dates.len(),
    })
}

/// Sample values are plain decimal integers; unlike CSV cells they carry no
/// separators or padding.
fn parse_sample_value(raw: &str) -> Result<u32> {
    raw.parse::<u32>().map_err(|e| ActivityError::ValueParse {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Read a JSON export file and merge its samples into `store`.
pub fn ingest_json_file(
    store: &mut ActivityStore,
    path: &Path,
    clock: &SourceClock,
) -> Result<IngestSummary> {
    let file = std::fs::File::open(path).map_err(|source| ActivityError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_step_samples(std::io::BufReader::new(file))?;
    let summary = ingest_step_samples(store, &samples, clock)?;

    debug!(
        "File {}: {} samples over {} dates",
        path.display(),
        summary.entries_read,
        summary.dates_touched
    );

    Ok(summary)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
