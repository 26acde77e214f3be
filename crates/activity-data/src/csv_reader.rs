//! Fitbit CSV activity exports.
//!
//! Archive dumps hold several sections (`Body`, `Foods`, `Activities`, ...),
//! each opened by a single-cell title row. Only the `Activities` section is
//! read. Every row in it is a full daily record that replaces whatever the
//! store held for that date, so the last file ingested wins.
//!
//! Unlike the JSON reader this one is lenient: a row with an unreadable date,
//! or one that is not valid UTF-8, is logged and skipped.

use std::io::Read;
use std::path::Path;

use activity_core::error::{ActivityError, Result};
use activity_core::{Activity, ActivityStore};
use csv::{ByteRecord, StringRecord};
use tracing::{debug, warn};

use crate::schema::{self, ACTIVITY_COLUMNS, DATE_HEADER, SECTION_MARKER};

/// Rows recovered from one CSV document.
#[derive(Debug, Clone, Default)]
pub struct CsvSection {
    pub rows: Vec<Activity>,
    pub rows_skipped: usize,
}

/// What a CSV ingestion contributed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvIngestSummary {
    pub rows_applied: usize,
    pub rows_skipped: usize,
}

/// Parse the activities section of a CSV document.
///
/// When the document contains an `Activities` marker row, reading starts
/// after it; otherwise it starts at the first row. A `Date ...` header row is
/// skipped. Once data rows have been seen, the next single-cell row ends the
/// section.
pub fn parse_activity_csv<R: Read>(reader: R) -> Result<CsvSection> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = rdr
        .byte_records()
        .map(|record| record.map(decode_record))
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

    let mut in_section = !records.iter().flatten().any(is_marker);
    let mut data_started = false;
    let mut section = CsvSection::default();

    for decoded in &records {
        let record = match decoded {
            Ok(record) => record,
            Err(line) => {
                if in_section {
                    warn!("Line {}: not valid UTF-8; skipping", line);
                    data_started = true;
                    section.rows_skipped += 1;
                }
                continue;
            }
        };

        if !in_section {
            in_section = is_marker(record);
            continue;
        }

        if record.len() == 1 {
            if data_started {
                break;
            }
            continue;
        }

        if record.get(0) == Some(DATE_HEADER) {
            continue;
        }

        data_started = true;
        match parse_row(record) {
            Some(activity) => section.rows.push(activity),
            None => section.rows_skipped += 1,
        }
    }

    Ok(section)
}

/// Store every row, replacing existing records for the same dates.
pub fn ingest_activity_rows(store: &mut ActivityStore, rows: Vec<Activity>) -> usize {
    let count = rows.len();
    for row in rows {
        store.replace(row);
    }
    count
}

/// Read a CSV export file and merge its rows into `store`.
pub fn ingest_csv_file(store: &mut ActivityStore, path: &Path) -> Result<CsvIngestSummary> {
    let file = std::fs::File::open(path).map_err(|source| ActivityError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let section = parse_activity_csv(std::io::BufReader::new(file))?;
    let rows_skipped = section.rows_skipped;
    let rows_applied = ingest_activity_rows(store, section.rows);

    debug!(
        "File {}: {} rows applied, {} skipped",
        path.display(),
        rows_applied,
        rows_skipped
    );

    Ok(CsvIngestSummary {
        rows_applied,
        rows_skipped,
    })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// The decoded row, or the line number of a row that is not valid UTF-8.
fn decode_record(record: ByteRecord) -> std::result::Result<StringRecord, u64> {
    StringRecord::from_byte_record(record).map_err(|e| {
        e.into_byte_record()
            .position()
            .map(|p| p.line())
            .unwrap_or(0)
    })
}

fn is_marker(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0) == Some(SECTION_MARKER)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Build an [`Activity`] from a data row, or `None` when the row is skipped.
///
/// A metric that fails to parse is logged and left at zero.
fn parse_row(record: &StringRecord) -> Option<Activity> {
    if record.len() < schema::row_width() {
        warn!(
            "Line {}: expected {} columns, found {}; skipping",
            line_of(record),
            schema::row_width(),
            record.len()
        );
        return None;
    }

    let raw_date = record.get(0).unwrap_or("");
    let Some(date) = schema::parse_date(raw_date) else {
        warn!("Failed to parse date {:?} on line {}", raw_date, line_of(record));
        return None;
    };

    let mut activity = Activity::empty(date);
    for (column, raw) in ACTIVITY_COLUMNS.iter().zip(record.iter().skip(1)) {
        if let Err(e) = (column.parse)(&mut activity, raw) {
            warn!(
                "Line {}: {} for {}: {}",
                line_of(record),
                column.name,
                date,
                e
            );
        }
    }

    Some(activity)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
