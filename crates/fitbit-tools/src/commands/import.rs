use std::io::Write;
use std::path::PathBuf;

use activity_core::settings::ImportSettings;
use activity_core::time_utils::SourceClock;
use activity_core::ActivityStore;
use activity_data::json_reader::ingest_json_file;
use activity_data::report::write_activity_csv;
use anyhow::{Context, Result};
use tracing::info;

/// Merge every JSON export into one store, in argument order.
///
/// The first unreadable file or malformed sample aborts the whole load.
pub fn load_json_exports(files: &[PathBuf], clock: &SourceClock) -> Result<ActivityStore> {
    let mut store = ActivityStore::new();
    for path in files {
        ingest_json_file(&mut store, path, clock)
            .with_context(|| format!("Failed to import {}", path.display()))?;
    }
    Ok(store)
}

/// Build the source clock from `settings` and merge its JSON exports.
pub fn import_store(settings: &ImportSettings) -> Result<ActivityStore> {
    let clock = SourceClock::new(&settings.timezone)?;
    info!(
        "Importing {} file(s) in {}",
        settings.files.len(),
        clock.timezone().name()
    );
    load_json_exports(&settings.files, &clock)
}

/// Write the daily CSV for `store` to `out`. Returns the number of rows.
pub fn write_report<W: Write>(store: &ActivityStore, out: W) -> Result<usize> {
    let rows = write_activity_csv(store, out)?;
    info!("Wrote {} daily rows", rows);
    Ok(rows)
}

/// Import the JSON exports named in `settings` and write the daily CSV to
/// `out`. Nothing is written unless every export loads.
pub fn run_import<W: Write>(settings: &ImportSettings, out: W) -> Result<usize> {
    let store = import_store(settings)?;
    write_report(&store, out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
