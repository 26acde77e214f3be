use std::path::PathBuf;

use activity_core::settings::{SourcePrecedence, StreakSettings};
use activity_core::ActivityStore;
use activity_data::csv_reader::ingest_csv_file;
use activity_data::sources::{expand_sources, IngestPlan};
use activity_data::streak::{StreakReport, StreakScanner, StreakStop};
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Date format used in streak diagnostics, e.g. `1/15/2024`.
const DISPLAY_DATE: &str = "%-m/%-d/%Y";

/// Expand `paths`, order the CSV sources for `precedence` and merge them
/// into one store.
pub fn load_csv_sources(
    paths: &[PathBuf],
    archive_pattern: &str,
    precedence: SourcePrecedence,
) -> Result<ActivityStore> {
    let files = expand_sources(paths)?;
    let plan = IngestPlan::new(files, archive_pattern, precedence)?;
    if plan.is_empty() {
        warn!("No CSV sources to read");
    }

    let mut store = ActivityStore::new();
    for source in plan.sources() {
        debug!("Reading {:?} source {}", source.kind, source.path.display());
        ingest_csv_file(&mut store, &source.path)
            .with_context(|| format!("Failed to read {}", source.path.display()))?;
    }

    info!(
        "Loaded {} days from {} file(s)",
        store.len(),
        plan.sources().len()
    );
    Ok(store)
}

/// Load the CSV sources named in `settings` and scan for the current streak.
pub fn run_streak(settings: &StreakSettings) -> Result<StreakReport> {
    let store = load_csv_sources(
        &settings.paths,
        &settings.archive_pattern,
        settings.precedence,
    )?;

    let report = StreakScanner::new(settings.step_goal).scan(&store)?;

    match report.stop {
        StreakStop::NoData { date } => {
            info!("No data on {}", date.format(DISPLAY_DATE));
        }
        StreakStop::BelowGoal { date, steps, goal } => {
            info!(
                "Step count of {} is below goal of {} on {}",
                steps,
                goal,
                date.format(DISPLAY_DATE)
            );
        }
    }

    Ok(report)
}

/// The line printed to stdout for `report`.
pub fn streak_sentence(report: &StreakReport) -> String {
    format!("You're on a {} day step streak!", report.days)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
