//! CSV source discovery and ingestion ordering.
//!
//! CSV rows overwrite by date, so the order files are read in decides which
//! source wins a shared date. [`IngestPlan`] turns the caller's
//! [`SourcePrecedence`] into that order.

use std::path::{Path, PathBuf};

use activity_core::error::{ActivityError, Result};
use activity_core::settings::SourcePrecedence;
use regex::Regex;
use tracing::{debug, warn};

// ── Discovery ─────────────────────────────────────────────────────────────────

/// Expand each argument into CSV files, keeping argument order.
///
/// A directory contributes its immediate `.csv` files (hidden files skipped,
/// sorted by path); any other path is passed through as given.
pub fn expand_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = find_csv_files(path)?;
            if found.is_empty() {
                warn!("No CSV files found in {}", path.display());
            }
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Immediate, non-hidden `.csv` files of `dir`, sorted by path.
pub fn find_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ActivityError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() && is_visible_csv(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_visible_csv(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true);
    let csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    !hidden && csv
}

// ── Ordering ──────────────────────────────────────────────────────────────────

/// Role of a CSV source when dates overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The bulk account archive.
    Archive,
    /// An individual export downloaded from the dashboard.
    Supplementary,
}

/// A CSV source and its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub kind: SourceKind,
}

/// Ingestion order for CSV sources.
///
/// The losing class of source is read first and the winning class last;
/// within a class the discovery order is kept.
#[derive(Debug, Clone)]
pub struct IngestPlan {
    sources: Vec<Source>,
}

impl IngestPlan {
    /// Classify `files` against `archive_pattern` and order them for
    /// `precedence`.
    pub fn new(
        files: Vec<PathBuf>,
        archive_pattern: &str,
        precedence: SourcePrecedence,
    ) -> Result<Self> {
        let pattern = Regex::new(archive_pattern)
            .map_err(|e| ActivityError::InvalidPattern(e.to_string()))?;

        let (archive, supplementary): (Vec<Source>, Vec<Source>) = files
            .into_iter()
            .map(|path| {
                let kind = if pattern.is_match(&path.to_string_lossy()) {
                    SourceKind::Archive
                } else {
                    SourceKind::Supplementary
                };
                Source { path, kind }
            })
            .partition(|s| s.kind == SourceKind::Archive);

        debug!(
            "{} archive and {} supplementary sources, {:?} wins",
            archive.len(),
            supplementary.len(),
            precedence
        );

        let sources = match precedence {
            SourcePrecedence::Supplementary => archive.into_iter().chain(supplementary).collect(),
            SourcePrecedence::Archive => supplementary.into_iter().chain(archive).collect(),
        };

        Ok(Self { sources })
    }

    /// Sources in the order they must be ingested.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
