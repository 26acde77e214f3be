//! Ingestion and reporting for the Fitbit activity tools.
//!
//! Reads JSON step exports and CSV activity exports into an
//! [`ActivityStore`](activity_core::ActivityStore), orders CSV sources by
//! precedence, writes the daily CSV report and computes the step streak.

pub mod csv_reader;
pub mod json_reader;
pub mod report;
pub mod schema;
pub mod sources;
pub mod streak;

pub use activity_core as core;
