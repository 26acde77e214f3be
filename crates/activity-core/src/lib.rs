//! Shared data model for the Fitbit activity tools.
//!
//! Holds the date-keyed [`store::ActivityStore`], the per-day
//! [`models::Activity`] record, timezone bucketing, numeric field parsing,
//! command-line settings and the crate-wide error type.

pub mod error;
pub mod models;
pub mod numbers;
pub mod settings;
pub mod store;
pub mod time_utils;

pub use error::{ActivityError, Result};
pub use models::Activity;
pub use store::ActivityStore;
