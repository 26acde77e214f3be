//! Date-keyed merge of daily activity.
//!
//! One [`Activity`] per calendar date. Every write goes through
//! [`ActivityStore::upsert`], so a merge always starts from the latest
//! stored state for that date.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::models::Activity;

// ── ActivityStore ─────────────────────────────────────────────────────────────

/// In-memory mapping from calendar date to the merged [`Activity`] for it.
///
/// Keys carry no ordering; callers ask for [`sorted_dates`](Self::sorted_dates)
/// when they need one.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    records: HashMap<NaiveDate, Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored record for `date`, if any source contributed one.
    pub fn get(&self, date: NaiveDate) -> Option<&Activity> {
        self.records.get(&date)
    }

    /// Apply `mutate` to the record for `date`, starting from a zero-valued
    /// record when the date is new.
    pub fn upsert<F>(&mut self, date: NaiveDate, mutate: F)
    where
        F: FnOnce(&mut Activity),
    {
        let record = self
            .records
            .entry(date)
            .or_insert_with(|| Activity::empty(date));
        mutate(record);
        record.date = date;
    }

    /// Overwrite the whole record for `activity.date`.
    pub fn replace(&mut self, activity: Activity) {
        self.upsert(activity.date, move |slot| *slot = activity);
    }

    /// Every date present in the store.
    pub fn all_dates(&self) -> BTreeSet<NaiveDate> {
        self.records.keys().copied().collect()
    }

    /// Present dates in ascending order.
    pub fn sorted_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.records.keys().copied().collect();
        dates.sort_unstable();
        dates
    }

    /// Records in ascending date order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.sorted_dates()
            .into_iter()
            .filter_map(move |date| self.records.get(&date))
    }

    /// Most recent date present, `None` for an empty store.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records.keys().max().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
