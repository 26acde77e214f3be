//! Current step-goal streak.
//!
//! The most recent date in the store is taken to be today, still in
//! progress, and never counts. Scanning starts the day before and walks
//! backwards until a day is missing or short of the goal.

use activity_core::error::{ActivityError, Result};
use activity_core::ActivityStore;
use chrono::NaiveDate;

/// Why the backward scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakStop {
    /// No record exists for `date`.
    NoData { date: NaiveDate },
    /// The record for `date` has fewer than `goal` steps.
    BelowGoal {
        date: NaiveDate,
        steps: u32,
        goal: u32,
    },
}

/// Outcome of a streak scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakReport {
    /// Consecutive qualifying days before the latest date.
    pub days: u32,
    /// The latest date in the store, excluded from the count.
    pub latest_date: NaiveDate,
    /// Earliest day counted, `None` when the streak is zero.
    pub started_on: Option<NaiveDate>,
    pub stop: StreakStop,
}

/// Counts consecutive days meeting a step goal.
#[derive(Debug, Clone, Copy)]
pub struct StreakScanner {
    goal: u32,
}

impl StreakScanner {
    pub fn new(goal: u32) -> Self {
        Self { goal }
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// Scan `store` backwards from the day before its latest date.
    ///
    /// Fails with [`ActivityError::EmptyStore`] when there is no latest date.
    pub fn scan(&self, store: &ActivityStore) -> Result<StreakReport> {
        let latest_date = store.latest_date().ok_or(ActivityError::EmptyStore)?;

        let mut days = 0;
        let mut started_on = None;
        let mut cursor = latest_date.pred_opt();

        let stop = loop {
            let Some(date) = cursor else {
                break StreakStop::NoData {
                    date: NaiveDate::MIN,
                };
            };

            match store.get(date) {
                None => break StreakStop::NoData { date },
                Some(activity) if !activity.meets_step_goal(self.goal) => {
                    break StreakStop::BelowGoal {
                        date,
                        steps: activity.steps,
                        goal: self.goal,
                    };
                }
                Some(_) => {
                    days += 1;
                    started_on = Some(date);
                    cursor = date.pred_opt();
                }
            }
        };

        Ok(StreakReport {
            days,
            latest_date,
            started_on,
            stop,
        })
    }
}

impl Default for StreakScanner {
    fn default() -> Self {
        Self::new(activity_core::settings::DEFAULT_STEP_GOAL)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(days: &[(NaiveDate, u32)]) -> ActivityStore {
        let mut store = ActivityStore::new();
        for (date, steps) in days {
            store.upsert(*date, |a| a.steps = *steps);
        }
        store
    }

    #[test]
    fn test_empty_store_is_rejected() {
        let err = StreakScanner::default().scan(&ActivityStore::new()).unwrap_err();
        assert!(matches!(err, ActivityError::EmptyStore));
    }

    #[test]
    fn test_latest_day_is_excluded_and_gap_stops() {
        let store = store_with(&[
            (day(2024, 1, 15), 12_000),
            (day(2024, 1, 14), 12_000),
            (day(2024, 1, 13), 12_000),
        ]);

        let report = StreakScanner::new(10_000).scan(&store).unwrap();

        assert_eq!(report.days, 2);
        assert_eq!(report.latest_date, day(2024, 1, 15));
        assert_eq!(report.started_on, Some(day(2024, 1, 13)));
        assert_eq!(report.stop, StreakStop::NoData { date: day(2024, 1, 12) });
    }

    #[test]
    fn test_below_goal_stops() {
        let store = store_with(&[
            (day(2024, 1, 15), 0),
            (day(2024, 1, 14), 10_000),
            (day(2024, 1, 13), 10_500),
            (day(2024, 1, 12), 9_999),
            (day(2024, 1, 11), 20_000),
        ]);

        let report = StreakScanner::new(10_000).scan(&store).unwrap();

        assert_eq!(report.days, 2);
        assert_eq!(
            report.stop,
            StreakStop::BelowGoal {
                date: day(2024, 1, 12),
                steps: 9_999,
                goal: 10_000
            }
        );
    }

    #[test]
    fn test_latest_day_below_goal_does_not_matter() {
        let store = store_with(&[(day(2024, 1, 15), 3), (day(2024, 1, 14), 15_000)]);
        assert_eq!(StreakScanner::new(10_000).scan(&store).unwrap().days, 1);
    }

    #[test]
    fn test_single_day_store_is_zero_streak() {
        let store = store_with(&[(day(2024, 1, 15), 50_000)]);
        let report = StreakScanner::new(10_000).scan(&store).unwrap();
        assert_eq!(report.days, 0);
        assert_eq!(report.started_on, None);
        assert_eq!(report.stop, StreakStop::NoData { date: day(2024, 1, 14) });
    }

    #[test]
    fn test_yesterday_below_goal_is_zero_streak() {
        let store = store_with(&[(day(2024, 1, 15), 50_000), (day(2024, 1, 14), 100)]);
        let report = StreakScanner::new(10_000).scan(&store).unwrap();
        assert_eq!(report.days, 0);
        assert!(matches!(report.stop, StreakStop::BelowGoal { .. }));
    }

    #[test]
    fn test_streak_crosses_month_and_year() {
        let store = store_with(&[
            (day(2024, 1, 2), 0),
            (day(2024, 1, 1), 11_000),
            (day(2023, 12, 31), 11_000),
            (day(2023, 12, 30), 11_000),
        ]);
        assert_eq!(StreakScanner::new(10_000).scan(&store).unwrap().days, 3);
    }

    #[test]
    fn test_custom_goal() {
        let store = store_with(&[
            (day(2024, 1, 15), 0),
            (day(2024, 1, 14), 6_000),
            (day(2024, 1, 13), 5_000),
        ]);
        assert_eq!(StreakScanner::new(5_000).scan(&store).unwrap().days, 2);
        assert_eq!(StreakScanner::new(6_000).scan(&store).unwrap().days, 1);
    }

    #[test]
    fn test_default_goal_is_ten_thousand() {
        assert_eq!(StreakScanner::default().goal(), 10_000);
    }
}
