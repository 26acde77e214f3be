use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activity totals for one calendar date.
///
/// Counters are whole numbers as reported by the tracker; `distance` is in
/// the unit of the export (kilometres or miles, depending on the account).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Calendar date in the source timezone, no time of day.
    pub date: NaiveDate,
    #[serde(default)]
    pub calories_burned: u32,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub floors: u32,
    #[serde(default)]
    pub minutes_sedentary: u32,
    #[serde(default)]
    pub minutes_lightly_active: u32,
    #[serde(default)]
    pub minutes_fairly_active: u32,
    #[serde(default)]
    pub minutes_very_active: u32,
    #[serde(default)]
    pub activity_calories: u32,
}

impl Activity {
    /// A zero-valued record for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories_burned: 0,
            steps: 0,
            distance: 0.0,
            floors: 0,
            minutes_sedentary: 0,
            minutes_lightly_active: 0,
            minutes_fairly_active: 0,
            minutes_very_active: 0,
            activity_calories: 0,
        }
    }

    /// Add a sub-daily step sample, saturating at `u32::MAX`.
    pub fn add_steps(&mut self, steps: u32) {
        self.steps = self.steps.saturating_add(steps);
    }

    /// Whether this day reached `goal` steps.
    pub fn meets_step_goal(&self, goal: u32) -> bool {
        self.steps >= goal
    }
}
