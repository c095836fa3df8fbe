//! Scheduling options.
//!
//! All fields have defaults, so a partial JSON/TOML object is a valid
//! configuration:
//!
//! ```
//! use u_workday::models::{DistributionMode, SchedulingOptions};
//!
//! let options: SchedulingOptions =
//!     serde_json::from_str(r#"{ "max_tasks_per_day": 2, "mode": "balanced" }"#).unwrap();
//! assert_eq!(options.max_tasks_per_day, 2);
//! assert_eq!(options.min_tasks_per_day, 1);
//! assert_eq!(options.mode, DistributionMode::Balanced);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::TaskCategory;
use crate::error::{ScheduleError, ScheduleResult};

/// Which distribution strategy a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    /// Coverage-guaranteeing allocation with closing-window confinement.
    #[default]
    ClosingWindow,
    /// Even or bounded-random fill, chosen by `distribute_evenly`.
    Simple,
    /// Category round-robin fill.
    Balanced,
}

/// Options for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingOptions {
    /// Hard per-day capacity. Never exceeded by any strategy.
    pub max_tasks_per_day: usize,
    /// Lower bound of the daily quota in bounded-random mode.
    pub min_tasks_per_day: usize,
    /// In `Simple` mode: even fill when true, bounded-random when false.
    pub distribute_evenly: bool,
    /// Dates removed from the working-day pool before allocation.
    pub exclude_dates: BTreeSet<NaiveDate>,
    pub mode: DistributionMode,
    /// Category confined to the closing window.
    pub closing_category: TaskCategory,
    /// Closing window size as a percentage of the month's working days
    /// (rounded up).
    pub closing_window_percent: usize,
    /// Upper bound on the closing window, in days.
    pub closing_window_cap: usize,
}

impl Default for SchedulingOptions {
    fn default() -> Self {
        Self {
            max_tasks_per_day: 3,
            min_tasks_per_day: 1,
            distribute_evenly: true,
            exclude_dates: BTreeSet::new(),
            mode: DistributionMode::ClosingWindow,
            closing_category: TaskCategory::DataBackup,
            closing_window_percent: 20,
            closing_window_cap: 5,
        }
    }
}

impl SchedulingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_tasks_per_day(mut self, max: usize) -> Self {
        self.max_tasks_per_day = max;
        self
    }

    pub fn with_min_tasks_per_day(mut self, min: usize) -> Self {
        self.min_tasks_per_day = min;
        self
    }

    pub fn with_distribute_evenly(mut self, evenly: bool) -> Self {
        self.distribute_evenly = evenly;
        self
    }

    /// Removes a date from the working-day pool.
    pub fn with_excluded_date(mut self, date: NaiveDate) -> Self {
        self.exclude_dates.insert(date);
        self
    }

    pub fn with_mode(mut self, mode: DistributionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_closing_category(mut self, category: TaskCategory) -> Self {
        self.closing_category = category;
        self
    }

    /// Sets the closing window as `percent` of working days, capped at `cap` days.
    pub fn with_closing_window(mut self, percent: usize, cap: usize) -> Self {
        self.closing_window_percent = percent;
        self.closing_window_cap = cap;
        self
    }

    /// Checks option invariants.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.min_tasks_per_day > self.max_tasks_per_day {
            return Err(ScheduleError::InvalidOptions(format!(
                "min_tasks_per_day ({}) exceeds max_tasks_per_day ({})",
                self.min_tasks_per_day, self.max_tasks_per_day
            )));
        }
        if self.closing_window_percent > 100 {
            return Err(ScheduleError::InvalidOptions(format!(
                "closing_window_percent must be 0-100, got {}",
                self.closing_window_percent
            )));
        }
        Ok(())
    }

    /// Number of trailing working days reserved as the closing window.
    ///
    /// `min(ceil(working_days * percent / 100), cap, working_days)`.
    pub fn closing_window_len(&self, working_days: usize) -> usize {
        let by_ratio = (working_days * self.closing_window_percent).div_ceil(100);
        by_ratio.min(self.closing_window_cap).min(working_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = SchedulingOptions::default();
        assert_eq!(o.max_tasks_per_day, 3);
        assert_eq!(o.min_tasks_per_day, 1);
        assert!(o.distribute_evenly);
        assert!(o.exclude_dates.is_empty());
        assert_eq!(o.mode, DistributionMode::ClosingWindow);
        assert_eq!(o.closing_category, TaskCategory::DataBackup);
        assert!(o.validate().is_ok());
    }

    #[test]
    fn test_closing_window_len() {
        let o = SchedulingOptions::default();
        assert_eq!(o.closing_window_len(0), 0);
        assert_eq!(o.closing_window_len(1), 1);
        assert_eq!(o.closing_window_len(5), 1);
        assert_eq!(o.closing_window_len(6), 2);
        assert_eq!(o.closing_window_len(15), 3);
        assert_eq!(o.closing_window_len(20), 4);
        assert_eq!(o.closing_window_len(21), 5);
        assert_eq!(o.closing_window_len(23), 5); // capped
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let o = SchedulingOptions::new()
            .with_min_tasks_per_day(4)
            .with_max_tasks_per_day(2);
        assert!(matches!(o.validate(), Err(ScheduleError::InvalidOptions(_))));

        let o = SchedulingOptions::new().with_closing_window(150, 5);
        assert!(o.validate().is_err());
    }

    #[test]
    fn test_deserialize_exclude_dates() {
        let json = r#"{
            "exclude_dates": ["2025-06-02", "2025-06-03"],
            "closing_category": "Laporan Pelaksanaan",
            "mode": "simple",
            "distribute_evenly": false
        }"#;
        let o: SchedulingOptions = serde_json::from_str(json).unwrap();
        assert_eq!(o.exclude_dates.len(), 2);
        assert!(o
            .exclude_dates
            .contains(&NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()));
        assert_eq!(o.closing_category, TaskCategory::ExecutionReport);
        assert_eq!(o.mode, DistributionMode::Simple);
        assert!(!o.distribute_evenly);
        assert_eq!(o.max_tasks_per_day, 3);
    }
}
