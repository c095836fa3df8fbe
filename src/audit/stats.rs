//! Schedule statistics.
//!
//! Descriptive aggregates over a placement list.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total tasks | Number of placements |
//! | Unique dates | Distinct scheduled dates |
//! | Avg tasks/day | total / unique dates (0 when no dates) |
//! | Category distribution | Placements per category |
//! | Tasks per day | Placements per date |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Placement, TaskCategory};

/// Aggregate statistics of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub total_tasks: usize,
    pub unique_dates: usize,
    /// Mean placements per used date. 0.0 for an empty schedule.
    pub average_tasks_per_day: f64,
    pub category_distribution: BTreeMap<TaskCategory, usize>,
    pub tasks_per_day: BTreeMap<NaiveDate, usize>,
}

impl ScheduleStats {
    /// Computes statistics for `schedule`.
    pub fn calculate(schedule: &[Placement]) -> Self {
        let mut category_distribution = BTreeMap::new();
        let mut tasks_per_day = BTreeMap::new();

        for p in schedule {
            *category_distribution.entry(p.category).or_insert(0) += 1;
            *tasks_per_day.entry(p.scheduled_date).or_insert(0) += 1;
        }

        let total_tasks = schedule.len();
        let unique_dates = tasks_per_day.len();
        let average_tasks_per_day = if unique_dates == 0 {
            0.0
        } else {
            total_tasks as f64 / unique_dates as f64
        };

        Self {
            total_tasks,
            unique_dates,
            average_tasks_per_day,
            category_distribution,
            tasks_per_day,
        }
    }

    /// Distinct categories present, in declaration order.
    pub fn categories(&self) -> Vec<TaskCategory> {
        self.category_distribution.keys().copied().collect()
    }

    /// Busiest date and its count. Earliest date wins ties.
    pub fn busiest_day(&self) -> Option<(NaiveDate, usize)> {
        self.tasks_per_day
            .iter()
            .fold(None, |best, (&date, &count)| match best {
                Some((_, c)) if c >= count => best,
                _ => Some((date, count)),
            })
    }
}
