//! Schedule auditing.
//!
//! Checks a produced (or externally supplied) placement list against
//! capacity and coverage constraints, and computes descriptive statistics.
//! Problems are reported, never raised: hard violations become errors,
//! soft ones warnings, and the caller decides what to do.
//!
//! | Check | Severity |
//! |-------|----------|
//! | Day above `max_tasks_per_day` | error |
//! | Placement outside `allowed_dates` | error |
//! | Day below `min_tasks_per_day` | warning |
//! | Required category never scheduled | warning |

mod stats;

pub use stats::ScheduleStats;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::models::{Placement, TaskCategory};

/// Limits a schedule is audited against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConstraints {
    pub max_tasks_per_day: usize,
    pub min_tasks_per_day: usize,
    /// Categories that must appear at least once.
    pub required_categories: Vec<TaskCategory>,
    /// If set, the only dates placements may use.
    pub allowed_dates: Option<BTreeSet<NaiveDate>>,
}

impl Default for AuditConstraints {
    fn default() -> Self {
        Self {
            max_tasks_per_day: 5,
            min_tasks_per_day: 0,
            required_categories: Vec::new(),
            allowed_dates: None,
        }
    }
}

impl AuditConstraints {
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

    pub fn with_required_category(mut self, category: TaskCategory) -> Self {
        self.required_categories.push(category);
        self
    }

    /// Restricts placements to `dates` (typically a month's working days).
    pub fn with_allowed_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.allowed_dates = Some(dates.into_iter().collect());
        self
    }
}

/// Kind of audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    CapacityExceeded,
    UnderFilled,
    MissingCategory,
    OffCalendar,
}

/// One audit finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub kind: FindingKind,
    /// Date concerned, for per-day findings.
    pub date: Option<NaiveDate>,
    pub message: String,
}

impl AuditFinding {
    fn on(kind: FindingKind, date: NaiveDate, message: String) -> Self {
        Self {
            kind,
            date: Some(date),
            message,
        }
    }
}

/// Audit outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    pub errors: Vec<AuditFinding>,
    pub warnings: Vec<AuditFinding>,
}

/// Audits `schedule` against `constraints`.
///
/// Dates are checked in ascending order, so findings are reported
/// chronologically.
pub fn validate_schedule(schedule: &[Placement], constraints: &AuditConstraints) -> AuditReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for p in schedule {
        *by_date.entry(p.scheduled_date).or_insert(0) += 1;
    }

    for (&date, &count) in &by_date {
        if count > constraints.max_tasks_per_day {
            errors.push(AuditFinding::on(
                FindingKind::CapacityExceeded,
                date,
                format!(
                    "Too many tasks on {date}: {count} (max: {})",
                    constraints.max_tasks_per_day
                ),
            ));
        }
        if count < constraints.min_tasks_per_day {
            warnings.push(AuditFinding::on(
                FindingKind::UnderFilled,
                date,
                format!(
                    "Too few tasks on {date}: {count} (min: {})",
                    constraints.min_tasks_per_day
                ),
            ));
        }
        if let Some(allowed) = &constraints.allowed_dates {
            if !allowed.contains(&date) {
                errors.push(AuditFinding::on(
                    FindingKind::OffCalendar,
                    date,
                    format!("{count} task(s) scheduled on non-working date {date}"),
                ));
            }
        }
    }

    let scheduled: HashSet<TaskCategory> = schedule.iter().map(|p| p.category).collect();
    for &category in &constraints.required_categories {
        if !scheduled.contains(&category) {
            warnings.push(AuditFinding {
                kind: FindingKind::MissingCategory,
                date: None,
                message: format!("Required category not scheduled: {category}"),
            });
        }
    }

    AuditReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
