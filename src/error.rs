//! Scheduling error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur before a month is allocated.
///
/// Empty task pools, months without working days and tasks that cannot be
/// seated are not errors; they produce (partially) empty allocations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("month out of range (expected 1-12): {0}")]
    InvalidMonth(u32),

    #[error("invalid scheduling options: {0}")]
    InvalidOptions(String),

    #[error("unknown task category: {0}")]
    UnknownCategory(String),

    #[error("invalid task pool: {} problem(s)", .0.len())]
    InvalidTasks(Vec<ValidationError>),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
