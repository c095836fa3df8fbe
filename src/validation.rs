//! Input validation for task pools.
//!
//! Checks structural integrity of the task definitions before a month is
//! scheduled. Detects:
//! - Duplicate IDs
//! - Empty IDs
//! - Empty activity descriptions
//!
//! All problems are collected, not just the first.

use std::collections::HashSet;

use crate::models::TaskDefinition;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has a blank ID.
    EmptyId,
    /// A task has a blank activity description.
    EmptyActivity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task pool.
///
/// Checks:
/// 1. Every task has a non-blank ID
/// 2. Every task has a non-blank activity
/// 3. No two tasks share an ID
///
/// An empty pool is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[TaskDefinition]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, task) in tasks.iter().enumerate() {
        if task.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Task at position {index} has an empty ID"),
            ));
        } else if !ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.activity.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyActivity,
                format!("Task '{}' has an empty activity", task.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
