//! Task definition model.
//!
//! A task definition is a recurring unit of work owned by the task store.
//! The scheduler borrows the pool for one run and places occurrences of
//! each definition on working days.

use serde::{Deserialize, Serialize};

use super::TaskCategory;
use crate::error::ScheduleResult;

/// A recurring task to be placed on working days.
///
/// Fields are trimmed on construction and on deserialization. Emptiness is
/// reported by [`validate_tasks`](crate::validation::validate_tasks) rather
/// than here, so a whole pool can be checked at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTask")]
pub struct TaskDefinition {
    /// Stable identifier assigned by the task store.
    pub id: String,
    /// Free-text description of the daily activity.
    pub activity: String,
    /// Work classification.
    pub category: TaskCategory,
}

/// Store record as read, before trimming.
#[derive(Deserialize)]
struct RawTask {
    id: String,
    activity: String,
    category: TaskCategory,
}

impl From<RawTask> for TaskDefinition {
    fn from(raw: RawTask) -> Self {
        Self::new(raw.id, raw.activity, raw.category)
    }
}

impl TaskDefinition {
    /// Creates a task definition.
    pub fn new(id: impl Into<String>, activity: impl AsRef<str>, category: TaskCategory) -> Self {
        Self {
            id: id.into().trim().to_string(),
            activity: activity.as_ref().trim().to_string(),
            category,
        }
    }

    /// Builds a definition from raw record text (e.g. an imported row).
    ///
    /// The category may be a short label or a long description.
    pub fn from_record(id: impl Into<String>, activity: &str, category: &str) -> ScheduleResult<Self> {
        Ok(Self::new(id, activity, category.parse()?))
    }

    /// Whether this task belongs to `category`.
    #[inline]
    pub fn is_in(&self, category: TaskCategory) -> bool {
        self.category == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;

    #[test]
    fn test_new_trims_fields() {
        let task = TaskDefinition::new(" 7 ", "  Backup server utama \n", TaskCategory::DataBackup);
        assert_eq!(task.id, "7");
        assert_eq!(task.activity, "Backup server utama");
        assert!(task.is_in(TaskCategory::DataBackup));
        assert!(!task.is_in(TaskCategory::OtherDuties));
    }

    #[test]
    fn test_from_record_maps_description() {
        let task = TaskDefinition::from_record(
            "12",
            "Install ulang OS laptop",
            "Melakukan instalasi/upgrade dan konfigurasi sistem operasi/aplikasi",
        )
        .unwrap();
        assert_eq!(task.category, TaskCategory::InstallationConfiguration);
    }

    #[test]
    fn test_from_record_unknown_category() {
        let err = TaskDefinition::from_record("1", "x", "Bukan kategori").unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownCategory(_)));
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{"id":"3","activity":"Cek switch lantai 2","category":"Deteksi dan Perbaikan Jaringan"}"#;
        let task: TaskDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(task.category, TaskCategory::NetworkRepair);
        assert_eq!(task.activity, "Cek switch lantai 2");

        let json = r#"{"id":" 3 ","activity":"  Cek switch lantai 2 \n","category":"Backup dan Pemulihan Data"}"#;
        let task: TaskDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "3");
        assert_eq!(task.activity, "Cek switch lantai 2");
    }

    #[test]
    fn test_deserialized_padded_ids_collide() {
        let json = r#"[
            {"id":"1","activity":"Cek router","category":"Backup dan Pemulihan Data"},
            {"id":" 1 ","activity":"  Cek router  ","category":"Backup dan Pemulihan Data"}
        ]"#;
        let tasks: Vec<TaskDefinition> = serde_json::from_str(json).unwrap();
        assert_eq!(tasks[1].id, "1");
        assert_eq!(tasks[1].activity, "Cek router");

        let errors = crate::validation::validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors[0].kind, crate::validation::ValidationErrorKind::DuplicateId);
    }
}
