//! Schedule (solution) model.
//!
//! A schedule is the flat list of task occurrences placed on working days
//! for one month. Placements carry the task's activity and category so
//! consumers never need to re-join against the task store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{TaskCategory, TaskDefinition};

/// One scheduled occurrence of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Scheduled task ID.
    pub task_id: String,
    /// Working day the occurrence is placed on.
    pub scheduled_date: NaiveDate,
    /// Activity text (denormalized).
    pub activity: String,
    /// Category (denormalized).
    pub category: TaskCategory,
}

impl Placement {
    /// Places `task` on `date`.
    pub fn new(task: &TaskDefinition, date: NaiveDate) -> Self {
        Self {
            task_id: task.id.clone(),
            scheduled_date: date,
            activity: task.activity.clone(),
            category: task.category,
        }
    }
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Placements in chronological order.
    pub placements: Vec<Placement>,
    /// Tasks that could not be given their guaranteed occurrence.
    ///
    /// Only the closing-window strategy guarantees coverage, so this is
    /// empty for the other modes.
    pub unseated: Vec<String>,
}

impl Allocation {
    /// Creates an empty allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Whether every task got its guaranteed occurrence.
    pub fn is_complete(&self) -> bool {
        self.unseated.is_empty()
    }

    /// Placements on `date`.
    pub fn placements_on(&self, date: NaiveDate) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.scheduled_date == date)
            .collect()
    }

    /// Placements of task `task_id`.
    pub fn placements_for_task(&self, task_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.task_id == task_id)
            .collect()
    }

    /// Placement count per date.
    pub fn counts_by_date(&self) -> BTreeMap<NaiveDate, usize> {
        let mut counts = BTreeMap::new();
        for p in &self.placements {
            *counts.entry(p.scheduled_date).or_insert(0) += 1;
        }
        counts
    }

    /// Consumes the allocation, returning the placements for persistence.
    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn sample_allocation() -> Allocation {
        let t1 = TaskDefinition::new("1", "Cek router", TaskCategory::NetworkRepair);
        let t2 = TaskDefinition::new("2", "Backup NAS", TaskCategory::DataBackup);
        Allocation {
            placements: vec![
                Placement::new(&t1, date(2)),
                Placement::new(&t2, date(2)),
                Placement::new(&t1, date(3)),
            ],
            unseated: Vec::new(),
        }
    }

    #[test]
    fn test_placement_denormalizes_task() {
        let t = TaskDefinition::new("9", "Edit video profil", TaskCategory::MultimediaEditing);
        let p = Placement::new(&t, date(4));
        assert_eq!(p.task_id, "9");
        assert_eq!(p.activity, "Edit video profil");
        assert_eq!(p.category, TaskCategory::MultimediaEditing);
        assert_eq!(p.scheduled_date, date(4));
    }

    #[test]
    fn test_allocation_queries() {
        let a = sample_allocation();
        assert_eq!(a.len(), 3);
        assert!(a.is_complete());
        assert_eq!(a.placements_on(date(2)).len(), 2);
        assert_eq!(a.placements_for_task("1").len(), 2);
        assert!(a.placements_for_task("99").is_empty());

        let counts = a.counts_by_date();
        assert_eq!(counts[&date(2)], 2);
        assert_eq!(counts[&date(3)], 1);
    }

    #[test]
    fn test_placement_serializes_iso_date() {
        let t = TaskDefinition::new("1", "Cek router", TaskCategory::NetworkRepair);
        let json = serde_json::to_value(Placement::new(&t, date(2))).unwrap();
        assert_eq!(json["scheduled_date"], "2025-06-02");
        assert_eq!(json["category"], "Deteksi dan Perbaikan Jaringan");
    }

    #[test]
    fn test_empty_allocation() {
        let a = Allocation::new();
        assert!(a.is_empty());
        assert!(a.is_complete());
        assert!(a.into_placements().is_empty());
    }
}
