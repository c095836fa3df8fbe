//! Per-run day ledger.
//!
//! Scratch state for a single strategy run: the placements assigned to
//! each working day so far, keyed by epoch day. Strategies read capacity
//! from it while placing and flatten it into the output list at the end.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::models::{Placement, TaskDefinition};

#[inline]
fn day_key(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

#[derive(Debug)]
pub(crate) struct DayBook {
    capacity: usize,
    days: BTreeMap<i32, Vec<Placement>>,
}

impl DayBook {
    /// Opens an empty ledger over `days`, each holding at most `capacity`.
    pub(crate) fn new(days: &[NaiveDate], capacity: usize) -> Self {
        Self {
            capacity,
            days: days.iter().map(|&d| (day_key(d), Vec::new())).collect(),
        }
    }

    /// Whether `date` is in the ledger and below capacity.
    pub(crate) fn has_room(&self, date: NaiveDate) -> bool {
        self.days
            .get(&day_key(date))
            .is_some_and(|list| list.len() < self.capacity)
    }

    /// Places `task` on `date` if there is room. Returns whether it was placed.
    pub(crate) fn place(&mut self, task: &TaskDefinition, date: NaiveDate) -> bool {
        match self.days.get_mut(&day_key(date)) {
            Some(list) if list.len() < self.capacity => {
                list.push(Placement::new(task, date));
                true
            }
            _ => false,
        }
    }

    /// Places `task` on the first day in `order` with room.
    pub(crate) fn place_first_open(
        &mut self,
        task: &TaskDefinition,
        order: impl IntoIterator<Item = NaiveDate>,
    ) -> Option<NaiveDate> {
        let date = order.into_iter().find(|&d| self.has_room(d))?;
        self.place(task, date).then_some(date)
    }

    /// Free slots across all days.
    pub(crate) fn remaining_capacity(&self) -> usize {
        self.days
            .values()
            .map(|list| self.capacity.saturating_sub(list.len()))
            .sum()
    }

    /// Flattens into chronological order, insertion order within a day.
    pub(crate) fn into_placements(self) -> Vec<Placement> {
        self.days.into_values().flatten().collect()
    }
}
