//! Category-balanced fill.
//!
//! Groups the pool by category and, for each working day (shuffled),
//! places `min(max_tasks_per_day, |pool|)` tasks while rotating through the
//! categories in a shuffled order. Each slot draws a uniform random task
//! from its category, so a day mixes categories before repeating one.

use chrono::NaiveDate;
use rand::RngCore;
use std::collections::BTreeMap;

use super::day_book::DayBook;
use super::DistributionStrategy;
use crate::models::{Allocation, SchedulingOptions, TaskCategory, TaskDefinition};
use crate::random;

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryBalancedStrategy;

impl DistributionStrategy for CategoryBalancedStrategy {
    fn name(&self) -> &'static str {
        "category-balanced"
    }

    fn description(&self) -> &'static str {
        "Categories rotated across each day's slots"
    }

    fn distribute(
        &self,
        tasks: &[TaskDefinition],
        days: &[NaiveDate],
        options: &SchedulingOptions,
        rng: &mut dyn RngCore,
    ) -> Allocation {
        if tasks.is_empty() || days.is_empty() {
            return Allocation::new();
        }

        let mut groups: BTreeMap<TaskCategory, Vec<&TaskDefinition>> = BTreeMap::new();
        for task in tasks {
            groups.entry(task.category).or_default().push(task);
        }

        let categories = random::shuffled(&groups.keys().copied().collect::<Vec<_>>(), rng);
        let order = random::shuffled(days, rng);
        let per_day = options.max_tasks_per_day.min(tasks.len());
        let mut rotation = categories.iter().cycle();
        let mut book = DayBook::new(days, options.max_tasks_per_day);

        for day in order {
            for category in rotation.by_ref().take(per_day) {
                if let Some(task) = random::pick(&groups[category], rng) {
                    book.place(task, day);
                }
            }
        }

        Allocation {
            placements: book.into_placements(),
            unseated: Vec::new(),
        }
    }
}
