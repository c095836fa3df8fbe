//! Simple fill strategies without category rules.
//!
//! # Algorithm
//!
//! Both strategies walk the working days in shuffled order.
//!
//! - **Even**: shuffle the pool and place it day by day, `max_tasks_per_day`
//!   at a time. A pool larger than `|days| × max` is truncated to the slot
//!   count; a smaller pool leaves the remaining slots empty.
//! - **Bounded random**: draw a quota in `[min, max]` per day and pull that
//!   many tasks from a shuffled pool, wrapping to its start when exhausted.
//!
//! # Complexity
//! O(|days| × max + |tasks|).
//!
//! Neither strategy guarantees coverage; `unseated` is always empty.

use chrono::NaiveDate;
use rand::RngCore;

use super::day_book::DayBook;
use super::DistributionStrategy;
use crate::models::{Allocation, SchedulingOptions, TaskDefinition};
use crate::random;

/// Even fill: each task at most once, days filled to capacity in turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvenStrategy;

impl DistributionStrategy for EvenStrategy {
    fn name(&self) -> &'static str {
        "even"
    }

    fn description(&self) -> &'static str {
        "Shuffled pool placed day by day up to capacity"
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

        let max = options.max_tasks_per_day;
        let order = random::shuffled(days, rng);
        let pool = random::shuffled(tasks, rng);
        let mut queue = pool.iter().take(days.len() * max);
        let mut book = DayBook::new(days, max);

        'days: for day in order {
            for _ in 0..max {
                let Some(task) = queue.next() else {
                    break 'days;
                };
                book.place(task, day);
            }
        }

        Allocation {
            placements: book.into_placements(),
            unseated: Vec::new(),
        }
    }
}

/// Random daily quota in `[min_tasks_per_day, max_tasks_per_day]`,
/// cycling through the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedRandomStrategy;

impl DistributionStrategy for BoundedRandomStrategy {
    fn name(&self) -> &'static str {
        "bounded-random"
    }

    fn description(&self) -> &'static str {
        "Random per-day quota drawn from a rotating shuffled pool"
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

        let order = random::shuffled(days, rng);
        let pool = random::shuffled(tasks, rng);
        let mut cycle = pool.iter().cycle();
        let mut book = DayBook::new(days, options.max_tasks_per_day);

        for day in order {
            let quota = random::between(options.min_tasks_per_day, options.max_tasks_per_day, rng);
            for task in cycle.by_ref().take(quota) {
                book.place(task, day);
            }
        }

        Allocation {
            placements: book.into_placements(),
            unseated: Vec::new(),
        }
    }
}
