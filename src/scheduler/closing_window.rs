//! Coverage-guaranteeing allocation with a closing window.
//!
//! # Algorithm
//!
//! 1. Split the working days into a leading part and a closing window (the
//!    last `min(ceil(W * percent / 100), cap)` days). Each part is shuffled
//!    once per run.
//! 2. Shuffle the pool and give every task one guaranteed occurrence:
//!    - closing-category tasks scan the closing window starting at
//!      `index mod |closing|`, round-robin, for a day with room;
//!    - other tasks scan the leading days starting at
//!      `(index + offset) mod |leading|`, then the closing window the same way.
//!
//!    A task with no open day in its window is reported as unseated.
//! 3. Fill the remaining capacity with random draws from the whole pool
//!    (tasks may recur), honoring the same window rule. The fill stops when
//!    every day is full or after `10 × |pool|` consecutive draws that found
//!    no room.
//!
//! # Guarantees
//! - No day exceeds `max_tasks_per_day`.
//! - Closing-category placements only land in the closing window.
//! - Every task not listed in `unseated` appears at least once.

use chrono::NaiveDate;
use rand::{Rng, RngCore};
use tracing::{debug, warn};

use super::day_book::DayBook;
use super::DistributionStrategy;
use crate::models::{Allocation, SchedulingOptions, TaskDefinition};
use crate::random;

/// Consecutive fruitless fill draws allowed, per pool task.
const FILL_ATTEMPT_FACTOR: usize = 10;

/// Days of `window` starting at `start` (mod len), wrapping around.
fn rotation(window: &[NaiveDate], start: usize) -> impl Iterator<Item = NaiveDate> + '_ {
    let len = window.len();
    (0..len).map(move |i| window[(start + i) % len])
}

/// Rule-based distribution confining one category to the month's closing days.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosingWindowStrategy;

impl DistributionStrategy for ClosingWindowStrategy {
    fn name(&self) -> &'static str {
        "closing-window"
    }

    fn description(&self) -> &'static str {
        "Every task at least once; closing category confined to the last working days"
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

        let closing_category = options.closing_category;
        let split = days.len() - options.closing_window_len(days.len());
        let leading = random::shuffled(&days[..split], rng);
        let closing = random::shuffled(&days[split..], rng);
        let mut book = DayBook::new(days, options.max_tasks_per_day);

        // Guaranteed occurrences
        let worklist: Vec<&TaskDefinition> = random::shuffled(&tasks.iter().collect::<Vec<_>>(), rng);
        let day_offset = if leading.is_empty() {
            0
        } else {
            rng.random_range(0..leading.len())
        };
        let mut closing_index = 0;
        let mut general_index = 0;
        let mut unseated = Vec::new();

        for task in worklist {
            let placed = if task.is_in(closing_category) {
                let start = closing_index;
                closing_index += 1;
                book.place_first_open(task, rotation(&closing, start))
            } else {
                let start = general_index + day_offset;
                general_index += 1;
                book.place_first_open(task, rotation(&leading, start))
                    .or_else(|| book.place_first_open(task, rotation(&closing, start)))
            };

            if placed.is_none() {
                warn!(
                    task_id = %task.id,
                    category = %task.category,
                    "no open day left for guaranteed occurrence"
                );
                unseated.push(task.id.clone());
            }
        }

        // Best-effort fill
        let all_days: Vec<NaiveDate> = leading.iter().chain(&closing).copied().collect();
        let max_misses = tasks.len() * FILL_ATTEMPT_FACTOR;
        let mut remaining = book.remaining_capacity();
        let mut misses = 0;

        while remaining > 0 && misses < max_misses {
            let Some(task) = random::pick(tasks, rng) else {
                break;
            };
            let window = if task.is_in(closing_category) {
                random::shuffled(&closing, rng)
            } else {
                random::shuffled(&all_days, rng)
            };

            if book.place_first_open(task, window).is_some() {
                remaining -= 1;
                misses = 0;
            } else {
                misses += 1;
            }
        }

        if remaining > 0 {
            debug!(remaining, "fill stopped without an eligible open day");
        }

        Allocation {
            placements: book.into_placements(),
            unseated,
        }
    }
}
