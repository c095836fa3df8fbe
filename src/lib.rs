//! Monthly task-to-workday allocation.
//!
//! Given a pool of recurring task definitions and a target month, produces
//! a concrete assignment of task occurrences to working days, respecting
//! weekends, public holidays, a per-day capacity and category placement
//! rules (e.g. backups only in the closing days of the month).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TaskDefinition`, `TaskCategory`,
//!   `CalendarOracle`, `HolidayCalendar`, `SchedulingOptions`, `Placement`,
//!   `Allocation`
//! - **`scheduler`**: `MonthlyScheduler` and the distribution strategies
//! - **`audit`**: Capacity/coverage checks and statistics for a schedule
//! - **`validation`**: Task pool integrity checks (duplicate IDs, blanks)
//! - **`random`**: Seedable shuffle and pick helpers
//!
//! # Guarantees
//!
//! Every strategy keeps each day at or below `max_tasks_per_day` and only
//! uses working days of the target month. The default closing-window
//! strategy additionally places every task at least once (or reports it as
//! unseated). Placement itself is randomized; pass a seeded `Rng` for
//! reproducible output.
//!
//! Persistence is the caller's concern: a typical store clears the month
//! and bulk-inserts `Allocation::into_placements()` in one transaction.

pub mod audit;
pub mod error;
pub mod models;
pub mod random;
pub mod scheduler;
pub mod validation;

pub use error::{ScheduleError, ScheduleResult};
