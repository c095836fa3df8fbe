//! Scheduling domain models.
//!
//! Provides the data types for monthly workday allocation: the task pool,
//! the working-day calendar, run options and the resulting placements.
//!
//! # Domain Mappings
//!
//! | u-workday | Task store | Calendar UI |
//! |-----------|------------|-------------|
//! | TaskDefinition | Task row | Task list entry |
//! | Placement | Schedule row | Day cell item |
//! | CalendarDay | - | Day cell |
//! | Allocation | Month replace | Month view |

mod calendar;
mod category;
mod holidays;
mod options;
mod schedule;
mod task;

pub use calendar::{CalendarDay, CalendarOracle, DayKind, Holiday, HolidayCalendar, HolidayTable, MonthRef};
pub use category::TaskCategory;
pub use options::{DistributionMode, SchedulingOptions};
pub use schedule::{Allocation, Placement};
pub use task::TaskDefinition;
