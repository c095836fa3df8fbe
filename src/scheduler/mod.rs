//! Monthly allocation strategies and the scheduler entry point.
//!
//! # Strategies
//!
//! | Mode | Strategy | Coverage | Category rule |
//! |------|----------|----------|---------------|
//! | `ClosingWindow` | [`ClosingWindowStrategy`] | every task ≥ 1 | closing category confined to month end |
//! | `Simple` + evenly | [`EvenStrategy`] | each task once if slots allow | none |
//! | `Simple` | [`BoundedRandomStrategy`] | none | none |
//! | `Balanced` | [`CategoryBalancedStrategy`] | none | categories rotated per day |
//!
//! All strategies share the same contract: every placement lands on one of
//! the supplied working days and no day exceeds `max_tasks_per_day`.
//! Placement ties are broken at random; pass a seeded `Rng` for
//! reproducible runs.

mod balanced;
mod closing_window;
mod day_book;
mod simple;

pub use balanced::CategoryBalancedStrategy;
pub use closing_window::ClosingWindowStrategy;
pub use simple::{BoundedRandomStrategy, EvenStrategy};

use chrono::NaiveDate;
use rand::{Rng, RngCore};
use std::fmt::Debug;
use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{
    Allocation, CalendarOracle, DistributionMode, HolidayCalendar, MonthRef, SchedulingOptions,
    TaskDefinition,
};
use crate::validation::validate_tasks;

/// A way of distributing a task pool over a month's working days.
///
/// Implementations receive a non-empty pool and a non-empty day list from
/// [`MonthlyScheduler`], but must also tolerate empty inputs when called
/// directly (returning an empty allocation).
pub trait DistributionStrategy: Send + Sync + Debug {
    /// Strategy name (for logs).
    fn name(&self) -> &'static str;

    /// Places tasks on `days`. Never exceeds `options.max_tasks_per_day`.
    fn distribute(
        &self,
        tasks: &[TaskDefinition],
        days: &[NaiveDate],
        options: &SchedulingOptions,
        rng: &mut dyn RngCore,
    ) -> Allocation;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selects the strategy configured by `options`.
pub fn strategy_for(options: &SchedulingOptions) -> Box<dyn DistributionStrategy> {
    match options.mode {
        DistributionMode::ClosingWindow => Box::new(ClosingWindowStrategy),
        DistributionMode::Simple if options.distribute_evenly => Box::new(EvenStrategy),
        DistributionMode::Simple => Box::new(BoundedRandomStrategy),
        DistributionMode::Balanced => Box::new(CategoryBalancedStrategy),
    }
}

/// Allocates a task pool over one month of working days.
///
/// Holds a calendar oracle and run options; each [`schedule`](Self::schedule)
/// call is independent and keeps no state, so one scheduler can serve
/// concurrent runs.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_workday::models::{SchedulingOptions, TaskCategory, TaskDefinition};
/// use u_workday::scheduler::MonthlyScheduler;
///
/// let tasks = vec![
///     TaskDefinition::new("1", "Backup database server", TaskCategory::DataBackup),
///     TaskDefinition::new("2", "Cek koneksi jaringan", TaskCategory::NetworkRepair),
/// ];
/// let scheduler = MonthlyScheduler::indonesia()
///     .with_options(SchedulingOptions::new().with_max_tasks_per_day(2));
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let allocation = scheduler.schedule(&tasks, 6, 2025, &mut rng).unwrap();
/// assert!(allocation.is_complete());
/// assert!(!allocation.placements_for_task("1").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MonthlyScheduler<C = HolidayCalendar> {
    calendar: C,
    options: SchedulingOptions,
}

impl MonthlyScheduler<HolidayCalendar> {
    /// Scheduler over the built-in Indonesian holiday calendar.
    pub fn indonesia() -> Self {
        Self::new(HolidayCalendar::indonesia())
    }
}

impl<C: CalendarOracle> MonthlyScheduler<C> {
    /// Creates a scheduler with default options.
    pub fn new(calendar: C) -> Self {
        Self {
            calendar,
            options: SchedulingOptions::default(),
        }
    }

    /// Sets run options.
    pub fn with_options(mut self, options: SchedulingOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SchedulingOptions {
        &self.options
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Working days of `month` that are available for placement, ascending.
    pub fn working_days(&self, month: MonthRef) -> Vec<NaiveDate> {
        self.calendar
            .working_days_in_month(month)
            .into_iter()
            .map(|d| d.date)
            .filter(|d| !self.options.exclude_dates.contains(d))
            .collect()
    }

    /// Allocates `tasks` over `month`/`year` using the configured strategy.
    ///
    /// An empty pool or a month without available working days yields an
    /// empty allocation.
    ///
    /// # Errors
    /// `InvalidMonth` for a month outside 1-12, `InvalidOptions` if the
    /// options are inconsistent, `InvalidTasks` if the pool fails
    /// [`validate_tasks`].
    pub fn schedule<R: Rng>(
        &self,
        tasks: &[TaskDefinition],
        month: u32,
        year: i32,
        rng: &mut R,
    ) -> ScheduleResult<Allocation> {
        let month = MonthRef::new(year, month)?;
        self.options.validate()?;
        validate_tasks(tasks).map_err(ScheduleError::InvalidTasks)?;

        let days = self.working_days(month);
        let strategy = strategy_for(&self.options);
        debug!(
            year = month.year(),
            month = month.month(),
            strategy = strategy.name(),
            description = strategy.description(),
            tasks = tasks.len(),
            working_days = days.len(),
            "scheduling month"
        );

        if tasks.is_empty() || days.is_empty() {
            return Ok(Allocation::new());
        }

        let allocation = strategy.distribute(tasks, &days, &self.options, rng);
        debug!(
            placements = allocation.len(),
            unseated = allocation.unseated.len(),
            "month scheduled"
        );
        Ok(allocation)
    }

    /// [`schedule`](Self::schedule) with the thread-local random source.
    pub fn schedule_random(
        &self,
        tasks: &[TaskDefinition],
        month: u32,
        year: i32,
    ) -> ScheduleResult<Allocation> {
        self.schedule(tasks, month, year, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Holiday, HolidayTable, TaskCategory};
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_tasks() -> Vec<TaskDefinition> {
        vec![
            TaskDefinition::new("1", "Cek kabel LAN ruang rapat", TaskCategory::NetworkRepair),
            TaskDefinition::new("2", "Update antivirus PC staf", TaskCategory::InstallationConfiguration),
            TaskDefinition::new("3", "Bersihkan ruang server", TaskCategory::InfrastructureMaintenance),
            TaskDefinition::new("4", "Backup database kepegawaian", TaskCategory::DataBackup),
        ]
    }

    #[test]
    fn test_strategy_selection() {
        let o = SchedulingOptions::default();
        assert_eq!(strategy_for(&o).name(), "closing-window");
        let o = o.with_mode(DistributionMode::Simple);
        assert_eq!(strategy_for(&o).name(), "even");
        let o = o.with_distribute_evenly(false);
        assert_eq!(strategy_for(&o).name(), "bounded-random");
        let o = o.with_mode(DistributionMode::Balanced);
        assert_eq!(strategy_for(&o).name(), "category-balanced");
    }

    #[test]
    fn test_strategy_descriptions() {
        let base = SchedulingOptions::default();
        let strategies = [
            strategy_for(&base),
            strategy_for(&base.clone().with_mode(DistributionMode::Simple)),
            strategy_for(
                &base
                    .clone()
                    .with_mode(DistributionMode::Simple)
                    .with_distribute_evenly(false),
            ),
            strategy_for(&base.with_mode(DistributionMode::Balanced)),
        ];
        let descriptions: HashSet<_> = strategies.iter().map(|s| s.description()).collect();
        assert_eq!(descriptions.len(), 4);
        for s in &strategies {
            assert!(!s.description().is_empty());
            assert_ne!(s.description(), s.name());
        }
        assert!(strategies[0].description().contains("closing"));
    }

    #[test]
    fn test_empty_pool_yields_empty_schedule() {
        let scheduler = MonthlyScheduler::indonesia();
        let mut rng = SmallRng::seed_from_u64(1);
        for month in 1..=12 {
            let a = scheduler.schedule(&[], month, 2025, &mut rng).unwrap();
            assert!(a.is_empty());
            assert!(a.is_complete());
        }
    }

    #[test]
    fn test_month_without_working_days() {
        // Every February 2026 date declared a holiday
        let closed: Vec<_> = MonthRef::new(2026, 2)
            .unwrap()
            .days()
            .map(|d| Holiday::new(d, "Libur"))
            .collect();
        let calendar = HolidayCalendar::new(HolidayTable::new().with_year(2026, closed));
        let scheduler = MonthlyScheduler::new(calendar);
        let mut rng = SmallRng::seed_from_u64(1);

        for mode in [
            DistributionMode::ClosingWindow,
            DistributionMode::Simple,
            DistributionMode::Balanced,
        ] {
            let s = scheduler
                .clone()
                .with_options(SchedulingOptions::new().with_mode(mode));
            let a = s.schedule(&sample_tasks(), 2, 2026, &mut rng).unwrap();
            assert!(a.is_empty());
        }
    }

    #[test]
    fn test_invalid_month() {
        let scheduler = MonthlyScheduler::indonesia();
        let err = scheduler
            .schedule(&sample_tasks(), 13, 2025, &mut SmallRng::seed_from_u64(1))
            .unwrap_err();
        assert_eq!(err, ScheduleError::InvalidMonth(13));
    }

    #[test]
    fn test_invalid_options() {
        let scheduler = MonthlyScheduler::indonesia().with_options(
            SchedulingOptions::new()
                .with_min_tasks_per_day(5)
                .with_max_tasks_per_day(1),
        );
        let err = scheduler
            .schedule(&sample_tasks(), 1, 2025, &mut SmallRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidOptions(_)));
    }

    #[test]
    fn test_invalid_tasks() {
        let mut tasks = sample_tasks();
        tasks.push(TaskDefinition::new("1", "Duplikat", TaskCategory::OtherDuties));
        let err = MonthlyScheduler::indonesia()
            .schedule(&tasks, 1, 2025, &mut SmallRng::seed_from_u64(1))
            .unwrap_err();
        match err {
            ScheduleError::InvalidTasks(errors) => {
                assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicateId));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_excluded_dates_are_never_used() {
        let excluded = [date(2025, 6, 2), date(2025, 6, 3), date(2025, 6, 30)];
        let mut options = SchedulingOptions::new();
        for d in excluded {
            options = options.with_excluded_date(d);
        }
        let scheduler = MonthlyScheduler::indonesia().with_options(options);
        let june = MonthRef::new(2025, 6).unwrap();
        let available: HashSet<_> = scheduler.working_days(june).into_iter().collect();
        assert!(excluded.iter().all(|d| !available.contains(d)));

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let a = scheduler.schedule(&sample_tasks(), 6, 2025, &mut rng).unwrap();
            assert!(!a.is_empty());
            assert!(a.placements.iter().all(|p| available.contains(&p.scheduled_date)));
        }
    }

    #[test]
    fn test_placements_fall_on_working_days() {
        let scheduler = MonthlyScheduler::indonesia();
        let calendar = HolidayCalendar::indonesia();
        for mode in [
            DistributionMode::ClosingWindow,
            DistributionMode::Simple,
            DistributionMode::Balanced,
        ] {
            let s = scheduler
                .clone()
                .with_options(SchedulingOptions::new().with_mode(mode));
            let mut rng = SmallRng::seed_from_u64(9);
            let a = s.schedule(&sample_tasks(), 4, 2025, &mut rng).unwrap();
            for p in &a.placements {
                assert!(calendar.is_working_day(p.scheduled_date), "{mode:?} used {}", p.scheduled_date);
                assert!(MonthRef::new(2025, 4).unwrap().contains(p.scheduled_date));
            }
            assert!(a.counts_by_date().values().all(|&c| c <= 3));
        }
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let scheduler = MonthlyScheduler::indonesia();
        let a = scheduler
            .schedule(&sample_tasks(), 9, 2025, &mut SmallRng::seed_from_u64(77))
            .unwrap();
        let b = scheduler
            .schedule(&sample_tasks(), 9, 2025, &mut SmallRng::seed_from_u64(77))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_concurrent_months() {
        let scheduler = MonthlyScheduler::indonesia();
        let tasks = sample_tasks();
        std::thread::scope(|s| {
            let handles: Vec<_> = (1..=12)
                .map(|month| {
                    let (scheduler, tasks) = (&scheduler, &tasks);
                    s.spawn(move || {
                        let mut rng = SmallRng::seed_from_u64(u64::from(month));
                        scheduler.schedule(tasks, month, 2026, &mut rng).unwrap()
                    })
                })
                .collect();
            for handle in handles {
                let a = handle.join().unwrap();
                assert!(a.is_complete());
                assert!(a.counts_by_date().values().all(|&c| c <= 3));
            }
        });
    }

    #[test]
    fn test_schedule_random_respects_contract() {
        let a = MonthlyScheduler::indonesia()
            .schedule_random(&sample_tasks(), 10, 2025)
            .unwrap();
        let ids: HashSet<_> = a.placements.iter().map(|p| p.task_id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert!(a.counts_by_date().values().all(|&c| c <= 3));
    }
}
