//! Working-day calendar models.
//!
//! Classifies calendar dates as working days, weekends or public holidays.
//!
//! # Day Model
//! A date is a working day iff:
//! - Its weekday is Monday through Friday, AND
//! - It does NOT appear in the holiday table for its year.
//!
//! Holidays are a read-only year → date table owned by the calendar
//! instance. Years without an entry simply have no holidays.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter::successors;

use crate::error::{ScheduleError, ScheduleResult};

/// Longest stretch searched by `next_working_day` / `previous_working_day`.
const MAX_SEARCH_DAYS: usize = 366;

/// A named public holiday (or collective leave day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Immutable mapping from year to its ordered holiday list.
///
/// Deserialized tables go through [`HolidayTable::with_year`], so loaded
/// data is ordered the same way as built tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawHolidayTable")]
pub struct HolidayTable {
    years: BTreeMap<i32, Vec<Holiday>>,
}

/// Wire shape of [`HolidayTable`] before normalization.
#[derive(Deserialize)]
struct RawHolidayTable {
    #[serde(default)]
    years: BTreeMap<i32, Vec<Holiday>>,
}

impl From<RawHolidayTable> for HolidayTable {
    fn from(raw: RawHolidayTable) -> Self {
        raw.years
            .into_iter()
            .fold(Self::new(), |table, (year, list)| table.with_year(year, list))
    }
}

impl HolidayTable {
    /// Creates an empty table (weekends are the only non-working days).
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in Indonesian national holidays and collective leave, 2024-2026.
    pub fn indonesia() -> Self {
        super::holidays::indonesia()
    }

    /// Sets the holiday list for `year`, replacing any previous entry.
    ///
    /// Entries are sorted by date; duplicate dates keep the first name and
    /// dates outside `year` are dropped.
    pub fn with_year(mut self, year: i32, holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut list: Vec<Holiday> = holidays
            .into_iter()
            .filter(|h| h.date.year() == year)
            .collect();
        list.sort_by_key(|h| h.date);
        list.dedup_by_key(|h| h.date);
        self.years.insert(year, list);
        self
    }

    /// Holidays for `year` in date order. Empty if the year is not tabulated.
    pub fn holidays_for_year(&self, year: i32) -> &[Holiday] {
        self.years.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exact-date lookup.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        let list = self.holidays_for_year(date.year());
        list.binary_search_by_key(&date, |h| h.date)
            .ok()
            .map(|i| &list[i])
    }

    /// Tabulated years, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }
}

/// A validated (year, month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// Creates a month reference. `month` is 1-12.
    pub fn new(year: i32, month: u32) -> ScheduleResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ScheduleError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month before this one.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Every date of the month, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month;
        successors(NaiveDate::from_ymd_opt(self.year, self.month, 1), |d| d.succ_opt())
            .take_while(move |d| d.month() == month)
    }
}

/// How a date is treated for scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayKind {
    Working,
    Weekend,
    /// Holiday takes precedence over weekend when both apply.
    Holiday,
}

/// A date with its derived classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_weekend: bool,
    /// Holiday name, if the date is a holiday.
    pub holiday_name: Option<String>,
}

impl CalendarDay {
    #[inline]
    pub fn is_holiday(&self) -> bool {
        self.holiday_name.is_some()
    }

    #[inline]
    pub fn is_working_day(&self) -> bool {
        !self.is_weekend && !self.is_holiday()
    }

    pub fn kind(&self) -> DayKind {
        if self.is_holiday() {
            DayKind::Holiday
        } else if self.is_weekend {
            DayKind::Weekend
        } else {
            DayKind::Working
        }
    }
}

/// Date classification queries consumed by the scheduler.
///
/// Implementors only provide the holiday lookup; weekend arithmetic and
/// working-day enumeration are derived from it.
pub trait CalendarOracle {
    /// The holiday on `date`, if any.
    fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday>;

    /// Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Neither weekend nor holiday.
    fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    fn classify(&self, date: NaiveDate) -> CalendarDay {
        CalendarDay {
            date,
            is_weekend: self.is_weekend(date),
            holiday_name: self.holiday_on(date).map(|h| h.name.clone()),
        }
    }

    /// Working days of `month`, strictly ascending.
    fn working_days_in_month(&self, month: MonthRef) -> Vec<CalendarDay> {
        month
            .days()
            .filter(|&d| self.is_working_day(d))
            .map(|d| self.classify(d))
            .collect()
    }

    fn working_day_count(&self, month: MonthRef) -> usize {
        month.days().filter(|&d| self.is_working_day(d)).count()
    }

    /// Working days in `[start, end]` (inclusive), ascending.
    fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<CalendarDay> {
        if end < start {
            return Vec::new();
        }
        successors(Some(start), |d| d.succ_opt())
            .take_while(|&d| d <= end)
            .filter(|&d| self.is_working_day(d))
            .map(|d| self.classify(d))
            .collect()
    }

    /// First working day strictly after `date`, searching up to a year ahead.
    fn next_working_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        successors(date.succ_opt(), |d| d.succ_opt())
            .take(MAX_SEARCH_DAYS)
            .find(|&d| self.is_working_day(d))
    }

    /// Last working day strictly before `date`, searching up to a year back.
    fn previous_working_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        successors(date.pred_opt(), |d| d.pred_opt())
            .take(MAX_SEARCH_DAYS)
            .find(|&d| self.is_working_day(d))
    }
}

/// Table-backed calendar oracle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayCalendar {
    table: HolidayTable,
}

impl HolidayCalendar {
    pub fn new(table: HolidayTable) -> Self {
        Self { table }
    }

    /// Calendar over the built-in Indonesian holiday table.
    pub fn indonesia() -> Self {
        Self::new(HolidayTable::indonesia())
    }

    pub fn table(&self) -> &HolidayTable {
        &self.table
    }

    pub fn holidays_for_year(&self, year: i32) -> &[Holiday] {
        self.table.holidays_for_year(year)
    }

    /// Holidays falling in `month`, in date order.
    pub fn holidays_for_month(&self, month: MonthRef) -> Vec<&Holiday> {
        self.table
            .holidays_for_year(month.year())
            .iter()
            .filter(|h| month.contains(h.date))
            .collect()
    }
}

impl CalendarOracle for HolidayCalendar {
    fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.table.get(date)
    }
}
