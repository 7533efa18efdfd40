use crate::assignee::WbsAssignee;
use crate::schedule::UserSchedule;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_STANDARD_HOURS_PER_DAY: f64 = 7.5;

/// Classification of a company holiday. Both kinds block work identically;
/// the distinction only matters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    National,
    Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyHoliday {
    pub date: NaiveDate,
    pub name: String,
    pub holiday_type: HolidayType,
}

impl CompanyHoliday {
    pub fn new(date: NaiveDate, name: impl Into<String>, holiday_type: HolidayType) -> Self {
        Self {
            date,
            name: name.into(),
            holiday_type,
        }
    }
}

/// Company-wide working calendar: a set of holidays plus the standard
/// working hours of a full-time day.
///
/// An empty holiday set is valid — every day is then a working day.
/// Weekends are NOT implied; a company that does not work Saturdays must
/// register them as holiday entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCalendar {
    holidays: HashMap<NaiveDate, CompanyHoliday>,
    standard_hours_per_day: f64,
}

/// Serializable, order-stable form of a [`CompanyCalendar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCalendarConfig {
    holidays: Vec<CompanyHoliday>,
    standard_hours_per_day: f64,
}

impl Default for CompanyCalendar {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_STANDARD_HOURS_PER_DAY)
    }
}

impl CompanyCalendar {
    pub fn new<I>(holidays: I, standard_hours_per_day: f64) -> Self
    where
        I: IntoIterator<Item = CompanyHoliday>,
    {
        let holidays = holidays
            .into_iter()
            .map(|holiday| (holiday.date, holiday))
            .collect();
        Self {
            holidays,
            standard_hours_per_day,
        }
    }

    pub fn with_standard_hours(standard_hours_per_day: f64) -> Self {
        Self::new(Vec::new(), standard_hours_per_day)
    }

    pub fn from_config(config: &CompanyCalendarConfig) -> Self {
        Self::new(
            config.holidays.iter().cloned(),
            config.standard_hours_per_day,
        )
    }

    pub fn to_config(&self) -> CompanyCalendarConfig {
        CompanyCalendarConfig::from(self)
    }

    /// Standard working hours of one unreduced, schedule-free day.
    pub fn standard_hours_per_day(&self) -> f64 {
        self.standard_hours_per_day
    }

    /// True iff the date matches a registered holiday, by calendar-day
    /// equality. NATIONAL and COMPANY entries block equally.
    pub fn is_company_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Display label of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(|holiday| holiday.name.as_str())
    }

    pub fn add_holiday(&mut self, holiday: CompanyHoliday) {
        self.holidays.insert(holiday.date, holiday);
    }

    pub fn add_holidays<I>(&mut self, holidays: I)
    where
        I: IntoIterator<Item = CompanyHoliday>,
    {
        for holiday in holidays {
            self.add_holiday(holiday);
        }
    }

    /// Register every Saturday and Sunday in `[start, end]` as COMPANY
    /// holidays. Convenience for organizations with non-working weekends;
    /// being a weekend alone never zeroes availability.
    pub fn add_weekend_holidays(&mut self, start: NaiveDate, end: NaiveDate) {
        let mut current = start;
        while current <= end {
            if is_weekend(current) {
                self.add_holiday(CompanyHoliday::new(current, "Weekend", HolidayType::Company));
            }
            current = current + Duration::days(1);
        }
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl CompanyCalendarConfig {
    pub fn new<I>(holidays: I, standard_hours_per_day: f64) -> Self
    where
        I: IntoIterator<Item = CompanyHoliday>,
    {
        let mut holidays: Vec<CompanyHoliday> = holidays.into_iter().collect();
        holidays.sort_by_key(|holiday| holiday.date);
        holidays.dedup_by_key(|holiday| holiday.date);
        Self {
            holidays,
            standard_hours_per_day,
        }
    }

    pub fn holidays(&self) -> &[CompanyHoliday] {
        &self.holidays
    }

    pub fn standard_hours_per_day(&self) -> f64 {
        self.standard_hours_per_day
    }
}

impl Default for CompanyCalendarConfig {
    fn default() -> Self {
        CompanyCalendarConfig::from(&CompanyCalendar::default())
    }
}

impl From<&CompanyCalendar> for CompanyCalendarConfig {
    fn from(calendar: &CompanyCalendar) -> Self {
        Self::new(
            calendar.holidays.values().cloned(),
            calendar.standard_hours_per_day,
        )
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// One assignee's view of the company calendar: standard hours scaled by
/// the FTE rate, zeroed on company holidays, reduced by that user's
/// personal schedules.
///
/// With no assignee the calendar runs at rate 1.0 against whatever
/// schedule slice it was handed; the services pass an empty slice for
/// unassigned tasks, which makes it "company holiday only".
pub struct AssigneeWorkingCalendar<'a> {
    calendar: &'a CompanyCalendar,
    assignee: Option<&'a WbsAssignee>,
    schedules: &'a [UserSchedule],
}

impl<'a> AssigneeWorkingCalendar<'a> {
    pub fn new(
        calendar: &'a CompanyCalendar,
        assignee: Option<&'a WbsAssignee>,
        schedules: &'a [UserSchedule],
    ) -> Self {
        Self {
            calendar,
            assignee,
            schedules,
        }
    }

    /// Calendar that only honors company holidays: no rate reduction, no
    /// personal schedules. Used for tasks with no resolvable assignee.
    pub fn company_only(calendar: &'a CompanyCalendar) -> Self {
        Self::new(calendar, None, &[])
    }

    pub fn assignee(&self) -> Option<&WbsAssignee> {
        self.assignee
    }

    /// Available working hours on `date`, clamped at zero.
    ///
    /// A company holiday blocks the whole day regardless of rate or
    /// personal schedules. Otherwise the base budget is standard hours
    /// scaled by the FTE rate, minus the user's schedule time that day.
    pub fn available_hours(&self, date: NaiveDate) -> f64 {
        if self.calendar.is_company_holiday(date) {
            return 0.0;
        }

        let rate = self.assignee.map_or(1.0, |assignee| assignee.rate);
        let base = self.calendar.standard_hours_per_day() * rate;
        let scheduled = self.scheduled_hours(date);
        (base - scheduled).max(0.0)
    }

    /// Total personal-schedule hours booked on `date`. Multiple schedules
    /// on the same day are summed.
    pub fn scheduled_hours(&self, date: NaiveDate) -> f64 {
        self.schedules
            .iter()
            .filter(|schedule| schedule.date == date)
            .map(UserSchedule::duration_hours)
            .sum()
    }

    pub fn schedules_on(&self, date: NaiveDate) -> impl Iterator<Item = &UserSchedule> {
        self.schedules
            .iter()
            .filter(move |schedule| schedule.date == date)
    }

    /// Sum of available hours over `[start, end]` inclusive. This is the
    /// capacity pool a task's total hours are spread across.
    pub fn total_available_hours(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        let mut total = 0.0;
        let mut current = start;
        while current <= end {
            total += self.available_hours(current);
            current = current + Duration::days(1);
        }
        total
    }

    /// True iff at least one day in `[start, end]` has positive
    /// availability.
    pub fn has_available_day(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let mut current = start;
        while current <= end {
            if self.available_hours(current) > 0.0 {
                return true;
            }
            current = current + Duration::days(1);
        }
        false
    }
}
