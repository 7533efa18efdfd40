use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A personal appointment for one user on one date.
///
/// Times are `HH:MM` strings; `24:00` is accepted as end-of-day so a
/// `00:00`–`24:00` entry blocks a full 24 hours. Duration is always
/// derived, never stored. A malformed or inverted time range degrades to
/// a zero-hour deduction rather than failing the calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSchedule {
    pub user_id: String,
    pub date: NaiveDate,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
}

impl UserSchedule {
    pub fn new(
        user_id: impl Into<String>,
        date: NaiveDate,
        title: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            title: title.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Appointment length in hours, minutes-precise.
    pub fn duration_hours(&self) -> f64 {
        match (
            parse_time_minutes(&self.start_time),
            parse_time_minutes(&self.end_time),
        ) {
            (Some(start), Some(end)) if end > start => f64::from(end - start) / 60.0,
            _ => 0.0,
        }
    }
}

/// Display record carried on a day's allocation so the UI can show which
/// appointments reduced availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
}

impl From<&UserSchedule> for ScheduleSummary {
    fn from(schedule: &UserSchedule) -> Self {
        Self {
            title: schedule.title.clone(),
            start_time: schedule.start_time.clone(),
            end_time: schedule.end_time.clone(),
            duration_hours: schedule.duration_hours(),
        }
    }
}

/// Parse `HH:MM` into minutes since midnight. `24:00` maps to 1440; any
/// other value outside the clock, or a malformed string, is `None`.
pub(crate) fn parse_time_minutes(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 24 || minutes >= 60 {
        return None;
    }
    let total = hours * 60 + minutes;
    if total > 24 * 60 {
        return None;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duration_is_minutes_precise() {
        let schedule = UserSchedule::new("u1", date(2025, 1, 15), "Standup", "09:00", "09:45");
        assert!((schedule.duration_hours() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn end_of_day_marker_counts_full_day() {
        let schedule = UserSchedule::new("u1", date(2025, 1, 15), "PTO", "00:00", "24:00");
        assert_eq!(schedule.duration_hours(), 24.0);
    }

    #[test]
    fn malformed_or_inverted_times_count_zero() {
        let bad_format = UserSchedule::new("u1", date(2025, 1, 15), "x", "nine", "10:00");
        assert_eq!(bad_format.duration_hours(), 0.0);

        let inverted = UserSchedule::new("u1", date(2025, 1, 15), "x", "15:00", "13:00");
        assert_eq!(inverted.duration_hours(), 0.0);

        let out_of_clock = UserSchedule::new("u1", date(2025, 1, 15), "x", "09:00", "25:00");
        assert_eq!(out_of_clock.duration_hours(), 0.0);

        let bad_minutes = UserSchedule::new("u1", date(2025, 1, 15), "x", "09:75", "10:00");
        assert_eq!(bad_minutes.duration_hours(), 0.0);
    }

    #[test]
    fn summary_carries_derived_duration() {
        let schedule = UserSchedule::new("u1", date(2025, 1, 15), "Review", "13:00", "15:30");
        let summary = ScheduleSummary::from(&schedule);
        assert_eq!(summary.title, "Review");
        assert!((summary.duration_hours - 2.5).abs() < 1e-9);
    }
}
