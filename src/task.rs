use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three kinds of task period carried by the WBS: planned (YOTEI),
/// baseline (KIJUN), and actual (JISSEKI). Only YOTEI periods drive
/// workload allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodType {
    Yotei,
    Kijun,
    Jisseki,
}

/// A dated span of work with a fixed total of hours. The hours are not a
/// per-day figure; the allocation engine spreads them across the span in
/// proportion to each day's available capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPeriod {
    pub period_type: PeriodType,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub hours: f64,
}

impl TaskPeriod {
    pub fn new(period_type: PeriodType, start: NaiveDate, end: NaiveDate, hours: f64) -> Self {
        Self {
            period_type,
            start,
            end,
            hours,
        }
    }

    /// Inclusive calendar-day containment check.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// Human-facing task number within the WBS (e.g. "D1-0001").
    pub task_no: String,
    pub name: String,
    pub assignee_id: Option<String>,
    pub periods: Vec<TaskPeriod>,
}

impl Task {
    pub fn new(id: impl Into<String>, task_no: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            task_no: task_no.into(),
            name: name.into(),
            assignee_id: None,
            periods: Vec::new(),
        }
    }

    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    pub fn with_period(mut self, period: TaskPeriod) -> Self {
        self.periods.push(period);
        self
    }

    /// The task's planned period, if any. A task without one contributes
    /// no allocation and is skipped by feasibility validation.
    pub fn yotei_period(&self) -> Option<&TaskPeriod> {
        self.periods
            .iter()
            .find(|period| period.period_type == PeriodType::Yotei)
    }

    pub fn period_of(&self, period_type: PeriodType) -> Option<&TaskPeriod> {
        self.periods
            .iter()
            .find(|period| period.period_type == period_type)
    }
}
