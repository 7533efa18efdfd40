use crate::schedule::ScheduleSummary;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Construction-time violations of the allocation invariants. These signal
/// a bug in the caller, not a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationError {
    NegativeAvailableHours { date: NaiveDate, hours: f64 },
    NegativeAllocatedHours { task_id: String, hours: f64 },
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationError::NegativeAvailableHours { date, hours } => {
                write!(f, "available hours on {date} must not be negative (got {hours})")
            }
            AllocationError::NegativeAllocatedHours { task_id, hours } => {
                write!(
                    f,
                    "allocated hours for task {task_id} must not be negative (got {hours})"
                )
            }
        }
    }
}

impl std::error::Error for AllocationError {}

/// One task's share of one assignee-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAllocation {
    pub task_id: String,
    pub task_name: String,
    pub allocated_hours: f64,
    /// Total planned hours of the task across its whole YOTEI period.
    pub total_task_hours: f64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

impl TaskAllocation {
    pub fn new(
        task_id: impl Into<String>,
        task_name: impl Into<String>,
        allocated_hours: f64,
        total_task_hours: f64,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<Self, AllocationError> {
        let task_id = task_id.into();
        if !allocated_hours.is_finite() || allocated_hours < 0.0 {
            return Err(AllocationError::NegativeAllocatedHours {
                task_id,
                hours: allocated_hours,
            });
        }
        Ok(Self {
            task_id,
            task_name: task_name.into(),
            allocated_hours,
            total_task_hours,
            period_start,
            period_end,
        })
    }

    /// Allocations are the same iff they belong to the same task.
    pub fn is_same_task(&self, other: &TaskAllocation) -> bool {
        self.task_id == other.task_id
    }

    /// Fold another allocation for the same task into this one by summing
    /// its hours. Allocations for different tasks are left untouched.
    pub fn merge(&mut self, other: &TaskAllocation) {
        if self.is_same_task(other) {
            self.allocated_hours += other.allocated_hours;
        }
    }
}

/// One assignee's full day: capacity, flags, and every task's share of it.
/// Derived per request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWorkAllocation {
    pub date: NaiveDate,
    pub available_hours: f64,
    pub is_company_holiday: bool,
    /// Saturday/Sunday flag. Informational only; a weekend does not zero
    /// availability unless registered as a company holiday.
    pub is_weekend: bool,
    pub task_allocations: Vec<TaskAllocation>,
    pub schedule_summaries: Vec<ScheduleSummary>,
}

impl DailyWorkAllocation {
    pub fn new(
        date: NaiveDate,
        available_hours: f64,
        is_company_holiday: bool,
        is_weekend: bool,
        task_allocations: Vec<TaskAllocation>,
        schedule_summaries: Vec<ScheduleSummary>,
    ) -> Result<Self, AllocationError> {
        if !available_hours.is_finite() || available_hours < 0.0 {
            return Err(AllocationError::NegativeAvailableHours {
                date,
                hours: available_hours,
            });
        }
        Ok(Self {
            date,
            available_hours,
            is_company_holiday,
            is_weekend,
            task_allocations,
            schedule_summaries,
        })
    }

    /// Sum of the day's task allocations.
    pub fn allocated_hours(&self) -> f64 {
        self.task_allocations
            .iter()
            .map(|allocation| allocation.allocated_hours)
            .sum()
    }

    pub fn is_overloaded(&self) -> bool {
        self.allocated_hours() > self.available_hours
    }

    /// Allocated over available, or 0 when the day has no capacity.
    pub fn utilization_rate(&self) -> f64 {
        if self.available_hours == 0.0 {
            0.0
        } else {
            self.allocated_hours() / self.available_hours
        }
    }

    /// Hours beyond the day's capacity, floored at zero.
    pub fn overloaded_hours(&self) -> f64 {
        (self.allocated_hours() - self.available_hours).max(0.0)
    }
}

/// One assignee across a requested date range: one entry per calendar day,
/// inclusive on both ends, in date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssigneeWorkload {
    pub assignee_id: String,
    pub assignee_name: String,
    pub rate: f64,
    pub daily_allocations: Vec<DailyWorkAllocation>,
}

impl AssigneeWorkload {
    pub fn new(
        assignee_id: impl Into<String>,
        assignee_name: impl Into<String>,
        rate: f64,
        daily_allocations: Vec<DailyWorkAllocation>,
    ) -> Self {
        Self {
            assignee_id: assignee_id.into(),
            assignee_name: assignee_name.into(),
            rate,
            daily_allocations,
        }
    }

    pub fn total_available_hours(&self) -> f64 {
        self.daily_allocations
            .iter()
            .map(|day| day.available_hours)
            .sum()
    }

    pub fn total_allocated_hours(&self) -> f64 {
        self.daily_allocations
            .iter()
            .map(DailyWorkAllocation::allocated_hours)
            .sum()
    }

    /// Dates where allocation exceeds capacity, in range order.
    pub fn overloaded_days(&self) -> Vec<NaiveDate> {
        self.daily_allocations
            .iter()
            .filter(|day| day.is_overloaded())
            .map(|day| day.date)
            .collect()
    }
}
