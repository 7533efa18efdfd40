use crate::allocation::{AllocationError, AssigneeWorkload, DailyWorkAllocation, TaskAllocation};
use crate::assignee::WbsAssignee;
use crate::calendar::{AssigneeWorkingCalendar, CompanyCalendar, is_weekend};
use crate::schedule::{ScheduleSummary, UserSchedule};
use crate::task::Task;
use chrono::{Duration, NaiveDate};
use rayon::prelude::*;

/// Workload calculation for one assignee over a date range.
///
/// The engine borrows its inputs and is pure: identical inputs produce
/// identical output, and nothing is written back anywhere. Each task's
/// fixed total of YOTEI hours is spread across its period in proportion
/// to the share of the period's capacity each day contributes, so a day
/// shortened by personal schedules receives proportionally less of the
/// task.
pub struct WorkloadCalculation<'a> {
    tasks: &'a [Task],
    assignee: Option<&'a WbsAssignee>,
    schedules: &'a [UserSchedule],
    calendar: &'a CompanyCalendar,
}

impl<'a> WorkloadCalculation<'a> {
    pub fn new(
        tasks: &'a [Task],
        assignee: Option<&'a WbsAssignee>,
        schedules: &'a [UserSchedule],
        calendar: &'a CompanyCalendar,
    ) -> Self {
        Self {
            tasks,
            assignee,
            schedules,
            calendar,
        }
    }

    fn working_calendar(&self) -> AssigneeWorkingCalendar<'a> {
        AssigneeWorkingCalendar::new(self.calendar, self.assignee, self.schedules)
    }

    /// One [`DailyWorkAllocation`] per calendar day in `[start, end]`
    /// inclusive, in date order.
    pub fn daily_allocations(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyWorkAllocation>, AllocationError> {
        let working = self.working_calendar();
        let mut days = Vec::new();
        let mut current = start;
        while current <= end {
            let available_hours = working.available_hours(current);
            let schedule_summaries = working
                .schedules_on(current)
                .map(ScheduleSummary::from)
                .collect();
            let task_allocations = self.task_allocations_for_date(current, available_hours)?;
            days.push(DailyWorkAllocation::new(
                current,
                available_hours,
                self.calendar.is_company_holiday(current),
                is_weekend(current),
                task_allocations,
                schedule_summaries,
            )?);
            current = current + Duration::days(1);
        }
        Ok(days)
    }

    /// Allocations of every active task on `date`, given that day's
    /// availability.
    ///
    /// A task is active when its YOTEI period covers the date. The share
    /// is `total_hours × available / period_capacity`, where the capacity
    /// is summed over the task's FULL period, not just the requested
    /// range. Tasks whose period has no capacity anywhere are skipped;
    /// zero shares are not emitted.
    pub fn task_allocations_for_date(
        &self,
        date: NaiveDate,
        available_hours: f64,
    ) -> Result<Vec<TaskAllocation>, AllocationError> {
        if available_hours <= 0.0 {
            return Ok(Vec::new());
        }

        let working = self.working_calendar();
        let mut allocations = Vec::new();
        for task in self.tasks {
            let Some(period) = task.yotei_period() else {
                continue;
            };
            if !period.contains(date) {
                continue;
            }

            let period_capacity = working.total_available_hours(period.start, period.end);
            if period_capacity <= 0.0 {
                // Nothing can be allocated into a period with no capacity;
                // the feasibility service reports these.
                continue;
            }

            let allocated_hours = period.hours * (available_hours / period_capacity);
            if allocated_hours > 0.0 {
                allocations.push(TaskAllocation::new(
                    &task.id,
                    &task.name,
                    allocated_hours,
                    period.hours,
                    period.start,
                    period.end,
                )?);
            }
        }
        Ok(allocations)
    }
}

/// Workloads for every assignee over `[start, end]`.
///
/// Tasks are grouped by assignee id and schedules by user id; an assignee
/// with no tasks still gets a workload (all days unallocated). The
/// per-assignee computations are independent, so they run in parallel;
/// the output follows the assignee input order.
pub fn assignee_workloads(
    tasks: &[Task],
    assignees: &[WbsAssignee],
    schedules: &[UserSchedule],
    calendar: &CompanyCalendar,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<AssigneeWorkload>, AllocationError> {
    assignees
        .par_iter()
        .map(|assignee| {
            let assignee_tasks: Vec<Task> = tasks
                .iter()
                .filter(|task| task.assignee_id.as_deref() == Some(assignee.id.as_str()))
                .cloned()
                .collect();
            let user_schedules: Vec<UserSchedule> = schedules
                .iter()
                .filter(|schedule| schedule.user_id == assignee.user_id)
                .cloned()
                .collect();

            let calculation = WorkloadCalculation::new(
                &assignee_tasks,
                Some(assignee),
                &user_schedules,
                calendar,
            );
            let daily_allocations = calculation.daily_allocations(start, end)?;
            Ok(AssigneeWorkload::new(
                assignee.id.as_str(),
                assignee.name.as_str(),
                assignee.rate,
                daily_allocations,
            ))
        })
        .collect()
}
