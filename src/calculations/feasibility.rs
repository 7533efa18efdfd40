use crate::assignee::WbsAssignee;
use crate::calendar::{AssigneeWorkingCalendar, CompanyCalendar};
use crate::schedule::UserSchedule;
use crate::task::Task;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Why a task was flagged as infeasible. Only one reason exists today;
/// the enum leaves room for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningReason {
    NoWorkingDays,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFeasibilityWarning {
    pub task_id: String,
    pub task_no: String,
    pub task_name: String,
    pub assignee_id: Option<String>,
    pub assignee_name: Option<String>,
    pub reason: WarningReason,
}

/// Flag a task whose assignee has zero available hours on every day of
/// its YOTEI period. Tasks without a YOTEI period have nothing to
/// validate and yield `None`; so does any task with at least one day of
/// positive availability.
pub fn validate_task_feasibility(
    task: &Task,
    assignee: Option<&WbsAssignee>,
    calendar: &CompanyCalendar,
    schedules: &[UserSchedule],
) -> Option<TaskFeasibilityWarning> {
    let period = task.yotei_period()?;

    let working = match assignee {
        Some(assignee) => AssigneeWorkingCalendar::new(calendar, Some(assignee), schedules),
        None => AssigneeWorkingCalendar::company_only(calendar),
    };

    if working.has_available_day(period.start, period.end) {
        return None;
    }

    Some(TaskFeasibilityWarning {
        task_id: task.id.clone(),
        task_no: task.task_no.clone(),
        task_name: task.name.clone(),
        assignee_id: assignee.map(|assignee| assignee.id.clone()),
        assignee_name: assignee.map(|assignee| assignee.name.clone()),
        reason: WarningReason::NoWorkingDays,
    })
}

/// Batch feasibility check over many tasks, preserving input task order.
///
/// A task whose assignee id resolves to nothing is validated against the
/// company calendar only, and a user without schedule entries gets an
/// empty list — missing related data never fails the batch.
pub fn validate_tasks_feasibility(
    tasks: &[Task],
    assignees: &HashMap<String, WbsAssignee>,
    calendar: &CompanyCalendar,
    schedules_by_user: &HashMap<String, Vec<UserSchedule>>,
) -> Vec<TaskFeasibilityWarning> {
    tasks
        .par_iter()
        .filter_map(|task| {
            let assignee = task
                .assignee_id
                .as_ref()
                .and_then(|id| assignees.get(id));
            let schedules = assignee
                .and_then(|assignee| schedules_by_user.get(&assignee.user_id))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            validate_task_feasibility(task, assignee, calendar, schedules)
        })
        .collect()
}
