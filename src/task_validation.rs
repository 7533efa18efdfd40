use crate::assignee::WbsAssignee;
use crate::task::Task;
use std::collections::HashSet;
use std::fmt;

const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct TaskValidationError {
    message: String,
}

impl TaskValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TaskValidationError {}

pub fn validate_task(task: &Task) -> Result<(), TaskValidationError> {
    for period in &task.periods {
        if period.start > period.end {
            return Err(TaskValidationError::new(format!(
                "task {} has period start {} after end {}",
                task.id, period.start, period.end
            )));
        }
        if !period.hours.is_finite() || period.hours < -EPSILON {
            return Err(TaskValidationError::new(format!(
                "task {} has invalid period hours {}",
                task.id, period.hours
            )));
        }
    }
    Ok(())
}

pub fn validate_task_collection(tasks: &[Task]) -> Result<(), TaskValidationError> {
    let mut seen_ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen_ids.insert(task.id.as_str()) {
            return Err(TaskValidationError::new(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        validate_task(task)?;
    }
    Ok(())
}

pub fn validate_assignee(assignee: &WbsAssignee) -> Result<(), TaskValidationError> {
    if !assignee.rate.is_finite() || assignee.rate <= 0.0 || assignee.rate > 1.0 + EPSILON {
        return Err(TaskValidationError::new(format!(
            "assignee {} has invalid rate {} (must be in (0, 1])",
            assignee.id, assignee.rate
        )));
    }
    Ok(())
}
