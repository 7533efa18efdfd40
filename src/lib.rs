pub mod allocation;
pub mod assignee;
pub mod calculations;
pub mod calendar;
pub mod report;
pub mod schedule;
pub mod task;
pub mod task_validation;

pub use allocation::{AllocationError, AssigneeWorkload, DailyWorkAllocation, TaskAllocation};
pub use assignee::WbsAssignee;
pub use calculations::feasibility::{
    TaskFeasibilityWarning, WarningReason, validate_task_feasibility, validate_tasks_feasibility,
};
pub use calculations::workload::{WorkloadCalculation, assignee_workloads};
pub use calendar::{
    AssigneeWorkingCalendar, CompanyCalendar, CompanyCalendarConfig, CompanyHoliday,
    DEFAULT_STANDARD_HOURS_PER_DAY, HolidayType, is_weekend,
};
pub use report::{
    ReportError, ReportResult, WorkloadReport, load_report_from_json, save_report_to_csv,
    save_report_to_json,
};
pub use schedule::{ScheduleSummary, UserSchedule};
pub use task::{PeriodType, Task, TaskPeriod};
pub use task_validation::{
    TaskValidationError, validate_assignee, validate_task, validate_task_collection,
};
