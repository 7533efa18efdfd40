use crate::allocation::AssigneeWorkload;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum ReportError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Serialization(err) => write!(f, "serialization error: {err}"),
            ReportError::Io(err) => write!(f, "io error: {err}"),
            ReportError::Csv(err) => write!(f, "csv error: {err}"),
            ReportError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<SerdeJsonError> for ReportError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for ReportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ReportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Snapshot of one computed workload run. The report is a derived
/// artifact for downstream consumers; the engine never reads it back as
/// an input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub workloads: Vec<AssigneeWorkload>,
}

impl WorkloadReport {
    pub fn new(start: NaiveDate, end: NaiveDate, workloads: Vec<AssigneeWorkload>) -> Self {
        Self {
            start,
            end,
            workloads,
        }
    }
}

pub fn save_report_to_json<P: AsRef<Path>>(report: &WorkloadReport, path: P) -> ReportResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

pub fn load_report_from_json<P: AsRef<Path>>(path: P) -> ReportResult<WorkloadReport> {
    let file = File::open(path)?;
    let report: WorkloadReport = serde_json::from_reader(file)?;
    for workload in &report.workloads {
        for day in &workload.daily_allocations {
            if day.available_hours < 0.0 {
                return Err(ReportError::InvalidData(format!(
                    "negative available hours for {} on {}",
                    workload.assignee_id, day.date
                )));
            }
        }
    }
    Ok(report)
}

/// One assignee-day, flattened for spreadsheet consumers.
#[derive(Debug, Serialize)]
struct WorkloadCsvRecord {
    assignee_id: String,
    assignee_name: String,
    date: String,
    available_hours: f64,
    allocated_hours: f64,
    utilization_rate: f64,
    is_overloaded: bool,
    is_company_holiday: bool,
    is_weekend: bool,
    task_count: usize,
}

pub fn save_report_to_csv<P: AsRef<Path>>(report: &WorkloadReport, path: P) -> ReportResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for workload in &report.workloads {
        for day in &workload.daily_allocations {
            writer.serialize(WorkloadCsvRecord {
                assignee_id: workload.assignee_id.clone(),
                assignee_name: workload.assignee_name.clone(),
                date: day.date.to_string(),
                available_hours: day.available_hours,
                allocated_hours: day.allocated_hours(),
                utilization_rate: day.utilization_rate(),
                is_overloaded: day.is_overloaded(),
                is_company_holiday: day.is_company_holiday,
                is_weekend: day.is_weekend,
                task_count: day.task_allocations.len(),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
