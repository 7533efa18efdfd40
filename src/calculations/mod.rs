pub mod feasibility;
pub mod workload;
