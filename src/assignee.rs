use serde::{Deserialize, Serialize};

/// A member of the project's WBS who can own tasks.
///
/// `rate` is the fraction of a standard full-time day the assignee works,
/// in (0, 1]. Immutable for the duration of a calculation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WbsAssignee {
    /// WBS-scoped identifier, referenced by [`crate::task::Task::assignee_id`].
    pub id: String,
    /// Identifier of the underlying user, referenced by personal schedules.
    pub user_id: String,
    pub name: String,
    pub rate: f64,
}

impl WbsAssignee {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            rate,
        }
    }

    /// Full-time assignee (rate 1.0).
    pub fn full_time(
        id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(id, user_id, name, 1.0)
    }
}
