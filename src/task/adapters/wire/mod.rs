//! JSON shapes served by the task and user services.
//!
//! These records accept every variant the services have shipped: numeric or
//! string identifiers, epoch seconds, epoch milliseconds or ISO-8601 text for
//! timestamps, and free-form enumeration labels. Nothing here is trusted;
//! [`normalize`] converts the records into canonical domain values.

pub mod normalize;

use serde::{Deserialize, Serialize};

pub use normalize::{
    NormalizationError, NormalizedHierarchy, NormalizedTasks, normalize_hierarchy,
    normalize_task, normalize_tasks, normalize_user, parse_tasks_json,
};

/// Identifier as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    /// Numeric key.
    Number(i64),
    /// Text key.
    Text(String),
}

impl From<i64> for WireId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for WireId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Timestamp as sent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireTimestamp {
    /// Epoch seconds or milliseconds.
    Epoch(i64),
    /// Epoch value serialized as a float.
    FractionalEpoch(f64),
    /// ISO-8601 text or digits.
    Text(String),
}

/// Number that may arrive as an integer, a float or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Fractional(f64),
    /// Numeric text.
    Text(String),
}

/// Task record as returned by `GET /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireTask {
    /// Task identifier.
    #[serde(default)]
    pub id: Option<WireId>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free text, may contain markup.
    #[serde(default)]
    pub description: Option<String>,
    /// Category label.
    #[serde(default, rename = "type")]
    pub task_type: Option<String>,
    /// Status label.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority label.
    #[serde(default)]
    pub priority: Option<String>,
    /// Assigned user.
    #[serde(default)]
    pub assignee_id: Option<WireId>,
    /// Parent task.
    #[serde(default)]
    pub parent_id: Option<WireId>,
    /// Scheduled start.
    #[serde(default)]
    pub start_time: Option<WireTimestamp>,
    /// Due date.
    #[serde(default)]
    pub due_date: Option<WireTimestamp>,
    /// Completion percentage, unclamped.
    #[serde(default)]
    pub progress: Option<WireNumber>,
    /// Effort estimate in hours.
    #[serde(default)]
    pub estimated_hours: Option<WireNumber>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<WireTimestamp>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<WireTimestamp>,
}

/// Pre-nested hierarchy as returned by `GET /tasks/hierarchy/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireTaskHierarchy {
    /// The node's task.
    pub task: WireTask,
    /// Child nodes, in the order the service returned them.
    #[serde(default, alias = "children")]
    pub sub_tasks: Option<Vec<WireTaskHierarchy>>,
}

/// User record as returned by the user-management service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireUser {
    /// User identifier.
    #[serde(default)]
    pub id: Option<WireId>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Login e-mail.
    #[serde(default)]
    pub email: Option<String>,
    /// Role label.
    #[serde(default)]
    pub role: Option<String>,
    /// Employer.
    #[serde(default)]
    pub company: Option<String>,
    /// Department.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<WireTimestamp>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<WireTimestamp>,
}
