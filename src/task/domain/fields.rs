//! Categorical and bounded scalar fields carried by a task.
//!
//! Type and status are open enumerations: labels the crate does not know are
//! preserved verbatim in an `Other` variant instead of being rejected.

use super::ParseTaskPriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of work a task represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskType {
    /// Defect report.
    Bug,
    /// New functionality.
    Feature,
    /// Enhancement of existing functionality.
    Improvement,
    /// Generic unit of work, assigned by the task service when none is given.
    #[default]
    Task,
    /// Label not known to this crate, kept as received.
    Other(String),
}

impl TaskType {
    /// Returns the canonical wire label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bug => "BUG",
            Self::Feature => "FEATURE",
            Self::Improvement => "IMPROVEMENT",
            Self::Task => "TASK",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for TaskType {
    fn from(value: &str) -> Self {
        match normalize_label(value).as_str() {
            "BUG" => Self::Bug,
            "FEATURE" => Self::Feature,
            "IMPROVEMENT" => Self::Improvement,
            "TASK" | "" => Self::Task,
            _ => Self::Other(value.trim().to_owned()),
        }
    }
}

impl From<String> for TaskType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TaskType> for String {
    fn from(value: TaskType) -> Self {
        match value {
            TaskType::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status of a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Not started. Assigned by the task service when none is given.
    #[default]
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
    /// Waiting on something outside the task.
    Blocked,
    /// Label not known to this crate, kept as received.
    Other(String),
}

impl TaskStatus {
    /// Returns the canonical wire label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Blocked => "BLOCKED",
            Self::Other(label) => label,
        }
    }

    /// Returns `true` when no further work is expected.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        match normalize_label(value).as_str() {
            "TODO" | "" => Self::Todo,
            "IN_PROGRESS" | "INPROGRESS" => Self::InProgress,
            "DONE" => Self::Done,
            "BLOCKED" => Self::Blocked,
            _ => Self::Other(value.trim().to_owned()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TaskStatus> for String {
    fn from(value: TaskStatus) -> Self {
        match value {
            TaskStatus::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative importance of a task. Drives bar colouring on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal scheduling.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs attention now.
    Critical,
}

impl TaskPriority {
    /// Returns the canonical wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize_label(value).as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// Fully complete.
    pub const COMPLETE: Self = Self(100);

    /// Creates a progress value, clamping out-of-range input into `0..=100`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let bounded = value.clamp(0, 100);
        Self(u8::try_from(bounded).unwrap_or(100))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<i64> for Progress {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Progress> for u8 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Non-negative effort estimate in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct EstimatedHours(u32);

impl EstimatedHours {
    /// Creates an estimate, clamping negative input to zero.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
    }

    /// Returns the estimate in hours.
    #[must_use]
    pub const fn hours(self) -> u32 {
        self.0
    }
}

impl From<i64> for EstimatedHours {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<EstimatedHours> for u32 {
    fn from(value: EstimatedHours) -> Self {
        value.0
    }
}

/// Upper-cases a label and folds separators so `in-progress`, `In Progress`
/// and `IN_PROGRESS` compare equal.
fn normalize_label(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
