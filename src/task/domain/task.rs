//! Canonical task record.

use super::{
    EstimatedHours, Progress, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskType, UserId,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A unit of trackable work in its canonical, validated form.
///
/// Instances are produced by the wire adapter or built directly in code; in
/// both cases the identifier and title are guaranteed non-empty and progress
/// is within `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    task_type: TaskType,
    status: TaskStatus,
    priority: Option<TaskPriority>,
    assignee: Option<UserId>,
    parent_id: Option<TaskId>,
    start_time: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
    progress: Progress,
    estimated_hours: Option<EstimatedHours>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a root task with service defaults for every optional field.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is blank.
    pub fn new(id: TaskId, title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let trimmed = raw_title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: trimmed.to_owned(),
            description: None,
            task_type: TaskType::default(),
            status: TaskStatus::default(),
            priority: None,
            assignee: None,
            parent_id: None,
            start_time: None,
            due_date: None,
            progress: Progress::default(),
            estimated_hours: None,
            created_at: None,
            updated_at: None,
        })
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task category.
    #[must_use]
    pub fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    /// Sets the workflow status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Assigns the task to a user.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Links the task under a parent task.
    #[must_use]
    pub fn with_parent(mut self, parent_id: TaskId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the scheduled start.
    #[must_use]
    pub const fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets progress, clamping into `0..=100`.
    #[must_use]
    pub fn with_progress(mut self, percent: i64) -> Self {
        self.set_progress(percent);
        self
    }

    /// Sets the effort estimate, clamping negative values to zero.
    #[must_use]
    pub fn with_estimated_hours(mut self, hours: i64) -> Self {
        self.estimated_hours = Some(EstimatedHours::clamped(hours));
        self
    }

    /// Sets the audit timestamps reported by the task service.
    #[must_use]
    pub const fn with_audit(
        mut self,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Updates progress from user input, clamping into `0..=100`.
    pub fn set_progress(&mut self, percent: i64) {
        self.progress = Progress::clamped(percent);
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task category.
    #[must_use]
    pub const fn task_type(&self) -> &TaskType {
        &self.task_type
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the priority, if one was recognised.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }

    /// Returns the parent reference, if any. The parent may not exist.
    #[must_use]
    pub const fn parent_id(&self) -> Option<&TaskId> {
        self.parent_id.as_ref()
    }

    /// Returns the scheduled start, if any.
    #[must_use]
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the effort estimate, if any.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<EstimatedHours> {
        self.estimated_hours
    }

    /// Returns the creation timestamp, if reported.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the last-update timestamp, if reported.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
