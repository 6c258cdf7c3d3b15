//! Domain model for tasks, users and the derived task hierarchy.
//!
//! Everything in here is pure: no I/O, no ambient clock, no global state.
//! Wire-format quirks are handled by the adapters before values reach this
//! layer.

mod error;
mod fields;
mod hierarchy;
mod ids;
mod task;
pub mod timestamp;
mod user;

pub use error::{ParseTaskPriorityError, TaskDomainError};
pub use fields::{EstimatedHours, Progress, TaskPriority, TaskStatus, TaskType};
pub use hierarchy::TaskHierarchy;
pub use ids::{TaskId, UserId};
pub use task::Task;
pub use user::{User, UserDirectory, UserRole};
