//! Port contracts for the task context.
//!
//! Ports define infrastructure-agnostic interfaces used by the timeline
//! service.

pub mod source;

pub use source::{SessionContext, TaskSource, TaskSourceError, TaskSourceResult};
