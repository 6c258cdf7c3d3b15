//! Adapter implementations for the task context.
//!
//! - [`wire`]: JSON shapes of the task and user services and their
//!   normalization into domain values
//! - [`memory`]: in-memory [`TaskSource`](crate::task::ports::TaskSource)

pub mod memory;
pub mod wire;
