//! Tox timeline: hierarchical task planning rendered as a Gantt chart.
//!
//! This crate turns the flat task records served by the task service into a
//! parent/child forest and projects that forest onto ordered, styled
//! timeline bars.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Canonical task, user and hierarchy values
//! - **Ports**: The [`task::ports::TaskSource`] contract for fetching tasks
//! - **Adapters**: Wire-format normalization and an in-memory source
//!
//! # Modules
//!
//! - [`task`]: Task records, normalization, forest building and filtering
//! - [`gantt`]: Projection of a forest onto timeline bars
//! - [`timeline`]: Refresh orchestration over a task source

pub mod gantt;
pub mod task;
pub mod timeline;
