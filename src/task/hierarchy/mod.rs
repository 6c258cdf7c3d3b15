//! Reconstruction of the task forest from flat, parent-linked records.
//!
//! [`build_forest`] turns the flat list served by the task service into
//! root-level [`TaskHierarchy`](crate::task::domain::TaskHierarchy) nodes.
//! The queries in [`query`] answer the questions an edit form asks about the
//! same parent links without building the whole forest.

mod builder;
pub mod query;

pub use builder::{Forest, HierarchyReport, build_forest};
pub use query::{descendant_ids, parent_candidates};
