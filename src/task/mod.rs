//! Task records and their hierarchy.
//!
//! Records arrive from the task service in a loosely typed wire form, are
//! normalized into [`domain::Task`] values, and are then linked into a
//! forest by [`hierarchy::build_forest`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Forest assembly and queries in [`hierarchy`]
//! - List filtering in [`filter`]

pub mod adapters;
pub mod domain;
pub mod filter;
pub mod hierarchy;
pub mod ports;

#[cfg(test)]
mod tests;
