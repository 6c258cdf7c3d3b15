//! Timeline orchestration: fetch, build, project.
//!
//! [`TimelineService`] is what a page calls on load, on refresh and after a
//! dialog save. It owns no task state between calls apart from a generation
//! counter that lets the newest refresh win.

mod config;
mod service;

pub use config::{DisplayConfig, HierarchyMode, TimelineConfig};
pub use service::{
    Diagnostics, RefreshTicket, TimelineError, TimelineResult, TimelineService, TimelineSnapshot,
};

#[cfg(test)]
mod tests;
