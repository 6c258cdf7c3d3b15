//! Gantt projection: flattening a task forest into timeline bars.
//!
//! [`project`] walks a forest depth-first and emits one [`GanttBar`] per
//! task, resolving missing schedule fields against the injected clock and
//! colouring bars by priority through the fixed [`palette`].

mod bar;
mod config;
pub mod palette;
mod projection;

pub use bar::{BarKind, BarStyle, GanttBar};
pub use config::ProjectionConfig;
pub use projection::{Projection, ProjectionReport, project, project_at, project_wire};

#[cfg(test)]
mod tests;
