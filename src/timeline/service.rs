//! Service layer tying the task source, hierarchy builder and projection
//! together.

use super::{HierarchyMode, TimelineConfig};
use crate::gantt::{GanttBar, Projection, ProjectionReport, project};
use crate::task::{
    adapters::wire::{normalize_hierarchy, normalize_tasks},
    domain::{TaskHierarchy, TaskId},
    hierarchy::{HierarchyReport, build_forest},
    ports::{SessionContext, TaskSource, TaskSourceError},
};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::debug;

/// Service-level errors for timeline refreshes.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The task source failed; propagated unchanged.
    #[error(transparent)]
    Source(#[from] TaskSourceError),

    /// A newer refresh started while this one was fetching.
    #[error("refresh {ticket} superseded by refresh {latest}")]
    Superseded {
        /// Generation of the discarded refresh.
        ticket: u64,
        /// Generation of the newest refresh.
        latest: u64,
    },
}

/// Result type for timeline service operations.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Generation number handed out when a refresh starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    /// Returns the generation number.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Data-quality summary of one refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Flat records dropped by wire normalization.
    pub rejected_records: usize,
    /// Counters from building the forest over the flat list.
    pub hierarchy: HierarchyReport,
    /// Projection counters, including skipped hierarchy nodes.
    pub projection: ProjectionReport,
}

impl Diagnostics {
    /// Returns `true` when no record was dropped or repaired.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rejected_records == 0
            && self.hierarchy.is_clean()
            && self.projection.skipped_nodes == 0
    }
}

/// Outcome of a successful refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSnapshot {
    generation: u64,
    projection: Projection,
    diagnostics: Diagnostics,
}

impl TimelineSnapshot {
    /// Generation of the refresh that produced this snapshot.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Bars in render order.
    #[must_use]
    pub fn bars(&self) -> &[GanttBar] {
        self.projection.bars()
    }

    /// The underlying projection.
    #[must_use]
    pub const fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Mutable projection, for expand/collapse toggles.
    pub const fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }

    /// Data-quality summary.
    #[must_use]
    pub const fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }
}

/// Fetches tasks and turns them into timeline snapshots.
///
/// Only the newest refresh may produce a snapshot: a refresh whose fetch
/// completes after a later refresh has started fails with
/// [`TimelineError::Superseded`].
#[derive(Clone)]
pub struct TimelineService<S, C>
where
    S: TaskSource,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    clock: Arc<C>,
    config: TimelineConfig,
    generation: Arc<AtomicU64>,
}

impl<S, C> TimelineService<S, C>
where
    S: TaskSource,
    C: Clock + Send + Sync,
{
    /// Creates a new timeline service.
    #[must_use]
    pub fn new(source: Arc<S>, clock: Arc<C>, config: TimelineConfig) -> Self {
        Self {
            source,
            clock,
            config,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Starts a new generation, invalidating every earlier ticket.
    #[must_use]
    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket(self.generation.fetch_add(1, Ordering::SeqCst).saturating_add(1))
    }

    /// Returns `true` while no newer refresh has started.
    #[must_use]
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Fetches, builds and projects the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::Source`] when a fetch fails and
    /// [`TimelineError::Superseded`] when a newer refresh started meanwhile.
    pub async fn refresh(&self, session: &SessionContext) -> TimelineResult<TimelineSnapshot> {
        let ticket = self.begin_refresh();
        let (forest, mut diagnostics) = match self.config.mode {
            HierarchyMode::ClientSide => self.client_side_forest(session).await?,
            HierarchyMode::ServerSide => self.server_side_forest(session).await?,
        };

        let latest = self.generation.load(Ordering::SeqCst);
        if latest != ticket.0 {
            debug!(ticket = ticket.0, latest, "discarding superseded refresh");
            return Err(TimelineError::Superseded {
                ticket: ticket.0,
                latest,
            });
        }

        let projection = project(&forest, &self.config.projection, &*self.clock);
        let skipped_nodes = diagnostics.projection.skipped_nodes;
        diagnostics.projection = projection.report();
        diagnostics.projection.skipped_nodes += skipped_nodes;
        debug!(
            generation = ticket.0,
            bars = projection.bars().len(),
            clean = diagnostics.is_clean(),
            "timeline refreshed"
        );

        Ok(TimelineSnapshot {
            generation: ticket.0,
            projection,
            diagnostics,
        })
    }

    async fn client_side_forest(
        &self,
        session: &SessionContext,
    ) -> TimelineResult<(Vec<TaskHierarchy>, Diagnostics)> {
        let records = self.source.fetch_tasks(session).await?;
        let normalized = normalize_tasks(records);
        let forest = build_forest(normalized.tasks);
        let diagnostics = Diagnostics {
            rejected_records: normalized.rejected.len(),
            hierarchy: forest.report(),
            ..Diagnostics::default()
        };
        Ok((forest.into_roots(), diagnostics))
    }

    /// Fetches one server-built hierarchy per root of the flat list.
    ///
    /// Roots are the roots the client-side build would produce: tasks with
    /// no parent, tasks whose parent is missing, and tasks promoted out of a
    /// parent cycle.
    async fn server_side_forest(
        &self,
        session: &SessionContext,
    ) -> TimelineResult<(Vec<TaskHierarchy>, Diagnostics)> {
        let records = self.source.fetch_tasks(session).await?;
        let normalized = normalize_tasks(records);
        let flat = build_forest(normalized.tasks);
        let report = flat.report();
        let roots: Vec<TaskId> = flat
            .into_roots()
            .iter()
            .map(|root| root.id().clone())
            .collect();

        let mut hierarchies = Vec::with_capacity(roots.len());
        for root in &roots {
            hierarchies.push(self.source.fetch_hierarchy(session, root).await?);
        }

        let nested = normalize_hierarchy(hierarchies);
        let mut diagnostics = Diagnostics {
            rejected_records: normalized.rejected.len(),
            hierarchy: report,
            ..Diagnostics::default()
        };
        diagnostics.projection.skipped_nodes = nested.rejected.len();
        Ok((nested.roots, diagnostics))
    }
}
