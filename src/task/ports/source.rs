//! Port for the remote task service.

use crate::task::adapters::wire::{WireTask, WireTaskHierarchy};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Credentials for the current session, handed to every fetch.
///
/// The core never reads tokens from ambient storage; the calling layer owns
/// the session and passes it in explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionContext {
    bearer_token: String,
}

impl SessionContext {
    /// Creates a session from a bearer token.
    #[must_use]
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    /// Value for an HTTP `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}

/// Read access to the authoritative task store.
///
/// Implementations wrap `GET /tasks` and `GET /tasks/hierarchy/{id}`.
/// Mutations go through the surrounding service layer, which must refresh
/// the timeline afterwards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetches the flat task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the service cannot be reached or
    /// rejects the session.
    async fn fetch_tasks(&self, session: &SessionContext) -> TaskSourceResult<Vec<WireTask>>;

    /// Fetches the server-built hierarchy rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::NotFound`] when the root does not exist,
    /// or another [`TaskSourceError`] on transport failure.
    async fn fetch_hierarchy(
        &self,
        session: &SessionContext,
        root: &TaskId,
    ) -> TaskSourceResult<WireTaskHierarchy>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The session is missing or expired.
    #[error("session rejected by task service")]
    Unauthorized,

    /// The requested task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The service could not be reached.
    #[error("task service unavailable: {0}")]
    Unavailable(String),

    /// Transport or decoding failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSourceError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
