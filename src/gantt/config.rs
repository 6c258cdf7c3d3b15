//! Projection settings.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Settings applied while projecting a forest onto the timeline.
///
/// # Examples
///
/// ```
/// use tox_timeline::gantt::ProjectionConfig;
///
/// let config = ProjectionConfig::default();
/// assert!(config.expand_all);
/// assert_eq!(config.default_duration().num_hours(), 24);
///
/// let folded = ProjectionConfig::collapsed();
/// assert!(!folded.expand_all);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Bar length, in seconds, for tasks that have no due date.
    pub default_duration_secs: i64,
    /// Whether group bars start with their children visible.
    pub expand_all: bool,
}

impl ProjectionConfig {
    /// One calendar day in seconds.
    pub const ONE_DAY_SECS: i64 = 86_400;

    /// Creates a configuration with every group folded.
    #[must_use]
    pub fn collapsed() -> Self {
        Self {
            expand_all: false,
            ..Self::default()
        }
    }

    /// Returns the fallback bar length. Negative settings count as zero.
    #[must_use]
    pub fn default_duration(&self) -> TimeDelta {
        TimeDelta::try_seconds(self.default_duration_secs.max(0)).unwrap_or_else(TimeDelta::zero)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: Self::ONE_DAY_SECS,
            expand_all: true,
        }
    }
}
