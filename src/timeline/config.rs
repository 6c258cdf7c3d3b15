//! Timeline service configuration.

use crate::gantt::ProjectionConfig;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::task::domain::timestamp;

/// Where the parent/child tree is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyMode {
    /// Fetch the flat list and build the forest locally.
    #[default]
    ClientSide,
    /// Fetch one pre-nested hierarchy per root task from the service.
    ServerSide,
}

/// Presentation settings for timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Offset from UTC, in minutes, used when formatting timestamps.
    pub utc_offset_minutes: i32,
}

impl DisplayConfig {
    /// Korea Standard Time, the offset the client was deployed with.
    pub const KST_OFFSET_MINUTES: i32 = 9 * 60;

    /// Returns the display offset, falling back to UTC when out of range.
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }

    /// Formats an instant as `yyyy-MM-dd HH:mm` in the display offset.
    #[must_use]
    pub fn format_timestamp(&self, value: DateTime<Utc>) -> String {
        timestamp::format_timestamp(value, self.offset())
    }

    /// Formats an instant as `yyyy-MM-dd` in the display offset.
    #[must_use]
    pub fn format_date(&self, value: DateTime<Utc>) -> String {
        timestamp::format_date(value, self.offset())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: Self::KST_OFFSET_MINUTES,
        }
    }
}

/// Top-level configuration for [`TimelineService`](super::TimelineService).
///
/// # Examples
///
/// ```
/// use tox_timeline::timeline::{HierarchyMode, TimelineConfig};
///
/// let config = TimelineConfig::from_json_str(r#"{ "mode": "server_side" }"#)
///     .expect("valid configuration");
/// assert_eq!(config.mode, HierarchyMode::ServerSide);
/// assert!(config.projection.expand_all);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Where the hierarchy is built.
    pub mode: HierarchyMode,
    /// Projection settings.
    pub projection: ProjectionConfig,
    /// Display settings.
    pub display: DisplayConfig,
}

impl TimelineConfig {
    /// Creates a configuration that relies on server-built hierarchies.
    #[must_use]
    pub fn server_side() -> Self {
        Self {
            mode: HierarchyMode::ServerSide,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns the decoding error for malformed JSON or mistyped fields.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
