//! Priority colour bands for timeline bars.

use super::BarStyle;
use crate::task::domain::TaskPriority;

/// Style for bars whose priority is missing or unrecognised.
pub const NEUTRAL_DEFAULT: BarStyle = BarStyle::new("#e0e0e0", "#757575");

/// Cool grey band for [`TaskPriority::Low`].
pub const NEUTRAL: BarStyle = BarStyle::new("#eceff1", "#78909c");

/// Warm grey band for [`TaskPriority::Medium`].
pub const WARM_NEUTRAL: BarStyle = BarStyle::new("#efebe9", "#8d6e63");

/// Amber band for [`TaskPriority::High`].
pub const AMBER: BarStyle = BarStyle::new("#ffe082", "#ffa000");

/// Red band for [`TaskPriority::Critical`].
pub const RED: BarStyle = BarStyle::new("#ffcdd2", "#e53935");

const PALETTE: [(TaskPriority, BarStyle); 4] = [
    (TaskPriority::Low, NEUTRAL),
    (TaskPriority::Medium, WARM_NEUTRAL),
    (TaskPriority::High, AMBER),
    (TaskPriority::Critical, RED),
];

/// Looks up the bar style for a priority.
#[must_use]
pub fn bar_style(priority: Option<TaskPriority>) -> BarStyle {
    priority
        .and_then(|wanted| {
            PALETTE
                .iter()
                .find(|(band, _)| *band == wanted)
                .map(|(_, style)| *style)
        })
        .unwrap_or(NEUTRAL_DEFAULT)
}

/// Every priority band, lowest first, for rendering a legend.
#[must_use]
pub const fn legend() -> &'static [(TaskPriority, BarStyle)] {
    &PALETTE
}
