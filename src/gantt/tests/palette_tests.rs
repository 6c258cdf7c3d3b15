//! Priority colour mapping tests.

use crate::gantt::palette::{self, AMBER, NEUTRAL, NEUTRAL_DEFAULT, RED, WARM_NEUTRAL};
use crate::gantt::BarStyle;
use crate::task::domain::TaskPriority;
use rstest::rstest;

#[rstest]
#[case(Some(TaskPriority::Low), NEUTRAL)]
#[case(Some(TaskPriority::Medium), WARM_NEUTRAL)]
#[case(Some(TaskPriority::High), AMBER)]
#[case(Some(TaskPriority::Critical), RED)]
#[case(None, NEUTRAL_DEFAULT)]
fn priorities_map_to_fixed_bands(#[case] priority: Option<TaskPriority>, #[case] expected: BarStyle) {
    assert_eq!(palette::bar_style(priority), expected);
}

#[rstest]
fn high_priority_is_amber_family() {
    let style = palette::bar_style(Some(TaskPriority::High));
    assert_eq!(style.background, "#ffe082");
    assert_eq!(style.progress, "#ffa000");
}

#[rstest]
fn legend_lists_every_band_lowest_first() {
    let priorities: Vec<TaskPriority> = palette::legend().iter().map(|(band, _)| *band).collect();
    assert_eq!(
        priorities,
        vec![
            TaskPriority::Low,
            TaskPriority::Medium,
            TaskPriority::High,
            TaskPriority::Critical,
        ]
    );
}
