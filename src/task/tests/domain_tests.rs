//! Domain-focused tests for task values.

use super::fixtures::{id, task};
use crate::task::domain::{
    EstimatedHours, ParseTaskPriorityError, Progress, Task, TaskDomainError, TaskHierarchy,
    TaskId, TaskPriority, TaskStatus, TaskType, User, UserDirectory, UserId, UserRole, timestamp,
};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use rstest::rstest;

#[rstest]
#[case("  42 ", "42")]
#[case("task-7", "task-7")]
#[case("042", "42")]
#[case("-07", "-7")]
#[case("4a2", "4a2")]
#[case("99999999999999999999", "99999999999999999999")]
fn task_id_canonicalizes_text(#[case] raw: &str, #[case] expected: &str) {
    let parsed = TaskId::new(raw).expect("valid task id");
    assert_eq!(parsed.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_id_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskId::new(raw), Err(TaskDomainError::EmptyIdentifier));
    assert_eq!(UserId::new(raw), Err(TaskDomainError::EmptyIdentifier));
}

#[rstest]
fn numeric_and_text_ids_compare_equal() {
    assert_eq!(TaskId::from_number(12), id("12"));
    assert_eq!(TaskId::from_number(42), id("042"));
    assert_eq!(UserId::from_number(5), UserId::new("005").expect("valid user id"));
    assert_eq!(UserId::from_number(3).to_string(), "3");
}

#[rstest]
fn task_new_rejects_blank_title() {
    assert_eq!(Task::new(id("1"), " \t "), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn task_new_applies_service_defaults() {
    let created = task("1", "  Plan release  ");

    assert_eq!(created.title(), "Plan release");
    assert_eq!(created.task_type(), &TaskType::Task);
    assert_eq!(created.status(), &TaskStatus::Todo);
    assert_eq!(created.priority(), None);
    assert_eq!(created.progress(), Progress::default());
    assert!(created.parent_id().is_none());
    assert!(created.start_time().is_none());
    assert!(created.due_date().is_none());
}

#[rstest]
fn task_builders_set_every_field() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().expect("valid date");
    let due = Utc.with_ymd_and_hms(2024, 3, 8, 18, 0, 0).single().expect("valid date");
    let built = task("2", "Write docs")
        .with_description("User guide")
        .with_type(TaskType::Feature)
        .with_status(TaskStatus::InProgress)
        .with_priority(TaskPriority::High)
        .with_assignee(UserId::from_number(9))
        .with_parent(id("1"))
        .with_start_time(start)
        .with_due_date(due)
        .with_progress(40)
        .with_estimated_hours(16);

    assert_eq!(built.description(), Some("User guide"));
    assert_eq!(built.task_type(), &TaskType::Feature);
    assert_eq!(built.status(), &TaskStatus::InProgress);
    assert_eq!(built.priority(), Some(TaskPriority::High));
    assert_eq!(built.assignee(), Some(&UserId::from_number(9)));
    assert_eq!(built.parent_id(), Some(&id("1")));
    assert_eq!(built.start_time(), Some(start));
    assert_eq!(built.due_date(), Some(due));
    assert_eq!(built.progress().value(), 40);
    assert_eq!(built.estimated_hours().map(EstimatedHours::hours), Some(16));
}

#[rstest]
#[case(150, 100)]
#[case(-5, 0)]
#[case(0, 0)]
#[case(100, 100)]
#[case(63, 63)]
fn progress_is_clamped(#[case] raw: i64, #[case] expected: u8) {
    assert_eq!(Progress::clamped(raw).value(), expected);

    let mut updated = task("1", "Clamp me");
    updated.set_progress(raw);
    assert_eq!(updated.progress().value(), expected);
}

#[rstest]
fn negative_estimates_clamp_to_zero() {
    assert_eq!(EstimatedHours::clamped(-8).hours(), 0);
}

#[rstest]
#[case("bug", TaskType::Bug)]
#[case("Feature", TaskType::Feature)]
#[case("IMPROVEMENT", TaskType::Improvement)]
#[case("", TaskType::Task)]
#[case("Spike", TaskType::Other("Spike".to_owned()))]
fn task_type_accepts_known_and_unknown_labels(#[case] label: &str, #[case] expected: TaskType) {
    assert_eq!(TaskType::from(label), expected);
}

#[rstest]
#[case("in progress", TaskStatus::InProgress)]
#[case("in-progress", TaskStatus::InProgress)]
#[case("DONE", TaskStatus::Done)]
#[case("blocked", TaskStatus::Blocked)]
#[case("Review", TaskStatus::Other("Review".to_owned()))]
fn task_status_normalizes_labels(#[case] label: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::from(label), expected);
}

#[rstest]
fn task_status_reports_completion() {
    assert!(TaskStatus::Done.is_done());
    assert!(!TaskStatus::Blocked.is_done());
}

#[rstest]
#[case("low", TaskPriority::Low)]
#[case("Medium", TaskPriority::Medium)]
#[case("HIGH", TaskPriority::High)]
#[case(" critical ", TaskPriority::Critical)]
fn task_priority_parses_case_insensitively(#[case] label: &str, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::try_from(label), Ok(expected));
}

#[rstest]
fn task_priority_rejects_unknown_labels() {
    assert_eq!(
        TaskPriority::try_from("URGENT"),
        Err(ParseTaskPriorityError("URGENT".to_owned()))
    );
}

#[rstest]
fn unknown_labels_survive_serialization() {
    let json = serde_json::to_string(&TaskStatus::Other("Review".to_owned()))
        .expect("status serializes");
    assert_eq!(json, "\"Review\"");
}

#[rstest]
#[case(1_700_000_000, 1_700_000_000)]
#[case(1_700_000_000_000, 1_700_000_000)]
fn epoch_resolution_is_inferred_from_magnitude(#[case] raw: i64, #[case] seconds: i64) {
    let parsed = timestamp::from_epoch(raw).expect("valid epoch");
    assert_eq!(parsed.timestamp(), seconds);
}

#[rstest]
fn epoch_zero_means_absent() {
    assert_eq!(timestamp::from_epoch(0), None);
}

#[rstest]
#[case("2024-03-01T09:00:00Z")]
#[case("2024-03-01T18:00:00+09:00")]
#[case("2024-03-01T09:00:00")]
#[case("2024-03-01 09:00")]
#[case("1709283600")]
fn textual_timestamps_normalize_to_utc(#[case] raw: &str) {
    let expected: DateTime<Utc> = Utc
        .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .expect("valid date");
    assert_eq!(timestamp::parse_timestamp(raw), Some(expected));
}

#[rstest]
#[case("")]
#[case("next tuesday")]
fn unparseable_timestamps_yield_none(#[case] raw: &str) {
    assert_eq!(timestamp::parse_timestamp(raw), None);
}

#[rstest]
fn bare_dates_resolve_to_midnight_utc() {
    let parsed = timestamp::parse_timestamp("2024-03-01").expect("valid date");
    assert_eq!(parsed.to_rfc3339(), "2024-03-01T00:00:00+00:00");
}

#[rstest]
fn formatting_applies_the_display_offset() {
    let instant = Utc
        .with_ymd_and_hms(2024, 3, 1, 20, 30, 0)
        .single()
        .expect("valid date");
    let kst = FixedOffset::east_opt(9 * 3600).expect("valid offset");

    assert_eq!(timestamp::format_timestamp(instant, kst), "2024-03-02 05:30");
    assert_eq!(timestamp::format_date(instant, kst), "2024-03-02");
}

#[rstest]
fn hierarchy_preorder_reports_depths() {
    let mut root = TaskHierarchy::new(task("1", "Root"));
    let mut middle = TaskHierarchy::new(task("2", "Middle"));
    middle.push_child(TaskHierarchy::new(task("3", "Leaf")));
    root.push_child(middle);
    root.push_child(TaskHierarchy::new(task("4", "Sibling")));

    let visited: Vec<(usize, &str)> = root
        .preorder()
        .into_iter()
        .map(|(depth, visited)| (depth, visited.id().as_str()))
        .collect();

    assert_eq!(visited, vec![(0, "1"), (1, "2"), (2, "3"), (1, "4")]);
    assert_eq!(root.len(), 4);
    assert!(root.is_group());
}

#[rstest]
fn deep_hierarchies_drop_without_recursion() {
    let depth = 100_000;
    let mut node = TaskHierarchy::new(task("0", "Leaf"));
    for level in 1..depth {
        node = TaskHierarchy::with_children(task(&level.to_string(), "Level"), vec![node]);
    }
    assert_eq!(node.len(), depth);
    drop(node);
}

fn user(raw_id: i64, name: &str, department: &str) -> User {
    User {
        id: UserId::from_number(raw_id),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: UserRole::from("user"),
        company: "Tox".to_owned(),
        department: department.to_owned(),
        position: String::new(),
        created_at: None,
        updated_at: None,
    }
}

#[rstest]
fn user_directory_builds_assignee_labels() {
    let directory = UserDirectory::new([user(1, "Kim", "Platform"), user(2, "Lee", "")]);

    assert_eq!(
        directory.assignee_label(Some(&UserId::from_number(1))),
        Some("Kim (Platform)".to_owned())
    );
    assert_eq!(
        directory.assignee_label(Some(&UserId::from_number(2))),
        Some("Lee".to_owned())
    );
    assert_eq!(
        directory.assignee_label(Some(&UserId::from_number(7))),
        Some("User #7".to_owned())
    );
    assert_eq!(directory.assignee_label(None), None);
    assert_eq!(directory.len(), 2);
}

#[rstest]
#[case("ADMIN", true)]
#[case("guest", false)]
fn user_role_detects_administrators(#[case] label: &str, #[case] is_admin: bool) {
    let mut account = user(1, "Kim", "Platform");
    account.role = UserRole::from(label);
    assert_eq!(account.is_admin(), is_admin);
}
