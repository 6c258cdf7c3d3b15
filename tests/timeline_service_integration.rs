//! Integration tests for [`TimelineService`] over the in-memory source.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tox_timeline::task::adapters::memory::InMemoryTaskSource;
use tox_timeline::task::adapters::wire::{WireId, WireTask};
use tox_timeline::task::domain::TaskId;
use tox_timeline::task::ports::{SessionContext, TaskSourceError};
use tox_timeline::timeline::{TimelineConfig, TimelineError, TimelineService};

type TestService = TimelineService<InMemoryTaskSource, DefaultClock>;

fn record(raw_id: i64, title: &str, parent: Option<i64>) -> WireTask {
    WireTask {
        id: Some(WireId::from(raw_id)),
        title: Some(title.to_owned()),
        parent_id: parent.map(WireId::from),
        ..WireTask::default()
    }
}

#[fixture]
fn source() -> InMemoryTaskSource {
    InMemoryTaskSource::with_tasks([
        record(1, "Plan", None),
        record(2, "Design", Some(1)),
        record(3, "Build", Some(1)),
    ])
    .requiring_token("secret")
}

#[fixture]
fn session() -> SessionContext {
    SessionContext::new("secret")
}

fn timeline(source: &InMemoryTaskSource) -> TestService {
    TimelineService::new(
        Arc::new(source.clone()),
        Arc::new(DefaultClock),
        TimelineConfig::default(),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_a_task_and_refreshing_moves_its_bar(
    source: InMemoryTaskSource,
    session: SessionContext,
) {
    let service = timeline(&source);
    let before = service.refresh(&session).await.expect("first refresh");
    assert_eq!(before.bars().len(), 3);

    source
        .update(&TaskId::from_number(3), record(3, "Build", Some(2)))
        .expect("task 3 exists");
    let after = service.refresh(&session).await.expect("second refresh");

    let moved = after
        .projection()
        .bar(&TaskId::from_number(3))
        .expect("bar for task 3");
    assert_eq!(moved.depth, 2);
    assert_eq!(moved.dependency_ids, vec![TaskId::from_number(2)]);
    assert!(after.generation() > before.generation());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collapse_toggle_survives_on_the_snapshot(
    source: InMemoryTaskSource,
    session: SessionContext,
) {
    let service = timeline(&source);
    let mut snapshot = service.refresh(&session).await.expect("refresh");

    assert!(snapshot.projection_mut().toggle_collapsed());
    assert!(snapshot.bars().iter().all(|bar| bar.collapse_hint));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_token_is_unauthorized(source: InMemoryTaskSource) {
    let service = timeline(&source);

    let result = service.refresh(&SessionContext::new("expired")).await;

    assert!(matches!(
        result,
        Err(TimelineError::Source(TaskSourceError::Unauthorized))
    ));
}

#[rstest]
fn removing_an_unknown_task_is_not_found(source: InMemoryTaskSource) {
    let missing = TaskId::from_number(42);
    let result = source.remove(&missing);
    assert!(matches!(result, Err(TaskSourceError::NotFound(id)) if id == missing));
}
