//! Error-tier behavior: validation, fatal fetch failures, and isolated
//! per-item mutation failures.

use cmdsync_core::{Error, StoreError, SyncOptions, Synchronizer};
use cmdsync_model::{Phase, Scope};
use cmdsync_test_utils::{InMemoryStore, StoreOp, fixtures};
use pretty_assertions::assert_eq;

fn synchronizer(store: &InMemoryStore) -> Synchronizer<&InMemoryStore> {
    Synchronizer::with_options(
        store,
        SyncOptions {
            scope: Scope::Global,
            debug: true,
        },
    )
}

#[tokio::test]
async fn invalid_arguments_abort_before_io() {
    let store = InMemoryStore::new();
    let sync = synchronizer(&store);

    let err = sync
        .synchronize(&[fixtures::simple("", "no name")])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(store.calls().is_empty(), "validation must precede all I/O");
}

#[tokio::test]
async fn missing_access_on_fetch_is_fatal_and_classified() {
    let store = InMemoryStore::new();
    store.seed(&Scope::Global, fixtures::simple("stale", "X"));
    store.fail_fetch(StoreError::missing_access("applications.commands"));
    let sync = synchronizer(&store);

    let err = sync
        .synchronize(&[fixtures::simple("ping", "A")])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AuthorizationMissing { .. }));
    let message = err.to_string();
    assert!(
        message.contains("applications.commands"),
        "explanation should name the missing scope, got: {message}"
    );
    // No mutation phase was entered.
    assert!(
        store
            .calls()
            .iter()
            .all(|call| matches!(call.op, StoreOp::Ready | StoreOp::Fetch)),
        "fetch failure must not be followed by mutations"
    );
    assert_eq!(store.names(&Scope::Global), vec!["stale"]);
}

#[tokio::test]
async fn other_fetch_failures_propagate_unmodified() {
    let store = InMemoryStore::new();
    store.fail_fetch(StoreError::unavailable("rate limited"));
    let sync = synchronizer(&store);

    let err = sync.synchronize(&[]).await.unwrap_err();
    match err {
        Error::Remote(inner) => assert_eq!(inner, StoreError::unavailable("rate limited")),
        other => panic!("expected Remote, got: {other}"),
    }
}

#[tokio::test]
async fn one_failed_create_does_not_abort_the_rest() {
    let store = InMemoryStore::new();
    store.fail_on(StoreOp::Create, "bad", StoreError::unavailable("boom"));
    let sync = synchronizer(&store);

    let desired = vec![
        fixtures::simple("first", "A"),
        fixtures::simple("bad", "B"),
        fixtures::simple("last", "C"),
    ];
    let result = sync.synchronize(&desired).await.unwrap();

    assert_eq!(result.created, 2);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].phase, Phase::Create);
    assert_eq!(result.failures[0].name, "bad");
    assert_eq!(result.failures[0].reason, "boom");

    let mut names = store.names(&Scope::Global);
    names.sort();
    assert_eq!(names, vec!["first", "last"]);
}

#[tokio::test]
async fn failed_create_still_runs_later_phases() {
    let store = InMemoryStore::new();
    store.seed(&Scope::Global, fixtures::simple("drop-me", "stale"));
    store.seed(&Scope::Global, fixtures::simple("edit-me", "old"));
    store.fail_on(StoreOp::Create, "new-cmd", StoreError::unavailable("boom"));
    let sync = synchronizer(&store);

    let desired = vec![
        fixtures::simple("new-cmd", "A"),
        fixtures::simple("edit-me", "new"),
    ];
    let result = sync.synchronize(&desired).await.unwrap();

    assert_eq!(result.created, 0);
    assert_eq!(result.deleted, 1);
    assert_eq!(result.updated, 1);
    assert_eq!(result.failures.len(), 1);
}

#[tokio::test]
async fn failures_in_every_phase_are_all_reported() {
    let store = InMemoryStore::new();
    store.seed(&Scope::Global, fixtures::simple("drop-me", "stale"));
    store.seed(&Scope::Global, fixtures::simple("edit-me", "old"));
    store.fail_on(StoreOp::Create, "new-cmd", StoreError::unavailable("c"));
    store.fail_on(StoreOp::Delete, "drop-me", StoreError::unavailable("d"));
    store.fail_on(StoreOp::Edit, "edit-me", StoreError::unavailable("e"));
    let sync = synchronizer(&store);

    let desired = vec![
        fixtures::simple("new-cmd", "A"),
        fixtures::simple("edit-me", "new"),
    ];
    let result = sync.synchronize(&desired).await.unwrap();

    assert!(!result.is_clean());
    let phases: Vec<Phase> = result.failures.iter().map(|f| f.phase).collect();
    assert_eq!(phases, vec![Phase::Create, Phase::Delete, Phase::Update]);
    assert_eq!(result.created + result.deleted + result.updated, 0);

    // The scripted failures are one-shot, so the next pass converges.
    let retry = synchronizer(&store).synchronize(&desired).await.unwrap();
    assert!(retry.is_clean());
    assert_eq!(retry.created, 1);
    assert_eq!(retry.deleted, 1);
    assert_eq!(retry.updated, 1);
}
