//! End-to-end reconciliation passes against the in-memory store.

use cmdsync_core::{SyncOptions, Synchronizer};
use cmdsync_model::{CommandDefinition, Scope};
use cmdsync_test_utils::{InMemoryStore, StoreOp, fixtures};
use pretty_assertions::assert_eq;

fn synchronizer(store: &InMemoryStore, scope: Scope) -> Synchronizer<&InMemoryStore> {
    Synchronizer::with_options(
        store,
        SyncOptions {
            scope,
            debug: false,
        },
    )
}

#[tokio::test]
async fn empty_store_creates_one_command() {
    let store = InMemoryStore::new();
    let sync = synchronizer(&store, Scope::Global);

    let result = sync
        .synchronize(&[fixtures::simple("ping", "A")])
        .await
        .unwrap();

    assert_eq!(result.observed, 0);
    assert_eq!(result.created, 1);
    assert_eq!(result.deleted, 0);
    assert_eq!(result.updated, 0);
    assert_eq!(store.names(&Scope::Global), vec!["ping"]);
}

#[tokio::test]
async fn empty_desired_deletes_the_stale_command() {
    let store = InMemoryStore::new();
    store.seed(&Scope::Global, fixtures::simple("old", "gone soon"));
    let sync = synchronizer(&store, Scope::Global);

    let result = sync.synchronize(&[]).await.unwrap();

    assert_eq!(result.observed, 1);
    assert_eq!(result.created, 0);
    assert_eq!(result.deleted, 1);
    assert_eq!(result.updated, 0);
    assert!(store.names(&Scope::Global).is_empty());
}

#[tokio::test]
async fn changed_description_edits_exactly_once() {
    let store = InMemoryStore::new();
    store.seed(&Scope::Global, fixtures::simple("ping", "A"));
    let sync = synchronizer(&store, Scope::Global);

    let result = sync
        .synchronize(&[fixtures::simple("ping", "B")])
        .await
        .unwrap();

    assert_eq!(result.created, 0);
    assert_eq!(result.deleted, 0);
    assert_eq!(result.updated, 1);

    let edits: Vec<_> = store
        .calls()
        .into_iter()
        .filter(|call| call.op == StoreOp::Edit)
        .collect();
    assert_eq!(edits.len(), 1);
    assert_eq!(edits[0].name.as_deref(), Some("ping"));

    let stored = store.commands(&Scope::Global);
    assert_eq!(stored[0].definition.description, "B");
}

#[tokio::test]
async fn second_identical_pass_is_a_noop() {
    let store = InMemoryStore::new();
    let desired = vec![
        fixtures::simple("ping", "A"),
        fixtures::with_choices("flavour"),
        fixtures::with_subcommands("mod"),
    ];

    let first = synchronizer(&store, Scope::Global)
        .synchronize(&desired)
        .await
        .unwrap();
    assert_eq!(first.created, 3);

    let second = synchronizer(&store, Scope::Global)
        .synchronize(&desired)
        .await
        .unwrap();
    assert_eq!(second.observed, 3);
    assert!(second.is_noop(), "second pass should issue no mutations");
}

#[tokio::test]
async fn mixed_pass_applies_all_three_phases() {
    let store = InMemoryStore::new();
    store.seed(&Scope::Global, fixtures::simple("keep", "same"));
    store.seed(&Scope::Global, fixtures::simple("edit-me", "old"));
    store.seed(&Scope::Global, fixtures::simple("drop-me", "stale"));
    let sync = synchronizer(&store, Scope::Global);

    let desired = vec![
        fixtures::simple("keep", "same"),
        fixtures::simple("edit-me", "new"),
        fixtures::simple("brand-new", "hello"),
    ];
    let result = sync.synchronize(&desired).await.unwrap();

    assert_eq!(result.observed, 3);
    assert_eq!(result.created, 1);
    assert_eq!(result.deleted, 1);
    assert_eq!(result.updated, 1);
    assert!(result.is_clean());

    let mut names = store.names(&Scope::Global);
    names.sort();
    assert_eq!(names, vec!["brand-new", "edit-me", "keep"]);
}

#[tokio::test]
async fn guild_scopes_are_isolated() {
    let store = InMemoryStore::new();
    store.seed(&Scope::Global, fixtures::simple("global-cmd", "A"));
    let guild = Scope::Guild("42".into());

    let result = synchronizer(&store, guild.clone())
        .synchronize(&[fixtures::simple("guild-cmd", "B")])
        .await
        .unwrap();

    // The guild snapshot is empty; the global command is untouched.
    assert_eq!(result.observed, 0);
    assert_eq!(result.created, 1);
    assert_eq!(result.deleted, 0);
    assert_eq!(store.names(&guild), vec!["guild-cmd"]);
    assert_eq!(store.names(&Scope::Global), vec!["global-cmd"]);
}

#[tokio::test]
async fn ready_gate_is_awaited_once_per_pass() {
    let store = InMemoryStore::new();
    let sync = synchronizer(&store, Scope::Global);

    sync.synchronize(&[]).await.unwrap();
    assert_eq!(store.ready_calls(), 1);
}
