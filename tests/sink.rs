mod common;

use common::write_sample;
use hotspot_review::sink::{ActionSink, CommitAction, StoreSink};
use hotspot_review::store::{HotspotStore, StoreError};
use tokio::sync::mpsc;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .build()
        .unwrap()
}

#[test]
fn edit_is_applied_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let store = HotspotStore::open(write_sample(dir.path())).unwrap();
    let runtime = runtime();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (sink, _worker) = StoreSink::start(store.clone(), runtime.handle(), tx);

    sink.commit_edit("c1", "updated".into());

    let outcome = rx.blocking_recv().unwrap();
    assert_eq!(
        outcome.action,
        CommitAction::Edit {
            comment_id: "c1".into()
        }
    );
    assert!(outcome.result.is_ok());
    assert_eq!(
        store.snapshot().comment("c1").unwrap().markdown.as_deref(),
        Some("updated")
    );
}

#[test]
fn failed_delete_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let store = HotspotStore::open(write_sample(dir.path())).unwrap();
    let runtime = runtime();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (sink, _worker) = StoreSink::start(store.clone(), runtime.handle(), tx);

    sink.commit_delete("c2");

    let outcome = rx.blocking_recv().unwrap();
    assert_eq!(outcome.action.comment_id(), "c2");
    assert!(matches!(outcome.result, Err(StoreError::NotUpdatable { .. })));
    assert_eq!(store.snapshot().comments.len(), 2);
}

#[test]
fn closed_receiver_does_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    let store = HotspotStore::open(write_sample(dir.path())).unwrap();
    let runtime = runtime();
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let (sink, worker) = StoreSink::start(store.clone(), runtime.handle(), tx);

    sink.commit_delete("c1");
    drop(sink);
    runtime.block_on(worker).unwrap();
    assert_eq!(store.snapshot().comments.len(), 1);
}

#[test]
fn commits_apply_in_submission_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = HotspotStore::open(write_sample(dir.path())).unwrap();
    let runtime = runtime();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (sink, worker) = StoreSink::start(store.clone(), runtime.handle(), tx);

    // Reordered, the delete would run first and the edit would miss.
    sink.commit_edit("c1", "first".into());
    sink.commit_delete("c1");
    sink.commit_edit("c1", "too late".into());
    drop(sink);
    runtime.block_on(worker).unwrap();

    let outcomes: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    let actions: Vec<_> = outcomes.iter().map(|o| o.action.clone()).collect();
    assert_eq!(
        actions,
        vec![
            CommitAction::Edit {
                comment_id: "c1".into()
            },
            CommitAction::Delete {
                comment_id: "c1".into()
            },
            CommitAction::Edit {
                comment_id: "c1".into()
            },
        ]
    );
    assert!(outcomes[0].result.is_ok());
    assert!(outcomes[1].result.is_ok());
    assert!(matches!(outcomes[2].result, Err(StoreError::CommentNotFound { .. })));
    assert!(store.snapshot().comment("c1").is_none());
}

#[test]
fn worker_stops_when_every_sink_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let store = HotspotStore::open(write_sample(dir.path())).unwrap();
    let runtime = runtime();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (sink, worker) = StoreSink::start(store, runtime.handle(), tx);
    let clone = sink.clone();
    drop(sink);

    clone.commit_edit("c1", "still queued".into());
    drop(clone);
    runtime.block_on(worker).unwrap();
    assert!(rx.try_recv().unwrap().result.is_ok());
}
