//! Where finalized comment changes go.
//!
//! The history panel hands edits and deletions to an [`ActionSink`] and
//! forgets about them. [`StoreSink`] queues them for a single commit
//! worker that applies them to the [`HotspotStore`] one at a time, in the
//! order they were made, and reports each outcome on a channel so the host
//! can refresh the history or surface the failure.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::store::{HotspotStore, StoreError};

/// Receives comment changes the user has confirmed.
///
/// Calls must not block: implementations start the work and return.
pub trait ActionSink {
    fn commit_edit(&self, id: &str, new_text: String);
    fn commit_delete(&self, id: &str);
}

/// The change a commit was about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitAction {
    Edit { comment_id: String },
    Delete { comment_id: String },
}

impl CommitAction {
    pub fn comment_id(&self) -> &str {
        match self {
            Self::Edit { comment_id } | Self::Delete { comment_id } => comment_id,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Edit { .. } => "edit comment",
            Self::Delete { .. } => "delete comment",
        }
    }
}

/// Result of a commit, delivered after the store has settled.
#[derive(Debug)]
pub struct CommitOutcome {
    pub action: CommitAction,
    pub result: Result<(), StoreError>,
}

type CommitWork = Box<dyn FnOnce(&HotspotStore) -> Result<(), StoreError> + Send>;

struct CommitJob {
    action: CommitAction,
    work: CommitWork,
}

/// [`ActionSink`] backed by a [`HotspotStore`].
#[derive(Clone)]
pub struct StoreSink {
    jobs: UnboundedSender<CommitJob>,
}

impl StoreSink {
    /// Start the commit worker on `runtime`.
    ///
    /// The worker stops once every clone of the sink is dropped and the
    /// queue is drained; await the returned handle to wait for that.
    pub fn start(
        store: HotspotStore,
        runtime: &Handle,
        outcomes: UnboundedSender<CommitOutcome>,
    ) -> (Self, JoinHandle<()>) {
        let (jobs, queue) = mpsc::unbounded_channel();
        let worker = runtime.spawn(commit_worker(store, queue, outcomes));
        (Self { jobs }, worker)
    }

    fn enqueue<F>(&self, action: CommitAction, work: F)
    where
        F: FnOnce(&HotspotStore) -> Result<(), StoreError> + Send + 'static,
    {
        tracing::debug!(comment = action.comment_id(), action = action.describe(), "Queueing commit");
        let job = CommitJob {
            action,
            work: Box::new(work),
        };
        if let Err(mpsc::error::SendError(job)) = self.jobs.send(job) {
            tracing::warn!(
                comment = job.action.comment_id(),
                action = job.action.describe(),
                "Commit worker stopped; change dropped"
            );
        }
    }
}

async fn commit_worker(
    store: HotspotStore,
    mut queue: UnboundedReceiver<CommitJob>,
    outcomes: UnboundedSender<CommitOutcome>,
) {
    while let Some(CommitJob { action, work }) = queue.recv().await {
        let store = store.clone();
        let result = match tokio::task::spawn_blocking(move || work(&store)).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(comment = action.comment_id(), error = %e, "Commit task failed");
                continue;
            }
        };
        if outcomes.send(CommitOutcome { action, result }).is_err() {
            tracing::debug!("Commit settled after the UI closed");
        }
    }
    tracing::debug!("Commit worker finished");
}

impl ActionSink for StoreSink {
    fn commit_edit(&self, id: &str, new_text: String) {
        let comment_id = id.to_string();
        let action = CommitAction::Edit {
            comment_id: comment_id.clone(),
        };
        self.enqueue(action, move |store| store.edit_comment(&comment_id, &new_text));
    }

    fn commit_delete(&self, id: &str) {
        let comment_id = id.to_string();
        let action = CommitAction::Delete {
            comment_id: comment_id.clone(),
        };
        self.enqueue(action, move |store| store.delete_comment(&comment_id));
    }
}
