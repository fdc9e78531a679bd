use std::{collections::HashMap, future::Future, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::debug;

/// Collapses a burst of triggers under one key into the last trigger's
/// action, run once after a quiet period. Cancellation is by aborting the
/// pending task's handle, so a superseded action can never fire late even if
/// its timer was already queued.
#[derive(Default)]
pub struct Debouncer {
    pending: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes any pending action under `key` and arms a fresh timer. The
    /// delay is measured from this call, not from the first call in a burst.
    pub async fn schedule<F>(&self, key: &str, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.remove(key) {
            previous.abort();
            debug!(key, "superseded pending debounced action");
        }
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        pending.insert(key.to_string(), task);
    }

    /// Drops a pending action if one exists; no-op otherwise.
    pub async fn cancel(&self, key: &str) {
        let mut pending = self.pending.lock().await;
        if let Some(task) = pending.remove(key) {
            task.abort();
            debug!(key, "canceled pending debounced action");
        }
    }

    /// Aborts every pending action. Used on teardown.
    pub async fn shutdown(&self) {
        let mut pending = self.pending.lock().await;
        for (_, task) in pending.drain() {
            task.abort();
        }
    }
}
