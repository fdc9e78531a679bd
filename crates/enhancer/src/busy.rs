use std::{collections::HashMap, sync::Arc, time::Duration};

use page_state::{BusyLedger, BusyToken, ControlId};
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, warn};

use crate::PageSurface;

struct Inner {
    ledger: BusyLedger,
    fallbacks: HashMap<ControlId, JoinHandle<()>>,
}

/// Drives the busy lifecycle of submit-style controls: disable + busy label
/// on `begin`, restore on `end` or after the fallback bound elapses,
/// whichever comes first. The ledger's single-use tokens make the two
/// restoration paths mutually exclusive.
pub struct BusyToggle {
    surface: Arc<dyn PageSurface>,
    fallback_after: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl BusyToggle {
    pub fn new(surface: Arc<dyn PageSurface>, fallback_after: Duration) -> Self {
        Self {
            surface,
            fallback_after,
            inner: Arc::new(Mutex::new(Inner {
                ledger: BusyLedger::new(),
                fallbacks: HashMap::new(),
            })),
        }
    }

    /// Marks the control busy and arms the fallback timer. A `begin` on a
    /// control that is already busy invalidates the old token and its
    /// fallback (last-writer-wins).
    pub async fn begin(&self, control: &ControlId, busy_label: &str) -> BusyToken {
        let current_label = self
            .surface
            .control_label(control)
            .await
            .unwrap_or_default();

        let token = {
            let mut inner = self.inner.lock().await;
            if let Some(previous) = inner.fallbacks.remove(control) {
                previous.abort();
            }
            let token = inner.ledger.begin(control, &current_label);
            let fallback = tokio::spawn(expire_after(
                self.inner.clone(),
                self.surface.clone(),
                token.clone(),
                self.fallback_after,
            ));
            inner.fallbacks.insert(control.clone(), fallback);
            token
        };

        debug!(control = control.as_str(), "control entered busy state");
        self.surface.set_control_enabled(control, false).await;
        self.surface.set_control_label(control, busy_label).await;
        token
    }

    /// Restores the control and cancels the fallback. Returns `false` when
    /// the token is stale (the fallback already restored, or a newer `begin`
    /// superseded it), in which case nothing is touched.
    pub async fn end(&self, token: &BusyToken) -> bool {
        let restored = {
            let mut inner = self.inner.lock().await;
            let restored = inner.ledger.settle(token);
            if restored.is_some() {
                if let Some(fallback) = inner.fallbacks.remove(&token.control) {
                    fallback.abort();
                }
            }
            restored
        };

        match restored {
            Some(label) => {
                debug!(control = token.control.as_str(), "control left busy state");
                self.restore(&token.control, &label).await;
                true
            }
            None => false,
        }
    }

    async fn restore(&self, control: &ControlId, label: &str) {
        self.surface.set_control_enabled(control, true).await;
        self.surface.set_control_label(control, label).await;
    }
}

async fn expire_after(
    inner: Arc<Mutex<Inner>>,
    surface: Arc<dyn PageSurface>,
    token: BusyToken,
    after: Duration,
) {
    tokio::time::sleep(after).await;
    let restored = {
        let mut inner = inner.lock().await;
        inner.fallbacks.remove(&token.control);
        inner.ledger.settle(&token)
    };
    if let Some(label) = restored {
        warn!(
            control = token.control.as_str(),
            "busy control never completed; fallback restored it"
        );
        surface.set_control_enabled(&token.control, true).await;
        surface.set_control_label(&token.control, &label).await;
    }
}
