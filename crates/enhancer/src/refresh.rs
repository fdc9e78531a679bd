use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::{config::Settings, PageSurface};

/// Aborts the refresh loop when dropped.
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn is_dashboard(path: &str) -> bool {
    path == "/" || path.contains("/dashboard")
}

/// Spawns the periodic dashboard refresh: every interval, if the page is
/// visible and showing the dashboard, surface a short "updating" notice and
/// then reload.
pub fn start(surface: Arc<dyn PageSurface>, settings: &Settings) -> RefreshHandle {
    let interval = settings.refresh_interval();
    let notice_delay = settings.refresh_notice();
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick of a tokio interval is immediate; swallow it so the
        // first refresh lands a full interval after attach.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if !surface.is_page_visible().await {
                continue;
            }
            let address = surface.current_url().await;
            if !is_dashboard(address.path()) {
                continue;
            }
            debug!("dashboard refresh due");
            surface.show_refresh_notice().await;
            tokio::time::sleep(notice_delay).await;
            surface.reload().await;
        }
    });
    RefreshHandle { task }
}
