//! Interaction runtime for the server-rendered staffing pages. Owns every
//! behavior with timer or state semantics and drives the rendering
//! collaborator through the [`PageSurface`] seam; pure state transitions
//! live in `page_state`.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use page_state::{
    csv::CsvPreview,
    next_directive,
    search::{self, SearchDisposition},
    shortcuts::{self, KeyChord, ShortcutAction},
    AlertId, BusyToken, ControlId, FileRef, ToastId, ToastTone,
};
use tracing::{debug, info, warn};
use url::Url;

pub mod config;
pub mod events;
pub mod url_state;

mod busy;
mod debounce;
mod refresh;

pub use busy::BusyToggle;
pub use config::{load_settings, Settings};
pub use debounce::Debouncer;
pub use events::{EventOutcome, PageEvent};
pub use refresh::RefreshHandle;

/// Debounce key for the single search form's resubmission.
pub const SEARCH_DEBOUNCE_KEY: &str = "search-resubmit";

/// Message shown when a confirmable control carries no message of its own.
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure?";

/// The rendering collaborator: address bar, form submission, and the DOM
/// elements the runtime mutates. Every lookup that can miss is the surface's
/// no-op; only file reads are fallible from the runtime's point of view.
#[async_trait]
pub trait PageSurface: Send + Sync {
    async fn current_url(&self) -> Url;
    /// Full navigation to a new address, page load included.
    async fn navigate(&self, address: Url);
    async fn reload(&self);
    /// Normal GET submission of the search form to its own endpoint.
    async fn submit_search_form(&self);
    async fn control_label(&self, control: &ControlId) -> Option<String>;
    async fn set_control_enabled(&self, control: &ControlId, enabled: bool);
    async fn set_control_label(&self, control: &ControlId, label: &str);
    async fn confirm(&self, message: &str) -> bool;
    /// Alerts currently on the page that are not marked permanent.
    async fn visible_alerts(&self) -> Vec<AlertId>;
    async fn dismiss_alert(&self, alert: &AlertId);
    async fn show_toast(&self, message: &str, tone: ToastTone) -> ToastId;
    async fn remove_toast(&self, toast: ToastId);
    async fn show_refresh_notice(&self);
    async fn is_page_visible(&self) -> bool;
    async fn focus_search_input(&self);
    async fn close_active_modal(&self);
    async fn read_file_text(&self, file: &FileRef) -> Result<String>;
    async fn render_csv_preview(&self, preview: &CsvPreview);
}

/// Composition root: wires the debouncer, busy toggle, codec, and refresh
/// loop to one page surface.
pub struct PageEnhancer {
    surface: Arc<dyn PageSurface>,
    settings: Settings,
    debouncer: Debouncer,
    busy: BusyToggle,
}

impl PageEnhancer {
    pub fn new(surface: Arc<dyn PageSurface>, settings: Settings) -> Self {
        let busy = BusyToggle::new(surface.clone(), settings.busy_fallback());
        Self {
            surface,
            settings,
            debouncer: Debouncer::new(),
            busy,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn handle_event(&self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::SearchInput { value } => {
                self.on_search_input(&value).await;
                EventOutcome::Handled
            }
            PageEvent::SortHeaderClicked { column } => {
                self.on_sort_header_click(&column).await;
                EventOutcome::Handled
            }
            PageEvent::LoadingSubmit {
                control,
                busy_label,
            } => EventOutcome::BusyStarted(self.begin_busy(&control, &busy_label).await),
            PageEvent::ActionCompleted { token } => {
                self.complete_action(&token).await;
                EventOutcome::Handled
            }
            PageEvent::ConfirmableClicked { message } => {
                if self.confirm_action(message.as_deref()).await {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Blocked
                }
            }
            PageEvent::KeyPressed { chord } => {
                self.on_key_pressed(&chord).await;
                EventOutcome::Handled
            }
            PageEvent::CsvFileSelected { file } => {
                self.on_csv_file_selected(&file).await;
                EventOutcome::Handled
            }
        }
    }

    /// Qualifying input (cleared, or at least the minimum length) schedules
    /// a debounced resubmission; in-between lengths cancel whatever is
    /// pending and schedule nothing.
    pub async fn on_search_input(&self, value: &str) {
        match search::disposition(value) {
            SearchDisposition::Resubmit => {
                let surface = self.surface.clone();
                self.debouncer
                    .schedule(
                        SEARCH_DEBOUNCE_KEY,
                        self.settings.search_debounce(),
                        async move {
                            surface.submit_search_form().await;
                        },
                    )
                    .await;
            }
            SearchDisposition::CancelPending => {
                self.debouncer.cancel(SEARCH_DEBOUNCE_KEY).await;
            }
        }
    }

    /// Derives the next sort directive from the current address and commits
    /// it with a full navigation.
    pub async fn on_sort_header_click(&self, column: &str) {
        let address = self.surface.current_url().await;
        let current = url_state::read_sort(&address);
        let next = next_directive(current.as_ref(), column);
        let rewritten = url_state::write_sort(&address, &next);
        info!(
            column = next.column.as_str(),
            order = next.order.as_str(),
            "committing sort directive"
        );
        self.surface.navigate(rewritten).await;
    }

    pub async fn begin_busy(&self, control: &ControlId, busy_label: &str) -> BusyToken {
        self.busy.begin(control, busy_label).await
    }

    /// Explicit completion signal for a busy control. Returns `false` for a
    /// stale token (fallback already restored, or a newer begin superseded
    /// it).
    pub async fn complete_action(&self, token: &BusyToken) -> bool {
        self.busy.end(token).await
    }

    async fn confirm_action(&self, message: Option<&str>) -> bool {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_CONFIRM_MESSAGE);
        self.surface.confirm(message).await
    }

    pub async fn on_key_pressed(&self, chord: &KeyChord) {
        match shortcuts::shortcut_for(chord) {
            Some(ShortcutAction::FocusSearch) => self.surface.focus_search_input().await,
            Some(ShortcutAction::DismissOverlay) => self.surface.close_active_modal().await,
            None => {}
        }
    }

    /// Reads and previews a selected CSV file. Non-CSV selections and read
    /// failures degrade to a logged no-op.
    pub async fn on_csv_file_selected(&self, file: &FileRef) {
        if !file.is_csv() {
            return;
        }
        let text = match self.surface.read_file_text(file).await {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    filename = file.filename.as_str(),
                    error = %err,
                    "csv preview read failed"
                );
                return;
            }
        };
        match CsvPreview::parse(&text, self.settings.csv_preview_rows) {
            Some(preview) => self.surface.render_csv_preview(&preview).await,
            None => debug!(
                filename = file.filename.as_str(),
                "csv file had no previewable rows"
            ),
        }
    }

    /// One-time page wiring: schedules auto-dismissal of the current
    /// non-permanent alerts and starts the dashboard refresh loop. The
    /// returned handle stops the loop when dropped.
    pub async fn attach(&self) -> RefreshHandle {
        let alerts = self.surface.visible_alerts().await;
        debug!(count = alerts.len(), "scheduling alert auto-dismissal");
        for alert in alerts {
            let surface = self.surface.clone();
            let delay = self.settings.alert_dismiss();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                surface.dismiss_alert(&alert).await;
            });
        }
        refresh::start(self.surface.clone(), &self.settings)
    }

    /// Toast helper: shows the message and removes it again after the
    /// dismiss delay.
    pub async fn notify(&self, message: &str, tone: ToastTone) {
        let toast = self.surface.show_toast(message, tone).await;
        let surface = self.surface.clone();
        let delay = self.settings.alert_dismiss();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            surface.remove_toast(toast).await;
        });
    }

    /// Aborts pending debounced work. The refresh loop is owned by its
    /// handle and stops with it.
    pub async fn shutdown(&self) {
        self.debouncer.shutdown().await;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
