use std::{env, fs, time::Duration};

use serde::Deserialize;

/// Timing knobs for the interaction runtime. Defaults match the page script
/// this runtime replaces.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search_debounce_ms: u64,
    pub busy_fallback_ms: u64,
    pub alert_dismiss_ms: u64,
    pub refresh_interval_secs: u64,
    pub refresh_notice_ms: u64,
    pub csv_preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_debounce_ms: 500,
            busy_fallback_ms: 10_000,
            alert_dismiss_ms: 5_000,
            refresh_interval_secs: 300,
            refresh_notice_ms: 1_000,
            csv_preview_rows: 5,
        }
    }
}

impl Settings {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn busy_fallback(&self) -> Duration {
        Duration::from_millis(self.busy_fallback_ms)
    }

    pub fn alert_dismiss(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn refresh_notice(&self) -> Duration {
        Duration::from_millis(self.refresh_notice_ms)
    }
}

/// Defaults, overlaid by an optional `enhancer.toml`, overlaid by
/// `ENHANCER__*` environment variables. Malformed values are ignored.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("enhancer.toml") {
        settings = settings_from_toml(&raw).unwrap_or(settings);
    }

    if let Ok(v) = env::var("ENHANCER__SEARCH_DEBOUNCE_MS") {
        if let Ok(parsed) = v.parse() {
            settings.search_debounce_ms = parsed;
        }
    }
    if let Ok(v) = env::var("ENHANCER__BUSY_FALLBACK_MS") {
        if let Ok(parsed) = v.parse() {
            settings.busy_fallback_ms = parsed;
        }
    }
    if let Ok(v) = env::var("ENHANCER__ALERT_DISMISS_MS") {
        if let Ok(parsed) = v.parse() {
            settings.alert_dismiss_ms = parsed;
        }
    }
    if let Ok(v) = env::var("ENHANCER__REFRESH_INTERVAL_SECS") {
        if let Ok(parsed) = v.parse() {
            settings.refresh_interval_secs = parsed;
        }
    }
    if let Ok(v) = env::var("ENHANCER__REFRESH_NOTICE_MS") {
        if let Ok(parsed) = v.parse() {
            settings.refresh_notice_ms = parsed;
        }
    }
    if let Ok(v) = env::var("ENHANCER__CSV_PREVIEW_ROWS") {
        if let Ok(parsed) = v.parse() {
            settings.csv_preview_rows = parsed;
        }
    }

    settings
}

fn settings_from_toml(raw: &str) -> Option<Settings> {
    toml::from_str(raw).ok()
}
