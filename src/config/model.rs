//! Configuration data model.
//!
//! All structs derive `Deserialize` for TOML.
//! Every field has a default so the application runs without a config file.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// chrono format string used for status bar messages.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Show the read-only echo of the form below it.
    #[serde(default = "default_true")]
    pub show_checker: bool,
    /// How long a status message stays before the totals come back.
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            timestamp_format: default_timestamp_format(),
            show_checker: true,
            status_timeout_secs: default_status_timeout(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`, `off`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_file: default_log_file(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_title() -> String {
    "Animal Tracker".to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_status_timeout() -> u64 {
    5
}
fn default_log_file() -> String {
    "~/.local/share/animal-tracker/animal-tracker.log".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
