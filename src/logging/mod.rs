//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to the configured log file
//! (default: `~/.local/share/animal-tracker/animal-tracker.log`). Nothing
//! is ever written to stdout/stderr while the TUI owns the terminal.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;

/// Parse a level name, falling back to `info` for anything unrecognized.
pub fn parse_level(level: &str) -> (LevelFilter, bool) {
    match level.trim().parse::<LevelFilter>() {
        Ok(filter) => (filter, true),
        Err(_) => (LevelFilter::INFO, false),
    }
}

/// Install the global subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = expand_home(&config.log_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let (level, recognized) = parse_level(&config.level);
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    if !recognized {
        tracing::warn!(level = %config.level, "unknown log level, using info");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), (LevelFilter::DEBUG, true));
        assert_eq!(parse_level(" WARN "), (LevelFilter::WARN, true));
        assert_eq!(parse_level("off"), (LevelFilter::OFF, true));
        assert_eq!(parse_level("loud"), (LevelFilter::INFO, false));
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let cfg = LoggingConfig::default();
        assert!(init(&cfg).is_ok());
    }
}
