//! Logging setup
//!
//! `RUST_LOG` takes precedence over the configured level so operators can
//! raise verbosity for a single module without touching the config.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{BeatFlowError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init_logging`]
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(&config.level),
    };
    filter.map_err(|e| BeatFlowError::config(format!("Invalid log filter: {}", e)))
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };

    installed.map_err(|e| BeatFlowError::internal(format!("Failed to install logger: {}", e)))
}

/// Truncate `text` to at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Short prompt excerpt for log lines: up to 60 characters, longer text is
/// cut to 57 and suffixed with `...`
pub fn preview(text: &str) -> String {
    const MAX: usize = 60;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        format!("{}...", truncate_chars(text, MAX - 3))
    }
}
