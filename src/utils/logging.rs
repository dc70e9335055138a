//! Structured logging setup and credential redaction.
//!
//! Configures the `tracing` ecosystem for the application and provides a
//! small utility to keep the Gemini API key out of log output.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Redacts Google API keys from a string before it reaches a log sink.
///
/// Upstream error bodies can echo request parameters back; scanning for the
/// `AIza` key prefix keeps the credential out of persisted logs.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    while let Some(start) = result.find("AIza") {
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == '&')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED_API_KEY]");
    }

    result
}
