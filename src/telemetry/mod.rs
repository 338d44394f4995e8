//! Tracing subscriber setup
//!
//! The library only emits `tracing` events. Binaries that embed it can call
//! [`init_tracing`] once at startup to get them on stdout.
//!
//! ```rust,ignore
//! use llm_gateway::telemetry::{OutputFormat, TracingConfig, init_tracing};
//!
//! init_tracing(TracingConfig::default().with_output_format(OutputFormat::Json))?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for this crate when `RUST_LOG` is not set
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
        }
    }
}

impl TracingConfig {
    /// Debug-level text output.
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }

    pub fn with_log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// `RUST_LOG` when set, otherwise `llm_gateway=<level>`.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "llm_gateway={}",
                self.log_level.to_string().to_ascii_lowercase()
            ))
        })
    }
}

/// Install the global subscriber.
///
/// Calling it again after a subscriber is already installed is not an error.
pub fn init_tracing(config: TracingConfig) -> Result<(), ConfigError> {
    let filter = config.env_filter();
    let init_result = match config.output_format {
        OutputFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init(),
        OutputFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    match init_result {
        Ok(()) => Ok(()),
        Err(e) if e.to_string().contains("already been set") => {
            tracing::debug!(error = %e, "tracing already initialized");
            Ok(())
        }
        Err(e) => Err(ConfigError::Invalid(format!("Failed to initialize tracing: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        assert!(init_tracing(TracingConfig::debug()).is_ok());
        assert!(init_tracing(TracingConfig::default().with_output_format(OutputFormat::Json)).is_ok());
    }
}
