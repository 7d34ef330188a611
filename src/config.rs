use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const THINKING_MS_ENV: &str = "GRADECHAT_THINKING_MS";
pub const NUMERIC_TOOLKIT_ENV: &str = "GRADECHAT_NUMERIC_TOOLKIT";

/// Upper bound on the simulated typing delay.
const MAX_THINKING_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Delay before a reply is delivered, in milliseconds.
    pub thinking_delay_ms: u64,
    /// Use the word-level number reader before the regex scan.
    pub numeric_toolkit: bool,
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset.
    pub log_filter: String,
    /// Capacity of the reply channel.
    pub reply_buffer: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 300,
            numeric_toolkit: true,
            log_filter: "gradechat=info".to_string(),
            reply_buffer: 100,
        }
    }
}

impl AssistantConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: AssistantConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Applies environment overrides on top of `self`.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(THINKING_MS_ENV) {
            self.thinking_delay_ms = raw
                .trim()
                .parse()
                .map_err(|_| {
                    ConfigError::Invalid(format!(
                        "{} must be an integer, got '{}'",
                        THINKING_MS_ENV, raw
                    ))
                })?;
        }
        if let Some(raw) = lookup(NUMERIC_TOOLKIT_ENV) {
            self.numeric_toolkit = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "{} must be a boolean, got '{}'",
                        NUMERIC_TOOLKIT_ENV, raw
                    )))
                }
            };
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thinking_delay_ms > MAX_THINKING_MS {
            return Err(ConfigError::Invalid(format!(
                "thinking_delay_ms must be at most {}",
                MAX_THINKING_MS
            )));
        }
        if self.reply_buffer == 0 {
            return Err(ConfigError::Invalid("reply_buffer must be > 0".to_string()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".to_string()));
        }
        Ok(())
    }
}
