// ABOUTME: Environment configuration for the RepCoach HTTP service and its language-model fallback
// ABOUTME: Reads .env and process variables into typed settings with validation and a redacted summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! Environment-based configuration management

use crate::constants::env_defaults;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: env_defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Language-model fallback settings for coach chat
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Groq API key; fallback replies are fixed text when absent
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Chat model identifier
    pub model: String,
    /// Upper bound on one completion, in seconds
    pub timeout_secs: u64,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token cap
    pub max_tokens: u32,
}

impl LlmConfig {
    /// Whether a provider can be built from this configuration
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    /// Completion timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: env_defaults::GROQ_MODEL.to_owned(),
            timeout_secs: env_defaults::LLM_TIMEOUT_SECS,
            temperature: env_defaults::LLM_TEMPERATURE,
            max_tokens: env_defaults::LLM_MAX_TOKENS,
        }
    }
}

// The API key must never reach logs through `{:?}`
impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// CORS settings
    pub cors: CorsConfig,
    /// Chat fallback settings
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env_defaults::HOST.to_owned(),
            http_port: env_defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            cors: CorsConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let config = Self {
            host: env_var_or("HOST", env_defaults::HOST),
            http_port: parse_env("HTTP_PORT", env_defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    "CORS_ALLOWED_ORIGINS",
                    env_defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            llm: LlmConfig {
                api_key: env::var("GROQ_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                model: env_var_or("GROQ_MODEL", env_defaults::GROQ_MODEL),
                timeout_secs: parse_env("LLM_TIMEOUT_SECS", env_defaults::LLM_TIMEOUT_SECS)?,
                temperature: parse_env("LLM_TEMPERATURE", env_defaults::LLM_TEMPERATURE)?,
                max_tokens: parse_env("LLM_MAX_TOKENS", env_defaults::LLM_MAX_TOKENS)?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            bail!("HTTP_PORT must be between 1 and 65535");
        }
        if self.host.trim().is_empty() {
            bail!("HOST cannot be empty");
        }
        if self.llm.timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            bail!(
                "LLM_TEMPERATURE must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            );
        }
        if self.llm.max_tokens == 0 {
            bail!("LLM_MAX_TOKENS must be greater than zero");
        }
        Ok(())
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "RepCoach Server Configuration: bind={} environment={} log_level={} \
             cors_origins={} ai_fallback={} model={} timeout={}s",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.cors.allowed_origins,
            if self.llm.is_configured() {
                "enabled"
            } else {
                "disabled"
            },
            self.llm.model,
            self.llm.timeout_secs,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert!(!config.llm.is_configured());
    }

    #[test]
    fn test_validation_rejects_bad_llm_settings() {
        let mut config = ServerConfig::default();
        config.llm.temperature = 2.5;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.llm.max_tokens = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.http_port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_redacts_api_key() {
        let mut config = ServerConfig::default();
        config.llm.api_key = Some("gsk_secret_value".to_owned());
        let summary = config.summary();
        assert!(summary.contains("ai_fallback=enabled"));
        assert!(!summary.contains("gsk_secret_value"));
        assert!(!format!("{:?}", config.llm).contains("gsk_secret_value"));
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let llm = LlmConfig {
            api_key: Some("   ".to_owned()),
            ..LlmConfig::default()
        };
        assert!(!llm.is_configured());
    }
}
