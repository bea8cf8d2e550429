//! Configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `documentor.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL of the Generative Language API (without the `/models/...` suffix).
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier used for every call.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: None }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("gemini.model must not be empty"));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("gemini.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_flash_without_timeout() {
        let config = AppConfig::default();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.api_url.as_str(), "https://generativelanguage.googleapis.com/v1beta");
        assert!(config.gemini.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_from_toml() {
        let toml = r#"
[gemini]
api_url = "http://localhost:8080/v1"
model = "gemini-2.5-pro"
timeout_secs = 90
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.gemini.api_url.as_str(), "http://localhost:8080/v1");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.timeout_secs, Some(90));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: AppConfig = toml::from_str("[gemini]\nmodel = \"custom\"\n").unwrap();
        assert_eq!(config.gemini.model, "custom");
        assert_eq!(config.gemini.api_url, default_api_url());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<AppConfig>("[gemini]\nmax_retries = 3\n").is_err());
    }

    #[test]
    fn rejects_zero_timeout_and_blank_model() {
        let mut config = GeminiApiConfig { timeout_secs: Some(0), ..Default::default() };
        assert!(config.validate().is_err());
        config.timeout_secs = None;
        config.model = "  ".into();
        assert!(config.validate().is_err());
    }
}
