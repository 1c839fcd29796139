//! what3words client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the what3words API client
///
/// The default response language lives here and is threaded through each
/// call explicitly; there is no mutable global default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct W3wConfig {
    /// API key issued by what3words (required for all endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the v3 API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default response language (ISO 639-1 code, e.g. "en", "de")
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "https://api.what3words.com/v3".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for W3wConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
        }
    }
}

impl W3wConfig {
    /// Create a configuration suitable for testing (short timeout)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-api-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Check whether an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.language.is_empty() {
            return Err("language must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = W3wConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://api.what3words.com/v3");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_testing_config() {
        let config = W3wConfig::for_testing();
        assert!(config.has_api_key());
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_validation_success() {
        assert!(W3wConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = W3wConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_language() {
        let config = W3wConfig {
            language: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = W3wConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = W3wConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: W3wConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.language, config.language);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: W3wConfig = serde_json::from_str(r#"{"api_key": "secret"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.language, "en");
    }
}
