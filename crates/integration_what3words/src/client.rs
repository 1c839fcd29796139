//! what3words v3 API client
//!
//! Thin wrapper over the REST endpoints: every operation is a single
//! unconditional GET with query parameters, authenticated by the
//! `X-Api-Key` header. No retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use domain::{BoundingBox, Coordinates};
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::W3wConfig;
use crate::confirm;
use crate::error::W3wError;
use crate::models::{
    Address, AutosuggestOptions, AutosuggestResponse, AvailableLanguages, GridSection,
};

/// Header carrying the API key
const API_KEY_HEADER: &str = "X-Api-Key";

/// Header identifying this wrapper to the service
const WRAPPER_HEADER: &str = "X-W3W-Wrapper";

/// Wrapper identification value sent with every request
const WRAPPER_AGENT: &str = concat!("what3words-rust/", env!("CARGO_PKG_VERSION"));

/// Client interface for the what3words v3 API
///
/// All operations are direct pass-throughs to the remote service. The trait
/// exists so that callers (address confirmation, application code) can be
/// exercised against a mock without network access.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait W3wClient: Send + Sync {
    /// Convert a three-word address to coordinates
    async fn convert_to_coordinates(&self, words: &str) -> Result<Address, W3wError>;

    /// Convert coordinates to the three-word address of their square
    async fn convert_to_3wa(
        &self,
        coordinates: Coordinates,
        language: &str,
    ) -> Result<Address, W3wError>;

    /// Retrieve the 3m x 3m grid lines covering a bounding box
    async fn grid_section(&self, bounding_box: BoundingBox) -> Result<GridSection, W3wError>;

    /// List the languages addresses can be rendered in
    async fn available_languages(&self) -> Result<AvailableLanguages, W3wError>;

    /// Suggest full three-word addresses for a partial or misspelt input
    async fn autosuggest(
        &self,
        input: &str,
        options: &AutosuggestOptions,
    ) -> Result<AutosuggestResponse, W3wError>;
}

/// Reqwest-based what3words API client
#[derive(Debug)]
pub struct Geocoder {
    client: Client,
    config: W3wConfig,
    api_key: String,
}

impl Geocoder {
    /// Create a new geocoder
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, no API key is
    /// configured, or the HTTP client cannot be initialized.
    pub fn new(config: &W3wConfig) -> Result<Self, W3wError> {
        config.validate().map_err(W3wError::ConfigurationError)?;

        let api_key = config.api_key.clone().ok_or_else(|| {
            W3wError::ConfigurationError("what3words API key is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(WRAPPER_AGENT)
            .build()
            .map_err(|e| W3wError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Default response language from the configuration
    #[must_use]
    pub fn language(&self) -> &str {
        &self.config.language
    }

    /// Check whether a candidate is a real, registered three-word address
    ///
    /// Convenience wrapper around [`confirm::is_valid_3wa`] using this
    /// geocoder as the confirmation client.
    ///
    /// # Errors
    ///
    /// Propagates remote failures from the confirmation call; a candidate
    /// that fails the lexical grammar yields `Ok(false)` without any
    /// network traffic.
    pub async fn is_valid_3wa(&self, text: &str) -> Result<bool, W3wError> {
        confirm::is_valid_3wa(self, text).await
    }

    /// Issue a GET request and decode the JSON response
    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, W3wError> {
        let url = format!("{}{}", self.config.base_url, path);

        debug!(%url, "Sending what3words request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .header(API_KEY_HEADER, &self.api_key)
            .header(WRAPPER_HEADER, WRAPPER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    W3wError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else if e.is_connect() {
                    W3wError::ConnectionFailed(e.to_string())
                } else {
                    W3wError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received what3words response");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            return Err(W3wError::RateLimitExceeded {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(W3wError::from_http_failure(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| W3wError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl W3wClient for Geocoder {
    #[instrument(skip(self))]
    async fn convert_to_coordinates(&self, words: &str) -> Result<Address, W3wError> {
        let words = words.trim();
        if words.is_empty() {
            return Err(W3wError::BadInput("words must not be empty".to_string()));
        }

        let params = [("words", words.to_string())];
        self.request("/convert-to-coordinates", &params).await
    }

    #[instrument(skip(self))]
    async fn convert_to_3wa(
        &self,
        coordinates: Coordinates,
        language: &str,
    ) -> Result<Address, W3wError> {
        let params = [
            ("coordinates", coordinates.to_string()),
            ("language", language.to_string()),
        ];
        self.request("/convert-to-3wa", &params).await
    }

    #[instrument(skip(self))]
    async fn grid_section(&self, bounding_box: BoundingBox) -> Result<GridSection, W3wError> {
        let params = [("bounding-box", bounding_box.to_string())];
        self.request("/grid-section", &params).await
    }

    #[instrument(skip(self))]
    async fn available_languages(&self) -> Result<AvailableLanguages, W3wError> {
        self.request("/available-languages", &[]).await
    }

    #[instrument(skip(self))]
    async fn autosuggest(
        &self,
        input: &str,
        options: &AutosuggestOptions,
    ) -> Result<AutosuggestResponse, W3wError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(W3wError::BadInput("input must not be empty".to_string()));
        }

        let mut params = vec![("input", input.to_string())];
        params.extend(options.query_pairs());
        self.request("/autosuggest", &params).await
    }
}
