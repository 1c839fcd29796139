//! what3words error types

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the what3words API
#[derive(Debug, Error)]
pub enum W3wError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection to the API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key is missing, invalid, or suspended
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The plan's usage quota is exhausted
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by the API)
        retry_after_secs: Option<u64>,
    },

    /// The request parameters were rejected by the API
    #[error("Bad input: {0}")]
    BadInput(String),

    /// Any other structured API error
    #[error("API error {code}: {message}")]
    Api {
        /// Error classification code from the response body
        code: String,
        /// Human-readable message from the response body
        message: String,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

/// Structured error body returned by the v3 API
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl W3wError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }

    /// Map a non-success HTTP response onto the error taxonomy
    ///
    /// The v3 API pairs its status codes with a structured
    /// `{"error": {"code", "message"}}` body; the code takes precedence over
    /// the status when both are present.
    pub(crate) fn from_http_failure(status: StatusCode, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
            return Self::from_api_code(parsed.error.code, parsed.error.message);
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                Self::AuthenticationFailed(format!("HTTP {status}"))
            },
            StatusCode::PAYMENT_REQUIRED => Self::QuotaExceeded(format!("HTTP {status}")),
            StatusCode::BAD_REQUEST => Self::BadInput(format!("HTTP {status}: {body}")),
            _ => Self::RequestFailed(format!("HTTP {status}: {body}")),
        }
    }

    /// Map a structured API error code onto the error taxonomy
    fn from_api_code(code: String, message: String) -> Self {
        match code.as_str() {
            "InvalidKey" | "MissingKey" | "SuspendedKey" => Self::AuthenticationFailed(message),
            "QuotaExceeded" => Self::QuotaExceeded(message),
            _ if code.starts_with("Bad") || code.starts_with("Missing") => {
                Self::BadInput(message)
            },
            _ => Self::Api { code, message },
        }
    }
}
