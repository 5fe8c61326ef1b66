//! Error types for the API client.

use thiserror::Error;

/// Failures an API call can produce.
///
/// Every variant carries enough context for diagnostics; `user_message`
/// picks the text suitable for a dialog.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused, timeout).
    #[error("network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("API error ({status}) on {endpoint}: {message}")]
    Status {
        status: u16,
        endpoint: String,
        /// Server-provided message when the error body carried one,
        /// otherwise a generic description of the status.
        message: String,
        /// Whether `message` came from the server rather than being synthesized.
        server_message: bool,
    },

    /// The response body did not decode into the expected shape.
    #[error("failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// The configured token cannot be used as an HTTP header value.
    #[error("invalid API token: {message}")]
    InvalidToken { message: String },
}

impl ApiError {
    pub fn network(err: &reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }

    pub fn decode(endpoint: impl Into<String>, err: &reqwest::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: err.to_string(),
        }
    }

    /// Text suitable for a user-facing notification. Server-provided
    /// messages are surfaced verbatim; everything else gets a short
    /// generic description.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message,
                server_message: true,
                ..
            } => message.clone(),
            ApiError::Status { status, .. } => format!("Request failed (HTTP {status})"),
            ApiError::Network { .. } => "Could not reach the server".to_string(),
            ApiError::Decode { .. } => "Received an unexpected response from the server".to_string(),
            ApiError::InvalidToken { .. } => "The stored API token is not usable".to_string(),
        }
    }
}
