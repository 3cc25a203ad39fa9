//! Error types for calls to the feedback service.
//!
//! `ApiError` keeps the full source chain for logging. `ApiFailure` is the
//! cloneable summary that travels back to the UI thread inside intents.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the feedback service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configured base URL or endpoint path does not form a valid URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// No response: connection refused, DNS failure, timeout
    #[error("{method} {path} failed: {source}")]
    Transport {
        method: &'static str,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a status other than the expected one
    #[error("{method} {path} returned {status}: {body}")]
    Status {
        method: &'static str,
        path: String,
        status: StatusCode,
        body: String,
    },

    /// The response body was not the expected JSON shape
    #[error("Failed to decode {path} response: {source}")]
    Decode {
        path: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Client(_) => "client_error",
            ApiError::Transport { .. } => "transport_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Summary of a failed call, suitable for carrying in UI intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// No response body was received.
    Transport { reason: String },
    /// Unexpected status; `body` is the raw response text.
    Status { status: u16, body: String },
    /// Response was not decodable; `body` is the raw response text.
    Decode { body: String, reason: String },
}

impl ApiFailure {
    /// Human-readable alert text.
    ///
    /// Responses that arrived are reported as `"<context>: <raw body>"`;
    /// transport failures as `"No data received: <reason>"`.
    pub fn describe(&self, context: &str) -> String {
        match self {
            ApiFailure::Transport { reason } => format!("No data received: {}", reason),
            ApiFailure::Status { body, .. } | ApiFailure::Decode { body, .. } => {
                format!("{}: {}", context, body)
            }
        }
    }
}

impl From<&ApiError> for ApiFailure {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Status { status, body, .. } => ApiFailure::Status {
                status: status.as_u16(),
                body: body.clone(),
            },
            ApiError::Decode { body, source, .. } => ApiFailure::Decode {
                body: body.clone(),
                reason: source.to_string(),
            },
            ApiError::Transport { source, .. } => ApiFailure::Transport {
                reason: source.to_string(),
            },
            ApiError::InvalidUrl { .. } | ApiError::Client(_) => ApiFailure::Transport {
                reason: err.to_string(),
            },
        }
    }
}
