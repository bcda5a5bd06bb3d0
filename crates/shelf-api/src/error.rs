//! # API Error Types
//!
//! Failures talking to the book service, and the single function that turns
//! them into something a person can read.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │     Server      │  │      Client             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Timeout        │  │  Server {       │  │  InvalidUrl             │ │
//! │  │  Network        │  │    status,      │  │  Decode                 │ │
//! │  │                 │  │    message }    │  │  Client                 │ │
//! │  └────────┬────────┘  └────────┬────────┘  └────────────┬────────────┘ │
//! │           ▼                    ▼                        ▼              │
//! │   "つながりませんでした"   server text, or        "エラーがおきました"  │
//! │                          generic fallback                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mapping is a pure function over the error value ([`ApiError::user_message`])
//! rather than a hook mutating the client.

use reqwest::StatusCode;
use shelf_core::notice::{messages, Notice};
use thiserror::Error;

/// Result type alias for book service calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Book service error.
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request did not complete within the client timeout.
    #[error("request timed out")]
    Timeout,

    /// No response: connection refused, DNS failure, reset, ...
    #[error("network error: {0}")]
    Network(String),

    // =========================================================================
    // Server Errors
    // =========================================================================
    /// Non-success status. `message` is the `error` field of the body, if any.
    #[error("book service returned {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Server {
        status: StatusCode,
        message: Option<String>,
    },

    // =========================================================================
    // Client Errors
    // =========================================================================
    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The configured base URL could not be used.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// The request could not be built or sent for another reason.
    #[error("request failed: {0}")]
    Client(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_connect() || err.is_request() || err.is_body() {
            ApiError::Network(err.to_string())
        } else if err.is_builder() {
            ApiError::Client(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Server {
                status,
                message: None,
            }
        } else {
            ApiError::Client(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

// =============================================================================
// User-Facing Messages
// =============================================================================

impl ApiError {
    /// Text shown to the user for this failure.
    ///
    /// 1. Server-supplied `error` text, verbatim.
    /// 2. Fixed "connection failed" for timeouts and unreachable service.
    /// 3. Fixed generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            ApiError::Timeout | ApiError::Network(_) => messages::CONNECTION_FAILED.to_string(),
            _ => messages::GENERIC_ERROR.to_string(),
        }
    }

    /// [`user_message`](Self::user_message) as an error notice.
    pub fn notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}
