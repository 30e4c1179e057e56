//! Geocoding error types

use domain::DomainError;
use thiserror::Error;

/// Errors raised by an [`HttpTransport`](crate::HttpTransport) while fetching a URL
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Service rejected the client (HTTP 401/403)
    #[error("Unauthorized: HTTP {status}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
    },

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying (if provided by the service)
        retry_after_secs: Option<u64>,
    },

    /// Any other non-success HTTP status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Reading the response body failed
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Returns true if repeating the request might succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_)
            | Self::Timeout { .. }
            | Self::RateLimited { .. }
            | Self::Body(_) => true,
            Self::HttpStatus { status, .. } => *status >= 500,
            Self::Unauthorized { .. } => false,
        }
    }
}

/// Errors returned by geocoding providers
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The provider cannot serve this kind of query
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The response body could not be understood
    #[error("Invalid result {params}: {reason}")]
    InvalidServerResponse {
        /// Request parameters as a JSON object
        params: String,
        /// What was wrong with the body
        reason: String,
    },

    /// Fetching the response failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The provider is misconfigured (e.g. an endpoint is not a URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A result violated a domain rule
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl GeocodingError {
    /// Returns true if repeating the request might succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_retryable(),
            Self::UnsupportedOperation(_)
            | Self::InvalidServerResponse { .. }
            | Self::Configuration(_)
            | Self::Domain(_) => false,
        }
    }
}
