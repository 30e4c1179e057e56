//! HTTP transport seam
//!
//! The provider only needs "GET this URL, give me the body". Keeping that
//! behind [`HttpTransport`] lets callers swap in caching or recording
//! transports and lets tests run without a network.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::MapyCzConfig;
use crate::error::TransportError;

/// Fetches the raw body of a URL
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` and return the response body
    async fn fetch(&self, url: &str) -> Result<Bytes, TransportError>;
}

/// [`HttpTransport`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a transport using the timeout and user agent from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &MapyCzConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<Bytes, TransportError> {
        debug!(%url, "Fetching");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                TransportError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(%status, "Request rejected");
                return Err(TransportError::Unauthorized {
                    status: status.as_u16(),
                });
            },
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(TransportError::RateLimited {
                    retry_after_secs: response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse().ok()),
                });
            },
            _ if !status.is_success() => {
                warn!(%status, %url, "Unexpected HTTP status");
                return Err(TransportError::HttpStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            },
            _ => {},
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                TransportError::Body(e.to_string())
            }
        })?;

        debug!(bytes = body.len(), "Fetched response body");
        Ok(body)
    }
}
