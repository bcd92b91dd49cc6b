//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::HttpTransport;
use crate::types::{CleanParameters, TransportResponse};
use crate::{Result, TimezoneDbError};

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("timezonedb-rs/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// [`HttpTransport`] over a pooled reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                TimezoneDbError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self { http })
    }

    /// Wrap an existing reqwest client (proxies, TLS settings, ...).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn get(&self, url: &str, query: &CleanParameters) -> Result<TransportResponse> {
        debug!(url, params = query.len(), "sending request");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
