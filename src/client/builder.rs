//! Builder for configuring client instances

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use super::TimezoneDb;
use crate::Result;
use crate::decode::{FormatDecoder, ResponseDecoder};
use crate::transport::{DEFAULT_TIMEOUT, HttpTransport, ReqwestTransport};
use crate::types::ApiClientConfig;

/// Builder for configuring client instances.
///
/// Tier and version are taken as raw strings and validated by
/// [`build()`](Self::build), in the order tier, key, version.
pub struct TimezoneDbBuilder {
    api_key: Option<String>,
    api_type: String,
    api_version: String,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpTransport>>,
    decoder: Option<Arc<dyn ResponseDecoder>>,
}

impl Default for TimezoneDbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneDbBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            api_type: "vip".to_string(),
            api_version: "2.1".to_string(),
            timeout: None,
            transport: None,
            decoder: None,
        }
    }

    /// Set the API key (required).
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API tier: `"api"` or `"vip"` (default).
    pub fn api_type(mut self, api_type: impl Into<String>) -> Self {
        self.api_type = api_type.into();
        self
    }

    /// Set the API version (default: `"2.1"`).
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout of the default transport.
    ///
    /// Has no effect when a custom transport is supplied; that transport
    /// owns its own timeout policy.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom HTTP transport instead of reqwest.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom response decoder.
    pub fn decoder(mut self, decoder: Arc<dyn ResponseDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<TimezoneDb> {
        let config = ApiClientConfig::new(
            self.api_key.unwrap_or_default(),
            &self.api_type,
            &self.api_version,
        )?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => {
                if self.timeout.is_some() {
                    warn!(
                        transport = transport.name(),
                        "timeout ignored for custom transport"
                    );
                }
                transport
            }
            None => Arc::new(ReqwestTransport::with_timeout(
                self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            )?),
        };

        Ok(TimezoneDb {
            config,
            transport,
            decoder: self.decoder.unwrap_or_else(|| Arc::new(FormatDecoder)),
        })
    }
}
