//! Client entry point and request dispatch.

mod builder;

pub use builder::TimezoneDbBuilder;

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::decode::ResponseDecoder;
use crate::registry::Endpoint;
use crate::telemetry;
use crate::transport::HttpTransport;
use crate::types::{
    ApiClientConfig, CleanParameters, ConvertTimeZoneOptions, GetTimeZoneOptions,
    ListTimeZoneOptions, RequestParameters, TimezoneResponse,
};
use crate::url::build_url;
use crate::validator::validate_schema;
use crate::Result;

/// Client for the timezonedb.com API.
///
/// Every call validates its parameters first; a call that fails validation
/// never reaches the transport. The client holds no mutable state, so one
/// instance can serve concurrent callers.
#[derive(Clone)]
pub struct TimezoneDb {
    config: ApiClientConfig,
    transport: Arc<dyn HttpTransport>,
    decoder: Arc<dyn ResponseDecoder>,
}

impl TimezoneDb {
    /// Create a new builder for configuring the client.
    pub fn builder() -> TimezoneDbBuilder {
        TimezoneDbBuilder::new()
    }

    /// Client with default tier, version and transport.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// List supported time zones, optionally filtered by country or zone.
    pub async fn list_time_zone(&self, options: &ListTimeZoneOptions) -> Result<TimezoneResponse> {
        let params = options.to_parameters(self.config.api_key());
        self.dispatch(Endpoint::ListTimeZone, params).await
    }

    /// Look up a time zone by zone name, position, city or IP.
    pub async fn get_time_zone(&self, options: &GetTimeZoneOptions) -> Result<TimezoneResponse> {
        let params = options.to_parameters(self.config.api_key());
        self.dispatch(Endpoint::GetTimeZone, params).await
    }

    /// Convert a timestamp between two time zones.
    pub async fn convert_time_zone(
        &self,
        options: &ConvertTimeZoneOptions,
    ) -> Result<TimezoneResponse> {
        let params = options.to_parameters(self.config.api_key());
        self.dispatch(Endpoint::ConvertTimeZone, params).await
    }

    /// Call an endpoint with a hand-built parameter map.
    ///
    /// `key` is always taken from the client config; a caller-supplied
    /// value is replaced.
    pub async fn call(
        &self,
        endpoint: Endpoint,
        mut params: RequestParameters,
    ) -> Result<TimezoneResponse> {
        params.set("key", Some(self.config.api_key().to_string()));
        self.dispatch(endpoint, params).await
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        params: RequestParameters,
    ) -> Result<TimezoneResponse> {
        let clean = match validate_schema(endpoint.schema(), &params) {
            Ok(clean) => clean,
            Err(e) => {
                metrics::counter!(telemetry::VALIDATION_FAILURES_TOTAL,
                    "endpoint" => endpoint.as_str(), "kind" => e.kind())
                .increment(1);
                metrics::counter!(telemetry::REQUESTS_TOTAL,
                    "endpoint" => endpoint.as_str(), "status" => "error")
                .increment(1);
                return Err(e);
            }
        };

        let url = build_url(&self.config, endpoint.as_str());
        let start = Instant::now();
        let result = self.send(&url, &clean).await;

        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
            "endpoint" => endpoint.as_str())
        .record(start.elapsed().as_secs_f64());
        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "endpoint" => endpoint.as_str(), "status" => status)
        .increment(1);

        result
    }

    async fn send(&self, url: &str, clean: &CleanParameters) -> Result<TimezoneResponse> {
        debug!(url, transport = self.transport.name(), "dispatching request");
        let response = self.transport.get(url, clean).await?;

        // failures are reported in the body; it is decoded regardless of status
        if !response.is_success() {
            warn!(url, status = response.status, "non-success status");
        }

        self.decoder.decode(response.body, clean)
    }
}

impl std::fmt::Debug for TimezoneDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimezoneDb")
            .field("config", &self.config)
            .field("transport", &self.transport.name())
            .finish_non_exhaustive()
    }
}
