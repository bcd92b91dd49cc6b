//! timezonedb - validated client for the timezonedb.com API
//!
//! Wraps the three remote operations (list time zones, get a time zone,
//! convert between zones). Parameters are checked against a declarative
//! per-endpoint schema before any request is sent, so a call with missing
//! or malformed parameters fails locally and never touches the network.
//!
//! # Example
//!
//! ```rust,no_run
//! use timezonedb::{GetTimeZoneOptions, ResponseFormat, TimezoneDb};
//!
//! #[tokio::main]
//! async fn main() -> timezonedb::Result<()> {
//!     let client = TimezoneDb::builder()
//!         .api_key("YOUR_KEY")
//!         .api_type("api")
//!         .build()?;
//!
//!     let response = client
//!         .get_time_zone(&GetTimeZoneOptions::by_zone("Europe/Oslo").format(ResponseFormat::Json))
//!         .await?;
//!
//!     println!("{:?}", response.as_json());
//!     Ok(())
//! }
//! ```
//!
//! # Validation only
//!
//! ```rust
//! use timezonedb::{RequestParameters, TimezoneDbError, validator};
//!
//! let params = RequestParameters::new().with("key", "K").with("by", "position");
//! let err = validator::validate("get-time-zone", &params).unwrap_err();
//! assert!(matches!(err, TimezoneDbError::ConditionalMissing { .. }));
//! ```

pub mod client;
#[cfg(feature = "config-file")]
pub mod config;
pub mod decode;
pub mod error;
pub mod registry;
pub mod telemetry;
pub mod transport;
pub mod types;
pub mod url;
pub mod validator;

// Re-export main types at crate root
pub use client::{TimezoneDb, TimezoneDbBuilder};
pub use decode::{FormatDecoder, ResponseDecoder};
pub use error::{Result, TimezoneDbError};
pub use registry::{Endpoint, EndpointSchema, lookup_endpoint};
pub use transport::{HttpTransport, ReqwestTransport};

#[cfg(feature = "config-file")]
pub use config::Settings;

// Re-export all types
pub use types::{
    ApiClientConfig, ApiType, ApiVersion, CleanParameters, ConvertTimeZoneOptions,
    GetTimeZoneOptions, ListTimeZoneOptions, LookupBy, RequestParameters, ResponseFormat,
    TimezoneResponse, TransportResponse,
};
