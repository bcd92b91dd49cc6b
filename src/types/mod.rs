//! Public types for the TimezoneDB client.

mod client_config;
mod options;
mod params;
mod response;

pub use client_config::{ApiClientConfig, ApiType, ApiVersion};
pub use options::{
    ConvertTimeZoneOptions, GetTimeZoneOptions, ListTimeZoneOptions, LookupBy, ResponseFormat,
};
pub use params::{CleanParameters, RequestParameters};
pub use response::{TimezoneResponse, TransportResponse};
