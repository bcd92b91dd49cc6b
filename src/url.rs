//! Request URL construction.

use crate::types::ApiClientConfig;

/// Scheme used for every request.
pub const SCHEME: &str = "http";

/// API host; the tier is prepended as a subdomain.
pub const HOST: &str = "timezonedb.com";

/// Compose `{scheme}://{tier}.{host}/v{version}/{endpoint}`.
///
/// The endpoint name is passed through unmodified.
///
/// ```rust
/// # use timezonedb::{ApiClientConfig, url::build_url};
/// let config = ApiClientConfig::with_defaults("key").unwrap();
/// assert_eq!(
///     build_url(&config, "get-time-zone"),
///     "http://vip.timezonedb.com/v2.1/get-time-zone"
/// );
/// ```
pub fn build_url(config: &ApiClientConfig, endpoint: &str) -> String {
    format!(
        "{SCHEME}://{}.{HOST}/v{}/{endpoint}",
        config.api_type(),
        config.api_version()
    )
}
