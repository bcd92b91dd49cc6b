//! Immutable per-client configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, TimezoneDbError};

/// API access tier, selecting the request subdomain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiType {
    /// Public tier (`api.timezonedb.com`).
    Api,
    /// Premium tier (`vip.timezonedb.com`).
    #[default]
    Vip,
}

impl ApiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Vip => "vip",
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiType {
    type Err = TimezoneDbError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "api" => Ok(Self::Api),
            "vip" => Ok(Self::Vip),
            other => Err(TimezoneDbError::InvalidApiType(other.to_string())),
        }
    }
}

/// Protocol version of the remote API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiVersion {
    #[default]
    #[serde(rename = "2.1")]
    V2_1,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = TimezoneDbError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "2.1" => Ok(Self::V2_1),
            other => Err(TimezoneDbError::InvalidApiVersion(other.to_string())),
        }
    }
}

/// API key, tier and version for one client instance.
///
/// Validated once at construction and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    api_key: String,
    api_type: ApiType,
    api_version: ApiVersion,
}

impl ApiClientConfig {
    /// Validate raw constructor inputs.
    ///
    /// Checks the tier, then the key, then the version, and reports the
    /// first failure.
    pub fn new(api_key: impl Into<String>, api_type: &str, api_version: &str) -> Result<Self> {
        let api_type = api_type.parse::<ApiType>()?;
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(TimezoneDbError::MissingApiKey);
        }
        let api_version = api_version.parse::<ApiVersion>()?;
        Ok(Self {
            api_key,
            api_type,
            api_version,
        })
    }

    /// Build from already-typed tier and version.
    pub fn from_parts(
        api_key: impl Into<String>,
        api_type: ApiType,
        api_version: ApiVersion,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(TimezoneDbError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            api_type,
            api_version,
        })
    }

    /// Key with default tier (`vip`) and the latest version.
    pub fn with_defaults(api_key: impl Into<String>) -> Result<Self> {
        Self::from_parts(api_key, ApiType::default(), ApiVersion::default())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_type(&self) -> ApiType {
        self.api_type
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }
}

// Keeps the key out of logs.
impl fmt::Debug for ApiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_type", &self.api_type)
            .field("api_version", &self.api_version)
            .finish()
    }
}
