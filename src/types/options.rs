//! Per-endpoint call options.
//!
//! Every field is optional and carried as a raw string so that the
//! validator, not the type system, decides what is acceptable. The
//! [`ResponseFormat`] and [`LookupBy`] enums are conveniences that convert
//! into those strings.

use serde::{Deserialize, Serialize};

use super::params::RequestParameters;

/// Response body format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Xml,
    Json,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }
}

impl From<ResponseFormat> for String {
    fn from(format: ResponseFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Lookup method for `get-time-zone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupBy {
    /// By time zone name or abbreviation (needs `zone`).
    Zone,
    /// By latitude and longitude (needs `lat` and `lng`).
    Position,
    /// By city name (needs `country` and `city`).
    City,
    /// By IP address (needs `ip`).
    Ip,
}

impl LookupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zone => "zone",
            Self::Position => "position",
            Self::City => "city",
            Self::Ip => "ip",
        }
    }
}

impl From<LookupBy> for String {
    fn from(by: LookupBy) -> Self {
        by.as_str().to_string()
    }
}

macro_rules! setters {
    ($($(#[$meta:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

/// Options for `list-time-zone`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTimeZoneOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

impl ListTimeZoneOptions {
    setters! {
        /// `xml` or `json`.
        format,
        /// JavaScript JSON callback name.
        callback,
        /// Comma-separated field names, no spaces.
        fields,
        /// ISO 3166 country code filter.
        country,
        /// Zone name filter; `*` is a wildcard.
        zone,
    }

    /// Request parameters with `key` injected.
    pub fn to_parameters(&self, key: &str) -> RequestParameters {
        [
            ("key", Some(key.to_string())),
            ("format", self.format.clone()),
            ("callback", self.callback.clone()),
            ("fields", self.fields.clone()),
            ("country", self.country.clone()),
            ("zone", self.zone.clone()),
        ]
        .into_iter()
        .collect()
    }
}

/// Options for `get-time-zone`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetTimeZoneOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl GetTimeZoneOptions {
    setters! {
        format,
        callback,
        fields,
        /// Lookup method: `zone`, `position`, `city` or `ip`.
        by,
        zone,
        lat,
        lng,
        country,
        /// US region code, narrows a city lookup.
        region,
        city,
        ip,
        /// Result page when there are more than 10 records.
        page,
        /// Unix time in UTC.
        time,
    }

    /// Lookup by time zone name.
    pub fn by_zone(zone: impl Into<String>) -> Self {
        Self::default().by(LookupBy::Zone).zone(zone)
    }

    /// Lookup by coordinates.
    pub fn by_position(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self::default().by(LookupBy::Position).lat(lat).lng(lng)
    }

    /// Lookup by city within a country.
    pub fn by_city(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self::default().by(LookupBy::City).country(country).city(city)
    }

    /// Lookup by IP address.
    pub fn by_ip(ip: impl Into<String>) -> Self {
        Self::default().by(LookupBy::Ip).ip(ip)
    }

    pub fn to_parameters(&self, key: &str) -> RequestParameters {
        [
            ("key", Some(key.to_string())),
            ("format", self.format.clone()),
            ("callback", self.callback.clone()),
            ("fields", self.fields.clone()),
            ("by", self.by.clone()),
            ("zone", self.zone.clone()),
            ("lat", self.lat.clone()),
            ("lng", self.lng.clone()),
            ("country", self.country.clone()),
            ("region", self.region.clone()),
            ("city", self.city.clone()),
            ("ip", self.ip.clone()),
            ("page", self.page.clone()),
            ("time", self.time.clone()),
        ]
        .into_iter()
        .collect()
    }
}

/// Options for `convert-time-zone`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertTimeZoneOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl ConvertTimeZoneOptions {
    /// Convert between two zones (names or abbreviations).
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::default().from(from).to(to)
    }

    setters! {
        format,
        callback,
        fields,
        from,
        to,
        time,
    }

    pub fn to_parameters(&self, key: &str) -> RequestParameters {
        [
            ("key", Some(key.to_string())),
            ("format", self.format.clone()),
            ("callback", self.callback.clone()),
            ("fields", self.fields.clone()),
            ("from", self.from.clone()),
            ("to", self.to.clone()),
            ("time", self.time.clone()),
        ]
        .into_iter()
        .collect()
    }
}
