//! Decoded API responses.

use serde::de::DeserializeOwned;

use crate::Result;

/// Response body after decoding.
///
/// JSON bodies are parsed; anything else (XML by default) is handed back
/// untouched for the caller to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum TimezoneResponse {
    Json(serde_json::Value),
    Raw(Vec<u8>),
}

impl TimezoneResponse {
    /// Parsed JSON, if the response was requested as JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Raw body, if the response was not decoded.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(bytes) => Some(bytes),
            Self::Json(_) => None,
        }
    }

    /// Body bytes; JSON values are re-serialized.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Raw(bytes) => Ok(bytes),
            Self::Json(value) => Ok(serde_json::to_vec(&value)?),
        }
    }

    /// Deserialize into a caller-defined type.
    ///
    /// Works for JSON responses and for raw bodies that happen to hold JSON.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            Self::Json(value) => Ok(T::deserialize(value)?),
            Self::Raw(bytes) => Ok(serde_json::from_slice(bytes)?),
        }
    }
}

/// Status and body returned by an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
