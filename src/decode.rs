//! Response decoder collaborator.

use crate::Result;
use crate::types::{CleanParameters, TimezoneResponse};

/// Turns a raw response body into a [`TimezoneResponse`].
pub trait ResponseDecoder: Send + Sync {
    fn decode(&self, body: Vec<u8>, params: &CleanParameters) -> Result<TimezoneResponse>;
}

/// Parses the body as JSON when `format=json` was requested, otherwise
/// passes it through unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatDecoder;

impl ResponseDecoder for FormatDecoder {
    fn decode(&self, body: Vec<u8>, params: &CleanParameters) -> Result<TimezoneResponse> {
        match params.format() {
            Some("json") => Ok(TimezoneResponse::Json(serde_json::from_slice(&body)?)),
            _ => Ok(TimezoneResponse::Raw(body)),
        }
    }
}
