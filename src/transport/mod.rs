//! HTTP transport collaborator.
//!
//! The client never talks to the network directly; it hands a URL and the
//! validated query to an [`HttpTransport`]. [`ReqwestTransport`] is the
//! default. Tests and callers with their own HTTP stack can plug in any
//! other implementation.

mod reqwest_client;

use async_trait::async_trait;

use crate::Result;
use crate::types::{CleanParameters, TransportResponse};

pub use reqwest_client::{DEFAULT_TIMEOUT, ReqwestTransport, USER_AGENT};

/// Performs a GET request and returns status plus raw body.
///
/// Implementations report network failures as
/// [`TimezoneDbError::Transport`](crate::TimezoneDbError::Transport).
/// Non-success statuses are returned as-is; the client classifies them.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Transport name for logging/debugging.
    fn name(&self) -> &str;

    async fn get(&self, url: &str, query: &CleanParameters) -> Result<TransportResponse>;
}
