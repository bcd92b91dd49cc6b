//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus,
//! statsd); without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `timezonedb_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `endpoint` — endpoint name (e.g. "get-time-zone")
//! - `status` — outcome: "ok" or "error"
//! - `kind` — error kind (e.g. "conditional_missing")

/// Total calls dispatched, including ones rejected by validation.
///
/// Labels: `endpoint`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "timezonedb_requests_total";

/// Duration of calls that reached the transport, in seconds.
///
/// Labels: `endpoint`.
pub const REQUEST_DURATION_SECONDS: &str = "timezonedb_request_duration_seconds";

/// Total calls rejected before any request was sent.
///
/// Labels: `endpoint`, `kind`.
pub const VALIDATION_FAILURES_TOTAL: &str = "timezonedb_validation_failures_total";
