//! Per-request log line.

use std::time::Duration;

use tracing::info;

use crate::status::Status;

/// Emits one `info` event per request with method, path, status and latency.
pub(crate) fn record(method: &http::Method, path: &str, status: Status, elapsed: Duration) {
    info!(
        method = %method,
        path,
        status = u16::from(status),
        latency_us = elapsed.as_micros() as u64,
        "request"
    );
}
