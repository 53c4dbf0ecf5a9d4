//! Service descriptor and health-check handlers.
//!
//! | Path | Answer |
//! |---|---|
//! | `/` | Service name, version and endpoint list. |
//! | `/health` | `{"status": "healthy", ...}` while the process can answer HTTP. |
//!
//! Neither handler touches the customer store, so both return `200` no
//! matter what state the records are in.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::request::Request;
use crate::response::Json;

pub const SERVICE_NAME: &str = "Customer Profile Service";
pub const SERVICE_ID: &str = "customer-profile-service";

pub const ENDPOINTS: [&str; 3] = [
    "GET /customers/{id} - Fetch customer profile",
    "PATCH /customers/{id} - Update customer profile",
    "GET /health - Health check",
];

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: [&'static str; 3],
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// `GET /`
pub async fn service_info(_req: Request) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}

/// `GET /health`
///
/// The process has no dependencies, so answering at all means healthy.
pub async fn health(_req: Request) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        service: SERVICE_ID,
        timestamp: Utc::now(),
    })
}
