//! Permissive CORS headers and pre-flight answers.

use crate::response::Response;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, PATCH, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Adds the CORS headers to `response`.
pub(crate) fn apply(mut response: Response) -> Response {
    response.push_header("access-control-allow-origin", ALLOW_ORIGIN);
    response.push_header("access-control-allow-methods", ALLOW_METHODS);
    response.push_header("access-control-allow-headers", ALLOW_HEADERS);
    response
}

/// `OPTIONS` on any path: `200` with an empty JSON object.
pub(crate) fn preflight() -> Response {
    Response::json(b"{}".to_vec())
}
