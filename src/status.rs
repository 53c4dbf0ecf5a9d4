//! HTTP status codes the service answers with.
//!
//! ```rust
//! use customer_profile::{Response, Status};
//!
//! let res = Response::error(Status::NotFound, "Not found");
//! assert_eq!(res.status(), Status::NotFound);
//! assert_eq!(u16::from(Status::UnprocessableContent), 422);
//! ```

/// Status codes emitted by the routes in this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[allow(clippy::enum_variant_names)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                   // 200

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,           // 400
    NotFound,             // 404
    UnprocessableContent, // 422

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,  // 500
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                   => 200,
            Status::BadRequest           => 400,
            Status::NotFound             => 404,
            Status::UnprocessableContent => 422,
            Status::InternalServerError  => 500,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        match s {
            Status::Ok                   => http::StatusCode::OK,
            Status::BadRequest           => http::StatusCode::BAD_REQUEST,
            Status::NotFound             => http::StatusCode::NOT_FOUND,
            Status::UnprocessableContent => http::StatusCode::UNPROCESSABLE_ENTITY,
            Status::InternalServerError  => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
