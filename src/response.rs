//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Every body this service sends is JSON, so the constructors here only deal
//! in JSON: raw bytes via [`Response::json`], serde values via [`Json`], and
//! the `{"error": ...}` envelope via [`Response::error`].

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http_body_util::Full;
use serde::Serialize;
use tracing::warn;

use crate::api::ApiError;
use crate::status::Status;

const JSON: &str = "application/json";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use customer_profile::{Response, Status};
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::error(Status::BadRequest, "Invalid customer ID");
/// Response::builder()
///     .status(Status::UnprocessableContent)
///     .json(br#"{"error":"Validation error: ..."}"#.to_vec());
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: Status,
}

impl Response {
    /// `200 OK` — `application/json`.
    pub fn json(body: Vec<u8>) -> Self {
        Self::builder().json(body)
    }

    /// The uniform error envelope: `{"error": message}` with `status`.
    pub fn error(status: Status, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let envelope = serde_json::json!({ "error": message });
        match serde_json::to_vec_pretty(&envelope) {
            Ok(body) => Self::builder().status(status).json(body),
            // A `Value` built from a string cannot fail to serialize.
            Err(_) => Self::builder().status(status).json(Vec::new()),
        }
    }

    /// Builder for responses that need a non-200 status.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: Status::Ok }
    }

    pub fn status(&self) -> Status { self.status }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn push_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_owned(), value.to_owned()));
    }

    /// Converts into the hyper response written to the connection.
    ///
    /// Headers that are not valid HTTP tokens are dropped with a warning.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = self.status.into();
        for (name, value) in self.headers {
            match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(&value)) {
                (Ok(name), Ok(value)) => {
                    res.headers_mut().append(name, value);
                }
                _ => warn!(header = %name, "dropping invalid response header"),
            }
        }
        res
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
pub struct ResponseBuilder {
    status: Status,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code;
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: Vec<u8>) -> Response {
        let headers = vec![("content-type".to_owned(), JSON.to_owned())];
        Response { body, headers, status: self.status }
    }
}

// ── Json ──────────────────────────────────────────────────────────────────────

/// A serde value rendered as a pretty-printed `200 OK` JSON body.
///
/// ```rust,ignore
/// async fn get_customer(_req: Request) -> Json<Customer> {
///     Json(customer)
/// }
/// ```
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => ApiError::internal(e).into_response(),
        }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

/// Handlers return `Result<T, E>` and use `?`; both arms render themselves.
impl<T: IntoResponse, E: IntoResponse> IntoResponse for Result<T, E> {
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}
