//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;
use http_body_util::BodyExt;
use http_body_util::combinators::UnsyncBoxBody;

use crate::error::{BoxError, Error};

/// Type-erased request body, read at most once.
pub(crate) type Body = UnsyncBoxBody<Bytes, BoxError>;

/// An incoming HTTP request with its matched path parameters.
///
/// The body is not buffered up front. Handlers that need it call
/// [`Request::body_bytes`], so a handler can reject a request (unknown id,
/// malformed path) without ever touching the payload.
pub struct Request {
    headers: HeaderMap,
    body: Option<Body>,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(headers: HeaderMap, body: Body, params: HashMap<String, String>) -> Self {
        Self { headers, body: Some(body), params }
    }

    /// Case-insensitive header lookup. Non-UTF-8 values are treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/customers/{id}`, `req.param("id")` on `/customers/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The declared `Content-Length`, or `None` when the header is absent.
    pub fn content_length(&self) -> Result<Option<u64>, Error> {
        match self.header("content-length") {
            None => Ok(None),
            Some(raw) => raw.trim().parse().map(Some).map_err(|_| Error::ContentLength),
        }
    }

    /// Reads the whole body. A second call yields an empty buffer.
    pub async fn body_bytes(&mut self) -> Result<Bytes, Error> {
        let Some(body) = self.body.take() else {
            return Ok(Bytes::new());
        };
        let collected = body.collect().await.map_err(Error::Body)?;
        Ok(collected.to_bytes())
    }
}
