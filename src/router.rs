//! Radix-tree request router.
//!
//! One tree per HTTP method. Paths are matched against fixed templates such
//! as `/customers/{id}`, so `/customers/1/extra` never reaches the customer
//! handler the way a prefix scan would let it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Body;
use matchit::Router as MatchitRouter;

use crate::api::ApiError;
use crate::error::BoxError;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{cors, trace};
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and are read back with
    /// `req.param("name")`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid template or collides with a route
    /// already registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Routes one request and produces one response, with CORS headers
    /// applied and the request logged.
    ///
    /// Never fails: unknown routes become `404`, and a handler panic becomes
    /// `500` with the cause logged server-side.
    pub async fn handle<B>(&self, req: http::Request<B>) -> Response
    where
        B: Body<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let response = cors::apply(self.route(req).await);
        trace::record(&method, &path, response.status(), started.elapsed());
        response
    }

    async fn route<B>(&self, req: http::Request<B>) -> Response
    where
        B: Body<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let Ok(method) = Method::try_from(req.method()) else {
            return not_found();
        };
        if method == Method::Options {
            return cors::preflight();
        }

        let (parts, body) = req.into_parts();
        let Some((handler, params)) = self.lookup(method, parts.uri.path()) else {
            return not_found();
        };

        let body = body.map_err(|e| -> BoxError { e.into() }).boxed_unsync();
        let request = Request::new(parts.headers, body, params);

        // Each handler runs in its own task so a panic is contained to this
        // request.
        match tokio::spawn(handler.call(request)).await {
            Ok(response) => response,
            Err(e) => ApiError::internal(format!("{method} {}: {e}", parts.uri.path())).into_response(),
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

fn not_found() -> Response {
    Response::error(Status::NotFound, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Empty;

    fn get(path: &str) -> http::Request<Empty<Bytes>> {
        http::Request::get(path).body(Empty::new()).unwrap()
    }

    async fn echo_id(req: Request) -> Response {
        Response::json(req.param("id").unwrap_or_default().as_bytes().to_vec())
    }

    async fn boom(_req: Request) -> Response {
        panic!("handler exploded");
    }

    #[test]
    fn lookup_extracts_params() {
        let router = Router::new().on(Method::Get, "/customers/{id}", echo_id);
        let (_, params) = router.lookup(Method::Get, "/customers/7").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("7"));
        assert!(router.lookup(Method::Patch, "/customers/7").is_none());
        assert!(router.lookup(Method::Get, "/customers/7/extra").is_none());
    }

    #[tokio::test]
    async fn unrouted_paths_get_json_404() {
        let router = Router::new().on(Method::Get, "/customers/{id}", echo_id);
        let res = router.handle(get("/nowhere")).await;
        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(res.header("access-control-allow-origin"), Some("*"));
    }

    #[tokio::test]
    async fn extension_methods_get_404() {
        let router = Router::new().on(Method::Get, "/customers/{id}", echo_id);
        let req = http::Request::builder()
            .method(http::Method::from_bytes(b"PURGE").unwrap())
            .uri("/customers/1")
            .body(Empty::<Bytes>::new())
            .unwrap();
        assert_eq!(router.handle(req).await.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn panicking_handler_becomes_500() {
        let router = Router::new().on(Method::Get, "/boom", boom);
        let res = router.handle(get("/boom")).await;
        assert_eq!(res.status(), Status::InternalServerError);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::new()
            .on(Method::Get, "/customers/{id}", echo_id)
            .on(Method::Get, "/customers/{other}", echo_id);
    }
}
