//! Handler trait and type erasure.
//!
//! # How route handlers are stored
//!
//! Every route closure has its own anonymous type, but the router keeps all
//! of them in one `HashMap<Method, Tree>`. A map holds a single value type,
//! so each handler is hidden behind a trait object (`dyn ErasedHandler`) and
//! stored uniformly as an `Arc`.
//!
//! From registration to the per-request call:
//!
//! ```text
//! move |req| get_customer(Arc::clone(&store), req)   ← route closure in api::routes
//!        ↓ Router::on(Method::Get, "/customers/{id}", …)
//! closure.into_boxed_handler()                        ← Handler blanket impl
//!        ↓
//! Arc::new(RouteFn(closure))                          ← stored as BoxedHandler
//!        ↓
//! handler.call(req)                                   ← one vtable dispatch
//!        ↓
//! Box::pin(async { fut.await.into_response() })       ← BoxFuture, handed to tokio::spawn
//! ```
//!
//! State reaches a handler through the closure: it owns an
//! `Arc<CustomerStore>` and clones it into every call, so the store is shared
//! without any global.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Internal types ────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future that resolves to a [`Response`].
///
/// Pinned because it is polled in place. `Send + 'static` because the
/// router runs it on its own task via `tokio::spawn`, which is what turns a
/// handler panic into a `500` instead of a dropped connection.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public [`Handler::into_boxed_handler`].
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared by every connection task.
///
/// One `Arc` clone per request; the closure itself (and the store `Arc` it
/// captures) is never copied.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// Satisfied automatically by any function or closure of the shape
///
/// ```text
/// Fn(Request) -> impl Future<Output = impl IntoResponse>
/// ```
///
/// which covers plain `async fn health(req: Request) -> Json<…>` items and
/// the store-capturing closures in [`api::routes`](crate::api::routes).
///
/// Sealed through the private `Sealed` supertrait: only the blanket impl
/// below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(RouteFn(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Holds a concrete route function and implements [`ErasedHandler`] for it.
struct RouteFn<F>(F);

impl<F, Fut, R> ErasedHandler for RouteFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        // Calling the closure only builds the future; nothing runs until the
        // router polls it. `Result<Json<_>, ApiError>` and friends are
        // flattened into a `Response` here.
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
