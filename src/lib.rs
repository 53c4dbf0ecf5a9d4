//! # customer-profile
//!
//! A small HTTP service for reading and partially updating customer
//! profiles held in process memory.
//!
//! ## Routes
//!
//! | Method | Path | Success | Errors |
//! |---|---|---|---|
//! | `OPTIONS` | any | `200 {}` | |
//! | `GET` | `/` | `200` service descriptor | |
//! | `GET` | `/health` | `200` health report | |
//! | `GET` | `/customers/{id}` | `200` customer | `400`, `404` |
//! | `PATCH` | `/customers/{id}` | `200` updated customer | `400`, `404`, `422` |
//!
//! Anything else is `404 {"error": "Not found"}`. Every response is JSON and
//! carries permissive CORS headers.
//!
//! ## Layout
//!
//! The HTTP plumbing ([`Router`], [`Server`], [`Request`], [`Response`]) is a
//! thin layer over hyper with a matchit radix tree per method. The domain
//! side is the [`CustomerStore`], the [`validate_update`] check, and the
//! handlers in [`api`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use customer_profile::{api, CustomerStore, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), customer_profile::Error> {
//!     let app = api::routes(Arc::new(CustomerStore::seeded()));
//!     Server::bind(([0, 0, 0, 0], 8000).into()).await?.serve(app).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod middleware;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod config;
pub mod customer;
pub mod health;
pub mod store;
pub mod validate;

pub use customer::{Customer, Field};
pub use error::{BoxError, Error};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::CustomerStore;
pub use validate::validate_update;
