//! The service's route table.

mod customers;
mod error;

use std::sync::Arc;

pub use customers::{get_customer, update_customer};
pub use error::ApiError;

use crate::health;
use crate::method::Method;
use crate::request::Request;
use crate::router::Router;
use crate::store::CustomerStore;

/// Builds the router for the customer profile service around `store`.
///
/// ```rust
/// use std::sync::Arc;
/// use customer_profile::{api, CustomerStore};
///
/// let app = api::routes(Arc::new(CustomerStore::seeded()));
/// ```
pub fn routes(store: Arc<CustomerStore>) -> Router {
    let reader = Arc::clone(&store);
    let writer = store;

    Router::new()
        .on(Method::Get, "/", health::service_info)
        .on(Method::Get, "/health", health::health)
        .on(Method::Get, "/customers/", customers::missing_id)
        .on(Method::Patch, "/customers/", customers::missing_id)
        .on(Method::Get, "/customers/{id}", move |req: Request| {
            get_customer(Arc::clone(&reader), req)
        })
        .on(Method::Patch, "/customers/{id}", move |req: Request| {
            update_customer(Arc::clone(&writer), req)
        })
}
