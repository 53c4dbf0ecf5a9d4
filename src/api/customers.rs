//! `GET` and `PATCH` on `/customers/{id}`.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::api::ApiError;
use crate::customer::{Customer, Field};
use crate::request::Request;
use crate::response::Json;
use crate::store::CustomerStore;
use crate::validate::validate_update;

const NO_UPDATABLE_FIELD: &str =
    "At least one updatable field must be provided (phone_number, address, email)";

/// `GET /customers/{id}`
pub async fn get_customer(store: Arc<CustomerStore>, req: Request) -> Result<Json<Customer>, ApiError> {
    let id = customer_id(&req)?;
    let customer = store.get(id).await.ok_or_else(|| ApiError::customer_not_found(id))?;
    Ok(Json(customer))
}

/// `PATCH /customers/{id}`
///
/// Existence is checked before the body is read. The whole payload goes to
/// the store, so writable attributes outside the updatable set (such as
/// `first_name`) are applied too once at least one updatable field is named.
pub async fn update_customer(
    store: Arc<CustomerStore>,
    mut req: Request,
) -> Result<Json<Customer>, ApiError> {
    let id = customer_id(&req)?;
    if !store.contains(id).await {
        return Err(ApiError::customer_not_found(id));
    }

    let payload = read_json_object(&mut req).await?;

    let violations = validate_update(&payload);
    if !violations.is_empty() {
        debug!(id, ?violations, "rejecting customer update");
        return Err(ApiError::Validation(violations));
    }

    let provided: Vec<&str> = payload
        .keys()
        .map(String::as_str)
        .filter(|key| Field::from_key(key).is_some_and(Field::is_updatable))
        .collect();
    if provided.is_empty() {
        return Err(ApiError::bad_request(NO_UPDATABLE_FIELD));
    }

    let customer = store
        .update(id, &payload)
        .await
        .ok_or_else(|| ApiError::customer_not_found(id))?;
    info!(id, fields = ?provided, "customer updated");
    Ok(Json(customer))
}

/// `/customers/` with an empty id segment.
pub async fn missing_id(_req: Request) -> ApiError {
    ApiError::bad_request("Invalid customer ID")
}

/// Parses the `{id}` path segment: ASCII digits only, fits in `u64`, at least 1.
fn customer_id(req: &Request) -> Result<u64, ApiError> {
    let raw = req.param("id").unwrap_or_default();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::bad_request("Invalid customer ID"));
    }
    let id: u64 = raw
        .parse()
        .map_err(|_| ApiError::bad_request("Customer ID must be a number"))?;
    if id < 1 {
        return Err(ApiError::bad_request("Customer ID must be a positive integer"));
    }
    Ok(id)
}

/// Reads the body as a JSON object, honouring the declared `Content-Length`.
async fn read_json_object(req: &mut Request) -> Result<Map<String, Value>, ApiError> {
    let declared = req.content_length().map_err(read_error)?;
    if declared.unwrap_or(0) == 0 {
        return Err(ApiError::bad_request("No JSON data provided"));
    }

    let body = req.body_bytes().await.map_err(read_error)?;
    let text = std::str::from_utf8(&body).map_err(read_error)?;

    match serde_json::from_str(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) | Err(_) => Err(ApiError::bad_request("Invalid JSON data")),
    }
}

fn read_error(cause: impl std::fmt::Display) -> ApiError {
    ApiError::bad_request(format!("Error reading request data: {cause}"))
}
