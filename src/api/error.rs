//! Route-level failures and their JSON rendering.

use thiserror::Error;
use tracing::error;

use crate::error::BoxError;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// A request the service refuses, rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Logged with its cause; the client only sees the generic message.
    #[error("Internal server error")]
    Internal(#[source] BoxError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn customer_not_found(id: u64) -> Self {
        Self::NotFound(format!("Customer with ID {id} not found"))
    }

    pub fn internal(cause: impl Into<BoxError>) -> Self {
        Self::Internal(cause.into())
    }

    pub fn status(&self) -> Status {
        match self {
            Self::BadRequest(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Validation(_) => Status::UnprocessableContent,
            Self::Internal(_) => Status::InternalServerError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(cause) = &self {
            error!(error = %cause, "internal error while handling request");
        }
        Response::error(self.status(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let res = ApiError::customer_not_found(999).into_response();
        assert_eq!(res.status(), Status::NotFound);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["error"], "Customer with ID 999 not found");
    }

    #[test]
    fn internal_errors_hide_their_cause() {
        let res = ApiError::internal("serializer failed").into_response();
        assert_eq!(res.status(), Status::InternalServerError);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[test]
    fn validation_messages_are_joined() {
        let err = ApiError::Validation(vec!["a is bad".into(), "b is bad".into()]);
        assert_eq!(err.to_string(), "Validation error: a is bad, b is bad");
        assert_eq!(err.status(), Status::UnprocessableContent);
    }
}
