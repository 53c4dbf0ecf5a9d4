//! Infrastructure error type.

use thiserror::Error;

/// Boxed error produced by a request body stream.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type returned by the server's fallible operations.
///
/// Application-level failures (400, 404, 422) are expressed as
/// [`ApiError`](crate::api::ApiError) values and rendered as responses. This
/// type surfaces infrastructure failures: binding a port, accepting a
/// connection, or reading a request body off the wire.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Body(#[source] BoxError),

    #[error("invalid content-length header")]
    ContentLength,
}
