//! Cross-cutting response and logging concerns.
//!
//! Both layers are applied by [`Router::handle`](crate::Router::handle), so
//! every response (including 404s and 500s) passes through them.

pub(crate) mod cors;
pub(crate) mod trace;
