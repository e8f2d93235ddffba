//! Layered error types for request building and dispatch.
//!
//! - [`ApiError`] - Top-level error returned by `perform` and `execute`
//! - [`BuildError`] - Failures detected before any I/O
//! - [`TransportError`] - Network-level failures reported by a transport
//! - [`ConfigError`] - Invalid transport configuration
//!
//! A well-formed error response from the server is not a defect; it is
//! returned as [`ApiError::Server`] carrying an
//! [`ElasticsearchError`](crate::types::ElasticsearchError).

mod api_error;
mod build_error;
mod config_error;
mod transport_error;

pub use api_error::ApiError;
pub use build_error::{BoxError, BuildError};
pub use config_error::ConfigError;
pub use transport_error::TransportError;
