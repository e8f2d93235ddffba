//! Transport configuration errors.

use thiserror::Error;

/// Errors raised while configuring a [`ReqwestTransport`](crate::ReqwestTransport).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("Base URL cannot be a base: {0}")]
    CannotBeABase(String),

    /// A default header name or value is not valid HTTP.
    #[error("Invalid default header {name:?}: {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
