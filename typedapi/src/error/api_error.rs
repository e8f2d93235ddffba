//! Top-level API error type.

use thiserror::Error;

use super::{BuildError, TransportError};
use crate::types::ElasticsearchError;

/// Top-level error type for dispatching and decoding a request.
///
/// ## Examples
///
/// ```rust,ignore
/// use typedapi::ApiError;
///
/// match client.indices().put_mapping("logs").execute().await {
///     Ok(response) => assert!(response.acknowledged),
///     Err(ApiError::Server(err)) => eprintln!("rejected with {}: {err}", err.status),
///     Err(other) => eprintln!("request failed: {other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built; nothing was sent.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The transport failed to complete the exchange.
    #[error("an error happened during the {endpoint} query execution: {source}")]
    Transport {
        /// API name of the endpoint.
        endpoint: &'static str,
        #[source]
        source: TransportError,
    },

    /// The response body did not match the expected shape.
    #[error("could not decode {endpoint} response (HTTP {status}): {source}")]
    Decode {
        /// API name of the endpoint.
        endpoint: &'static str,
        /// HTTP status of the undecodable response.
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The server answered with a well-formed error document.
    #[error(transparent)]
    Server(#[from] ElasticsearchError),
}

impl ApiError {
    /// Returns the HTTP status if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server(err) => Some(err.status),
            Self::Decode { status, .. } => Some(*status),
            Self::Build(_) | Self::Transport { .. } => None,
        }
    }

    /// Returns the server-reported error, if that is what this is.
    pub fn server_error(&self) -> Option<&ElasticsearchError> {
        match self {
            Self::Server(err) => Some(err),
            _ => None,
        }
    }
}
