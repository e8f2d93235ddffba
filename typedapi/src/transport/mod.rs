//! The transport seam.
//!
//! Request builders never open connections. They produce a
//! [`TransportRequest`] (plain data: method, relative path, query, headers,
//! body) and hand it to a [`Transport`], which owns connection handling, TLS
//! and any retry policy and returns a [`TransportResponse`] with the body
//! fully read.
//!
//! [`ReqwestTransport`] is the default implementation. Tests and embedders
//! can supply their own.

mod auth;
mod http;

use std::future::Future;

use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::error::TransportError;
use crate::method::RestMethod;

pub use auth::Credentials;
pub use http::{ReqwestTransport, ReqwestTransportBuilder};

/// Versioned media type used for `Content-Type` and `Accept` defaults.
pub const COMPATIBLE_MEDIA_TYPE: &str = "application/vnd.elasticsearch+json;compatible-with=8";

/// A fully built request, described as plain data.
///
/// `path` is already percent-encoded and `query` is already form-encoded;
/// the transport only supplies scheme and host.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: RestMethod,
    /// Encoded path, starting with `/`.
    pub path: String,
    /// Encoded query string without the leading `?`.
    pub query: Option<String>,
    /// Request headers, defaults included.
    pub headers: HeaderMap,
    /// Serialized body; empty when there is none.
    pub body: Bytes,
}

impl TransportRequest {
    /// Returns `path?query`, or just the path when there is no query.
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }

    /// Returns a header value as text, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A response with its body fully read.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Bytes,
}

impl TransportResponse {
    /// Creates a response with no headers.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Statuses below 299 are decoded as the endpoint's success type.
    pub fn is_success(&self) -> bool {
        self.status < 299
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations must not interpret the status code: error statuses are
/// returned as ordinary responses and decoded by the caller.
///
/// ## Examples
///
/// ```rust
/// use typedapi::{Transport, TransportError, TransportRequest, TransportResponse};
///
/// struct Canned;
///
/// impl Transport for Canned {
///     async fn perform(
///         &self,
///         _request: TransportRequest,
///     ) -> Result<TransportResponse, TransportError> {
///         Ok(TransportResponse::new(200, r#"{"acknowledged":true}"#))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    fn perform(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
