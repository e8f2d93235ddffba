//! `indices.get_mapping`: read the mappings of one or more indices.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::builder::RequestBuilder;
use crate::endpoint::{Endpoint, ParamSet, PathShape};
use crate::error::{ApiError, BuildError};
use crate::method::RestMethod;
use crate::params::{format_bool, format_duration, join_list};
use crate::transport::{Transport, TransportRequest, TransportResponse};
use crate::types::TypeMapping;
use crate::types::enums::ExpandWildcard;

/// Descriptor for `GET /_mapping` and `GET /{index}/_mapping`.
#[derive(Debug, Clone, Copy)]
pub struct GetMappingEndpoint;

impl GetMappingEndpoint {
    /// Bit of the optional `index` path parameter.
    pub const INDEX: ParamSet = ParamSet::bit(0);
}

impl Endpoint for GetMappingEndpoint {
    const NAME: &'static str = "indices.get_mapping";
    const SHAPES: &'static [PathShape] = &[
        PathShape::new(ParamSet::EMPTY, RestMethod::Get, "/_mapping"),
        PathShape::new(Self::INDEX, RestMethod::Get, "/{index}/_mapping"),
    ];
    const HAS_BODY: bool = false;
    type Body = ();
    type Response = GetMappingResponse;
}

/// Mappings keyed by concrete index name.
pub type GetMappingResponse = BTreeMap<String, IndexMappingRecord>;

/// Mappings of one index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexMappingRecord {
    /// The index mapping; empty when none is defined.
    #[serde(default)]
    pub mappings: TypeMapping,
}

/// Request builder for `indices.get_mapping`.
///
/// Without an index the request covers every index in the cluster.
pub struct GetMapping<T> {
    inner: RequestBuilder<GetMappingEndpoint, T>,
}

impl<T> GetMapping<T> {
    /// Creates a builder targeting every index.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            inner: RequestBuilder::new(transport),
        }
    }

    fn map(
        self,
        f: impl FnOnce(RequestBuilder<GetMappingEndpoint, T>) -> RequestBuilder<GetMappingEndpoint, T>,
    ) -> Self {
        Self { inner: f(self.inner) }
    }

    /// Index names or patterns, comma separated.
    pub fn index(self, index: impl Into<String>) -> Self {
        self.map(|b| b.path_param("index", GetMappingEndpoint::INDEX, index))
    }

    /// Sets a request header; names compare case-insensitively.
    pub fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map(|b| b.header(name, value))
    }

    /// Whether a wildcard or `_all` expression matching no index is accepted.
    pub fn allow_no_indices(self, allow: bool) -> Self {
        self.map(|b| b.query("allow_no_indices", format_bool(allow)))
    }

    /// Index states that wildcard expressions expand to, comma joined.
    pub fn expand_wildcards(self, states: impl IntoIterator<Item = ExpandWildcard>) -> Self {
        self.map(|b| b.query("expand_wildcards", join_list(states)))
    }

    /// Skips missing or closed indices instead of failing.
    pub fn ignore_unavailable(self, ignore: bool) -> Self {
        self.map(|b| b.query("ignore_unavailable", format_bool(ignore)))
    }

    /// Reads cluster state from the local node instead of the master.
    pub fn local(self, local: bool) -> Self {
        self.map(|b| b.query("local", format_bool(local)))
    }

    /// How long to wait for the master node.
    pub fn master_timeout(self, timeout: Duration) -> Self {
        self.map(|b| b.query("master_timeout", format_duration(timeout)))
    }

    /// Includes server stack traces in error responses.
    pub fn error_trace(self, enabled: bool) -> Self {
        self.map(|b| b.query("error_trace", format_bool(enabled)))
    }

    /// Response fields to keep, as dotted paths.
    pub fn filter_path<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.map(|b| b.query("filter_path", join_list(paths)))
    }

    /// Returns sizes and durations in human-readable form.
    pub fn human(self, enabled: bool) -> Self {
        self.map(|b| b.query("human", format_bool(enabled)))
    }

    /// Asks the server to indent the JSON response.
    pub fn pretty(self, enabled: bool) -> Self {
        self.map(|b| b.query("pretty", format_bool(enabled)))
    }

    /// Builds the request without sending it.
    ///
    /// ## Errors
    ///
    /// Fails if the index is `.`, `..` or empty, or a header is invalid.
    pub fn http_request(&self) -> Result<TransportRequest, BuildError> {
        self.inner.build()
    }
}

impl<T: Transport> GetMapping<T> {
    /// Sends the request and returns the undecoded response.
    ///
    /// ## Errors
    ///
    /// Returns an error if the request cannot be built or sent.
    pub async fn perform(&self) -> Result<TransportResponse, ApiError> {
        self.inner.perform().await
    }

    /// Sends the request and decodes the mappings.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Server`] for an error document, plus everything
    /// [`perform`](Self::perform) returns.
    pub async fn execute(&self) -> Result<GetMappingResponse, ApiError> {
        self.inner.execute().await
    }
}

impl<T> Clone for GetMapping<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for GetMapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GetMapping").field(&self.inner).finish()
    }
}
