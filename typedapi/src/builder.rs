//! The generic request engine shared by every endpoint.
//!
//! A [`RequestBuilder`] accumulates path parameters, query parameters,
//! headers and a body, then renders them into a [`TransportRequest`]. It
//! never touches the network itself; [`perform`](RequestBuilder::perform)
//! hands the request to the builder's [`Transport`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::{Span, debug, instrument};
use url::form_urlencoded;

use crate::endpoint::{Endpoint, ParamSet, render_path};
use crate::error::{ApiError, BoxError, BuildError};
use crate::response::decode;
use crate::transport::{COMPATIBLE_MEDIA_TYPE, Transport, TransportRequest, TransportResponse};

/// A body transformation run just before serialization.
pub type DeferredStep<B> = Arc<dyn Fn(B) -> Result<B, BoxError> + Send + Sync>;

/// Accumulates the parts of one request for endpoint `E`.
///
/// Setters consume and return the builder. [`build`](Self::build),
/// [`perform`](Self::perform) and [`execute`](Self::execute) borrow it, so
/// the same builder can be sent any number of times.
///
/// ## Examples
///
/// ```rust,ignore
/// use typedapi::indices::PutMappingEndpoint;
/// use typedapi::RequestBuilder;
///
/// let request = RequestBuilder::<PutMappingEndpoint, _>::new(transport)
///     .path_param("index", PutMappingEndpoint::INDEX, "logs")
///     .query("timeout", "30s")
///     .build()?;
/// assert_eq!(request.path, "/logs/_mapping");
/// ```
pub struct RequestBuilder<E: Endpoint, T> {
    transport: Arc<T>,
    headers: Vec<(String, String)>,
    query: BTreeMap<String, String>,
    path_params: BTreeMap<&'static str, String>,
    params: ParamSet,
    body: Option<E::Body>,
    raw: Option<Bytes>,
    deferred: Vec<DeferredStep<E::Body>>,
}

impl<E: Endpoint, T> RequestBuilder<E, T> {
    /// Creates a builder with no parameters and, for endpoints that take
    /// one, a default body.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            headers: Vec::new(),
            query: BTreeMap::new(),
            path_params: BTreeMap::new(),
            params: ParamSet::EMPTY,
            body: E::HAS_BODY.then(<E::Body as Default>::default),
            raw: None,
            deferred: Vec::new(),
        }
    }

    /// API name of the endpoint, e.g. `indices.put_mapping`.
    pub fn endpoint_name(&self) -> &'static str {
        E::NAME
    }

    /// Records a path parameter and marks its bit as supplied.
    pub fn path_param(mut self, name: &'static str, bit: ParamSet, value: impl Into<String>) -> Self {
        self.path_params.insert(name, value.into());
        self.params.insert(bit);
        self
    }

    /// Sets a query parameter, replacing any previous value for `key`.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets a header. Names compare case-insensitively; the last write wins.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Replaces the structured body.
    pub fn request(mut self, body: E::Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Edits the structured body in place, creating it if absent.
    pub fn with_body(mut self, edit: impl FnOnce(&mut E::Body)) -> Self {
        edit(self.body.get_or_insert_with(Default::default));
        self
    }

    /// Sends these bytes as the body instead of the structured body.
    pub fn raw(mut self, body: impl Into<Bytes>) -> Self {
        self.raw = Some(body.into());
        self
    }

    /// Appends a step that transforms the body at build time.
    ///
    /// Steps run in the order they were added, on a copy of the body. The
    /// first error aborts the build.
    pub fn deferred<F>(mut self, step: F) -> Self
    where
        F: Fn(E::Body) -> Result<E::Body, BoxError> + Send + Sync + 'static,
    {
        self.deferred.push(Arc::new(step));
        self
    }

    /// Renders the current state into a request without sending it.
    ///
    /// ## Errors
    ///
    /// - [`BuildError::Deferred`] if a deferred step fails
    /// - [`BuildError::Serialize`] if the body cannot be serialized
    /// - [`BuildError::MissingPathParameters`] if the supplied path
    ///   parameters match no path shape
    /// - [`BuildError::InvalidHeader`] if a header is not valid HTTP
    pub fn build(&self) -> Result<TransportRequest, BuildError> {
        let body = self.resolve_body()?;

        let payload = match (&self.raw, &body) {
            (Some(raw), _) => raw.clone(),
            (None, Some(body)) => serde_json::to_vec(body)
                .map(Bytes::from)
                .map_err(|source| BuildError::Serialize {
                    endpoint: E::NAME,
                    source,
                })?,
            (None, None) => Bytes::new(),
        };

        let missing = || BuildError::MissingPathParameters { endpoint: E::NAME };
        let shape = E::shape(self.params).ok_or_else(missing)?;
        let path = render_path(shape.template, &self.path_params).ok_or_else(missing)?;

        let query = (!self.query.is_empty()).then(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish()
        });

        let headers = self.header_map(!payload.is_empty())?;

        Ok(TransportRequest {
            method: shape.method,
            path,
            query,
            headers,
            body: payload,
        })
    }

    fn resolve_body(&self) -> Result<Option<E::Body>, BuildError> {
        // Body-less endpoints only send a body the caller set explicitly.
        if self.deferred.is_empty() || (!E::HAS_BODY && self.body.is_none()) {
            return Ok(self.body.clone());
        }

        let mut body = self.body.clone().unwrap_or_default();
        for step in &self.deferred {
            body = step(body).map_err(BuildError::Deferred)?;
        }
        Ok(Some(body))
    }

    fn header_map(&self, has_body: bool) -> Result<HeaderMap, BuildError> {
        let mut headers = HeaderMap::with_capacity(self.headers.len() + 2);

        for (name, value) in &self.headers {
            let invalid = |reason: String| BuildError::InvalidHeader {
                name: name.clone(),
                reason,
            };
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| invalid(e.to_string()))?;
            let header_value =
                HeaderValue::try_from(value.as_str()).map_err(|e| invalid(e.to_string()))?;
            headers.insert(header_name, header_value);
        }

        let compatible = HeaderValue::from_static(COMPATIBLE_MEDIA_TYPE);
        if has_body && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, compatible.clone());
        }
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, compatible);
        }

        Ok(headers)
    }
}

impl<E: Endpoint, T: Transport> RequestBuilder<E, T> {
    /// Builds the request and sends it, returning the raw response.
    ///
    /// Error statuses are not errors here; see [`execute`](Self::execute).
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Build`] if the request cannot be built, or
    /// [`ApiError::Transport`] if the exchange fails. Nothing is retried.
    #[instrument(
        name = "api_request",
        skip(self),
        fields(
            endpoint = E::NAME,
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    pub async fn perform(&self) -> Result<TransportResponse, ApiError> {
        let request = self.build()?;

        Span::current().record("http.method", request.method.to_string().as_str());
        Span::current().record("http.url", request.path_and_query().as_str());
        debug!(body_bytes = request.body.len(), "dispatching request");

        let response = self
            .transport
            .perform(request)
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: E::NAME,
                source,
            })?;

        Span::current().record("http.status_code", response.status);
        debug!(status = response.status, "response received");

        Ok(response)
    }

    /// Sends the request and decodes the response.
    ///
    /// ## Errors
    ///
    /// Everything [`perform`](Self::perform) returns, plus
    /// [`ApiError::Server`] for a well-formed error document and
    /// [`ApiError::Decode`] for a body of the wrong shape.
    pub async fn execute(&self) -> Result<E::Response, ApiError> {
        let response = self.perform().await?;
        decode(E::NAME, response)
    }
}

impl<E: Endpoint, T> Clone for RequestBuilder<E, T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            headers: self.headers.clone(),
            query: self.query.clone(),
            path_params: self.path_params.clone(),
            params: self.params,
            body: self.body.clone(),
            raw: self.raw.clone(),
            deferred: self.deferred.clone(),
        }
    }
}

impl<E: Endpoint, T> fmt::Debug for RequestBuilder<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("endpoint", &E::NAME)
            .field("path_params", &self.path_params)
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .field("raw_len", &self.raw.as_ref().map(Bytes::len))
            .field("deferred", &self.deferred.len())
            .finish_non_exhaustive()
    }
}
