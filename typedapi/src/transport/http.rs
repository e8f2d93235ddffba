//! reqwest-backed [`Transport`] with builder-style configuration.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;
use url::Url;

use super::{Credentials, Transport, TransportRequest, TransportResponse};
use crate::error::{ConfigError, TransportError};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring a [`ReqwestTransport`].
#[derive(Debug)]
pub struct ReqwestTransportBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    credentials: Option<Credentials>,
}

impl ReqwestTransportBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            credentials: None,
        }
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request unless the request sets it.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidHeader {
            name: name.as_ref().to_string(),
            reason,
        };
        let header_name =
            HeaderName::try_from(name.as_ref()).map_err(|e| invalid(e.to_string()))?;
        let header_value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| invalid(e.to_string()))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Sets the credentials applied to requests without an `Authorization` header.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Builds the [`ReqwestTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL cannot carry a path or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<ReqwestTransport, ConfigError> {
        if self.base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(self.base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(ReqwestTransport {
            client,
            base_url: self.base_url,
            credentials: self.credentials,
        })
    }
}

/// Sends [`TransportRequest`]s with a pooled `reqwest::Client`.
///
/// The request path is appended to the base URL's own path, so a base of
/// `https://proxy.example.com/search` sends `/logs/_mapping` to
/// `https://proxy.example.com/search/logs/_mapping`.
///
/// ## Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use typedapi::{Credentials, ReqwestTransport};
///
/// let transport = ReqwestTransport::builder("https://localhost:9200".parse()?)
///     .timeout(Duration::from_secs(10))
///     .credentials(Credentials::basic("elastic", "changeme"))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl ReqwestTransport {
    /// Creates a new builder for the given base URL.
    pub fn builder(base_url: Url) -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::new(base_url)
    }

    /// Creates a transport with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        Self::builder(base_url).build()
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a request's path and query against the base URL.
    pub fn url_for(&self, request: &TransportRequest) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{}", request.path));
        url.set_query(request.query.as_deref());
        url
    }
}

impl Transport for ReqwestTransport {
    async fn perform(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = self.url_for(&request);
        debug!(%url, method = %request.method, "sending request");

        let mut builder = self.client.request(request.method.to_reqwest(), url);

        let has_authorization = request.headers.contains_key(AUTHORIZATION);
        if let Some(credentials) = self.credentials.as_ref().filter(|_| !has_authorization) {
            builder = credentials.apply(builder);
        }

        builder = builder.headers(request.headers);
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::method::RestMethod;

    fn request(path: &str, query: Option<&str>) -> TransportRequest {
        TransportRequest {
            method: RestMethod::Get,
            path: path.to_string(),
            query: query.map(str::to_string),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    fn transport(base: &str) -> ReqwestTransport {
        ReqwestTransport::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn url_for_root_base() {
        let url = transport("http://localhost:9200").url_for(&request("/logs/_mapping", Some("pretty=true")));
        assert_eq!(url.as_str(), "http://localhost:9200/logs/_mapping?pretty=true");
    }

    #[test]
    fn url_for_keeps_base_path_prefix() {
        let with_slash = transport("https://proxy.example.com/search/").url_for(&request("/_mapping", None));
        assert_eq!(with_slash.as_str(), "https://proxy.example.com/search/_mapping");

        let without_slash = transport("https://proxy.example.com/search").url_for(&request("/_mapping", None));
        assert_eq!(without_slash.as_str(), "https://proxy.example.com/search/_mapping");
    }

    #[test]
    fn url_for_keeps_percent_encoding() {
        let url = transport("http://localhost:9200").url_for(&request("/a%2Fb/_mapping", None));
        assert_eq!(url.path(), "/a%2Fb/_mapping");
    }

    #[test]
    fn url_for_keeps_escaped_index_in_place() {
        use crate::endpoint::render_path;
        use std::collections::BTreeMap;

        let transport = transport("http://localhost:9200");
        let values = BTreeMap::from([("index", "a\\b".to_string())]);
        let path = render_path("/{index}/_mapping", &values).unwrap();
        let url = transport.url_for(&request(&path, None));
        assert_eq!(url.as_str(), "http://localhost:9200/a%5Cb/_mapping");

        let dots = BTreeMap::from([("index", "..".to_string())]);
        assert_eq!(render_path("/{index}/_mapping", &dots), None);
    }

    #[test]
    fn invalid_default_header_is_rejected() {
        let result = ReqwestTransport::builder(Url::parse("http://localhost:9200").unwrap())
            .default_header("bad header", "value");
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[test]
    fn cannot_be_a_base_is_rejected() {
        let result = ReqwestTransport::new(Url::parse("mailto:ops@example.com").unwrap());
        assert!(matches!(result, Err(ConfigError::CannotBeABase(_))));
    }
}
