//! Entry point that groups endpoints by namespace.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::error::ConfigError;
use crate::indices::Indices;
use crate::transport::ReqwestTransport;

/// Typed API client over a shared [`Transport`](crate::Transport).
///
/// Cloning is cheap; clones share the transport.
///
/// ## Examples
///
/// ```rust,ignore
/// use typedapi::Client;
///
/// let client = Client::connect("http://localhost:9200")?;
/// let mappings = client.indices().get_mapping().index("logs").execute().await?;
/// ```
pub struct Client<T> {
    transport: Arc<T>,
}

impl<T> Client<T> {
    /// Wraps a transport.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use typedapi::{Client, ReqwestTransport};
    ///
    /// let transport = ReqwestTransport::new("http://localhost:9200".parse().unwrap()).unwrap();
    /// let client = Client::new(transport);
    /// assert_eq!(client.transport().base_url().as_str(), "http://localhost:9200/");
    /// ```
    pub fn new(transport: T) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    /// Wraps a transport that is already shared.
    pub fn from_arc(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Returns the shared transport.
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Index management endpoints.
    pub fn indices(&self) -> Indices<T> {
        Indices::new(Arc::clone(&self.transport))
    }
}

impl Client<ReqwestTransport> {
    /// Connects to `base_url` with a default [`ReqwestTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// constructed.
    pub fn connect(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url)?;
        Ok(Self::new(ReqwestTransport::new(url)?))
    }
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
