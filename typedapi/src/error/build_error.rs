//! Errors raised while turning a builder into a request.

use thiserror::Error;

/// Boxed error returned by deferred body steps.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors detected before any network I/O.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The supplied path parameters match none of the endpoint's shapes.
    #[error("cannot build path for {endpoint}, check for missing path parameters")]
    MissingPathParameters {
        /// API name of the endpoint.
        endpoint: &'static str,
    },

    /// The structured body could not be serialized to JSON.
    #[error("could not serialise request for {endpoint}: {source}")]
    Serialize {
        /// API name of the endpoint.
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A deferred body step failed. The step's error is kept as-is.
    #[error("{0}")]
    Deferred(BoxError),

    /// A header name or value set on the builder is not valid HTTP.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl BuildError {
    /// Returns `true` if the path could not be rendered.
    pub fn is_missing_path(&self) -> bool {
        matches!(self, Self::MissingPathParameters { .. })
    }
}
