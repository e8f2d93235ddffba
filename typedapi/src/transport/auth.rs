//! Credentials applied by [`ReqwestTransport`](super::ReqwestTransport).

use std::fmt;

/// How the transport authenticates.
///
/// Applied only when the request does not already carry an
/// `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP basic authentication.
    Basic {
        /// Account name.
        username: String,
        /// Account password.
        password: String,
    },
    /// `Authorization: ApiKey <encoded>` with a base64 `id:api_key` value.
    ApiKey(String),
    /// `Authorization: Bearer <token>`.
    Bearer(String),
}

impl Credentials {
    /// HTTP basic authentication with a username and password.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// An API key, already base64-encoded as `id:api_key`.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use typedapi::Credentials;
    ///
    /// let credentials = Credentials::api_key("VnVhQ2ZHY0JDZGJrUW0tZTVhT3g6dWkybHAyYXhUTm1zeWFrdzl0dk5udw==");
    /// assert_eq!(format!("{credentials:?}"), "ApiKey(\"<redacted>\")");
    /// ```
    pub fn api_key(encoded: impl Into<String>) -> Self {
        Self::ApiKey(encoded.into())
    }

    /// A bearer token, such as an OAuth2 access token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Applies these credentials to a reqwest request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::ApiKey(encoded) => {
                request.header(reqwest::header::AUTHORIZATION, format!("ApiKey {encoded}"))
            }
            Self::Bearer(token) => request.bearer_auth(token),
        }
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
        }
    }
}
