//! HTTP methods used by endpoint path shapes.

use strum::{Display, EnumIter, EnumString};

/// HTTP method an endpoint shape is sent with.
///
/// ## Examples
///
/// ```rust
/// use typedapi::RestMethod;
///
/// let parsed: RestMethod = "PUT".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Put);
/// assert_eq!(parsed.to_string(), "PUT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl RestMethod {
    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
