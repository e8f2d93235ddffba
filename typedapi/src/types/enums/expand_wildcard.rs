use serde::{Deserialize, Serialize};

/// Which index states a wildcard expression expands to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpandWildcard {
    /// Every index, including hidden ones.
    All,
    /// Open indices.
    Open,
    /// Closed indices.
    Closed,
    /// Hidden indices; combine with `Open` or `Closed`.
    Hidden,
    /// Wildcards are not accepted.
    None,
    /// A tag this crate does not know, kept verbatim.
    Unknown(String),
}

tag_enum!(ExpandWildcard {
    All => "all",
    Open => "open",
    Closed => "closed",
    Hidden => "hidden",
    None => "none",
});
