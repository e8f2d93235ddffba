//! Closed sets of wire tags that still accept values this crate does not know.
//!
//! Every enum here has one variant per documented tag plus `Unknown(String)`.
//! Parsing never fails: matching ignores ASCII case and `"` characters, and
//! unmatched input is kept verbatim. Two values are equal when their tags
//! are equal, so `Unknown("word".into()) == BoundaryScanner::Word`.

/// Generates the string conversions, comparisons and serde glue shared by
/// every tag enum. The enum itself, with its `Unknown(String)` variant, is
/// declared by the caller.
macro_rules! tag_enum {
    ($name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $name {
            /// Every documented tag, in declaration order.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire tag.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            /// Returns `false` for values kept as `Unknown`.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                let tag = crate::types::enums::normalize(raw);
                $(
                    if tag.eq_ignore_ascii_case($tag) {
                        return Self::$variant;
                    }
                )+
                Self::Unknown(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::from(raw.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }
    };
}

mod boundary_scanner;
mod dynamic_mapping;
mod expand_wildcard;
mod source_field_mode;
mod training_priority;

pub use boundary_scanner::BoundaryScanner;
pub use dynamic_mapping::DynamicMapping;
pub use expand_wildcard::ExpandWildcard;
pub use source_field_mode::SourceFieldMode;
pub use training_priority::TrainingPriority;

/// Strips `"` characters so quoted JSON text matches its bare tag.
fn normalize(raw: &str) -> std::borrow::Cow<'_, str> {
    if raw.contains('"') {
        std::borrow::Cow::Owned(raw.replace('"', ""))
    } else {
        std::borrow::Cow::Borrowed(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_quotes_only() {
        assert_eq!(normalize("\"word\""), "word");
        assert_eq!(normalize("Word"), "Word");
    }
}
