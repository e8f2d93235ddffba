use serde::{Deserialize, Serialize};

/// How a mapping treats fields it has not seen before.
///
/// Servers report the boolean settings as JSON `true`/`false`, so those are
/// accepted alongside strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "DynamicRepr", into = "String")]
pub enum DynamicMapping {
    /// Reject documents with unmapped fields.
    Strict,
    /// Map new fields as runtime fields.
    Runtime,
    /// Add new fields to the mapping.
    True,
    /// Ignore new fields.
    False,
    /// A tag this crate does not know, kept verbatim.
    Unknown(String),
}

tag_enum!(DynamicMapping {
    Strict => "strict",
    Runtime => "runtime",
    True => "true",
    False => "false",
});

impl From<bool> for DynamicMapping {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DynamicRepr {
    Flag(bool),
    Tag(String),
}

impl From<DynamicRepr> for DynamicMapping {
    fn from(repr: DynamicRepr) -> Self {
        match repr {
            DynamicRepr::Flag(flag) => Self::from(flag),
            DynamicRepr::Tag(tag) => Self::from(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_json_booleans() {
        let dynamic: DynamicMapping = serde_json::from_str("true").unwrap();
        assert_eq!(dynamic, DynamicMapping::True);

        let dynamic: DynamicMapping = serde_json::from_str("false").unwrap();
        assert_eq!(dynamic, DynamicMapping::False);
    }

    #[test]
    fn accepts_strings() {
        let dynamic: DynamicMapping = serde_json::from_str("\"Strict\"").unwrap();
        assert_eq!(dynamic, DynamicMapping::Strict);
        assert_eq!(serde_json::to_string(&dynamic).unwrap(), "\"strict\"");
    }
}
