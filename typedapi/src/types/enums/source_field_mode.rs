use serde::{Deserialize, Serialize};

/// Storage mode of the `_source` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceFieldMode {
    /// `_source` is not kept.
    Disabled,
    /// The original JSON is stored as sent.
    Stored,
    /// `_source` is rebuilt from doc values on read.
    Synthetic,
    /// A tag this crate does not know, kept verbatim.
    Unknown(String),
}

tag_enum!(SourceFieldMode {
    Disabled => "disabled",
    Stored => "stored",
    Synthetic => "synthetic",
});
