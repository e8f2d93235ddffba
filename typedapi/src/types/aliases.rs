//! Named aliases over plain containers, each with a small builder.

use std::collections::BTreeMap;

use serde_json::Value;

/// Sort values of a search hit, used to resume with `search_after`.
pub type SortResults = Vec<String>;

/// Free-form metadata, such as a mapping's `_meta` object.
pub type Metadata = BTreeMap<String, Value>;

/// A list of field names.
pub type Fields = Vec<String>;

/// Builds a [`SortResults`].
///
/// ```rust
/// use typedapi::types::SortResultsBuilder;
///
/// let sort = SortResultsBuilder::new()
///     .sort_results(vec!["1700000000000".to_string(), "doc-42".to_string()])
///     .build();
/// assert_eq!(sort, ["1700000000000", "doc-42"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SortResultsBuilder {
    value: SortResults,
}

impl SortResultsBuilder {
    /// Starts from an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole value.
    pub fn sort_results(mut self, value: SortResults) -> Self {
        self.value = value;
        self
    }

    /// Returns the built value.
    pub fn build(self) -> SortResults {
        self.value
    }
}

/// Builds a [`Metadata`] map.
#[derive(Debug, Clone, Default)]
pub struct MetadataBuilder {
    value: Metadata,
}

impl MetadataBuilder {
    /// Starts from an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole value.
    pub fn metadata(mut self, value: Metadata) -> Self {
        self.value = value;
        self
    }

    /// Returns the built value.
    pub fn build(self) -> Metadata {
        self.value
    }
}

/// Builds a [`Fields`] list.
#[derive(Debug, Clone, Default)]
pub struct FieldsBuilder {
    value: Fields,
}

impl FieldsBuilder {
    /// Starts from an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole value.
    pub fn fields(mut self, value: Fields) -> Self {
        self.value = value;
        self
    }

    /// Returns the built value.
    pub fn build(self) -> Fields {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sort_results_returns_what_was_set() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(SortResultsBuilder::new().sort_results(values.clone()).build(), values);
    }

    #[test]
    fn unset_builders_yield_empty_containers() {
        assert!(SortResultsBuilder::new().build().is_empty());
        assert!(MetadataBuilder::new().build().is_empty());
        assert!(FieldsBuilder::new().build().is_empty());
    }

    #[test]
    fn last_set_wins() {
        let fields = FieldsBuilder::new()
            .fields(vec!["first".to_string()])
            .fields(vec!["second".to_string()])
            .build();
        assert_eq!(fields, ["second"]);
    }

    #[test]
    fn metadata_returns_what_was_set() {
        let meta = Metadata::from([("owner".to_string(), json!("search-team"))]);
        assert_eq!(MetadataBuilder::new().metadata(meta.clone()).build(), meta);
    }
}
