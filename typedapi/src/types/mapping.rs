//! Index mapping definitions.
//!
//! [`TypeMapping`] is both the body of `indices.put_mapping` and the
//! `mappings` object returned by `indices.get_mapping`. Every field is
//! optional and omitted from JSON when unset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Metadata;
use super::enums::{DynamicMapping, SourceFieldMode};

/// Runtime fields keyed by field name.
pub type RuntimeFields = BTreeMap<String, RuntimeField>;

/// The mapping of one index: how its documents and fields are indexed.
///
/// Unset settings are omitted when serialized, so a mapping update only
/// touches what it names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMapping {
    /// Map date-like strings as `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_detection: Option<bool>,
    /// Handling of unmapped fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<DynamicMapping>,
    /// Formats tried by date detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_date_formats: Option<Vec<String>>,
    /// Named rules for new fields, tried in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_templates: Option<Vec<BTreeMap<String, DynamicTemplate>>>,
    /// The `_field_names` metadata field.
    #[serde(rename = "_field_names", default, skip_serializing_if = "Option::is_none")]
    pub field_names: Option<FieldNamesField>,
    /// Application metadata stored as `_meta`.
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
    /// Map numeric strings as numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_detection: Option<bool>,
    /// Field mappings keyed by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Property>>,
    /// The `_routing` metadata field.
    #[serde(rename = "_routing", default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<RoutingField>,
    /// Fields computed at query time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<RuntimeFields>,
    /// The `_source` metadata field.
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceField>,
    /// `false` stores the object without indexing it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// A field mapping.
///
/// Only the structure shared by every field type is modelled; type-specific
/// settings such as `format` or `analyzer` live in `options`.
///
/// ## Examples
///
/// ```rust
/// use typedapi::types::Property;
///
/// let title = Property::text().with_field("raw", Property::keyword());
/// let json = serde_json::to_value(&title).unwrap();
/// assert_eq!(json["fields"]["raw"]["type"], "keyword");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Field type, such as `text` or `keyword`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Sub-fields of an `object` or `nested` property.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
    /// Multi-fields indexing the same value differently.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Property>,
    /// Type-specific settings, flattened into the property.
    #[serde(flatten)]
    pub options: BTreeMap<String, Value>,
}

impl Property {
    /// Creates a property of the given field type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// A `keyword` property.
    pub fn keyword() -> Self {
        Self::new("keyword")
    }

    /// A `text` property.
    pub fn text() -> Self {
        Self::new("text")
    }

    /// A `date` property.
    pub fn date() -> Self {
        Self::new("date")
    }

    /// A `long` property.
    pub fn long() -> Self {
        Self::new("long")
    }

    /// A `boolean` property.
    pub fn boolean() -> Self {
        Self::new("boolean")
    }

    /// An `object` property with the given sub-fields.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Property)>,
        K: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Self::new("object")
        }
    }

    /// Adds a multi-field.
    pub fn with_field(mut self, name: impl Into<String>, field: Property) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Sets a type-specific option such as `format` or `index`.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// A rule mapping newly seen fields by name or detected type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicTemplate {
    /// Mapping given to a matched field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<Property>,
    /// Runtime field created for a matched field instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Property>,
    /// Pattern the field name must match.
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_name: Option<String>,
    /// Pattern the field name must not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmatch: Option<String>,
    /// Pattern the dotted field path must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_match: Option<String>,
    /// Pattern the dotted field path must not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_unmatch: Option<String>,
    /// Detected JSON type to match, such as `string` or `long`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_mapping_type: Option<String>,
    /// `simple` (the default) or `regex`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,
}

/// Settings of the `_field_names` metadata field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNamesField {
    /// Whether `_field_names` is indexed.
    pub enabled: bool,
}

/// Settings of the `_routing` metadata field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingField {
    /// Reject documents indexed without a routing value.
    pub required: bool,
}

/// Settings of the `_source` metadata field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceField {
    /// `false` drops `_source` entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// How `_source` is kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<SourceFieldMode>,
    /// Compress the stored `_source`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
    /// Size above which `_source` is compressed, such as `100b`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress_threshold: Option<String>,
    /// Field patterns kept in `_source`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    /// Field patterns removed from `_source`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

/// A field computed at query time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeField {
    /// Field type such as `keyword` or `long`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Script emitting the field's values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    /// Date format, for `date` runtime fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl RuntimeField {
    /// A runtime field of the given type without a script.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Sets an inline painless script.
    pub fn with_script(mut self, source: impl Into<String>) -> Self {
        self.script = Some(Script::inline(source));
        self
    }
}

/// A script, inline or stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Inline script source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Id of a stored script, used instead of `source`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Script language; the server defaults to `painless`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Values bound to `params` inside the script.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,
}

impl Script {
    /// An inline painless script.
    pub fn inline(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }
}
