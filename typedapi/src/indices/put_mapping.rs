//! `indices.put_mapping`: add fields to an index mapping or change
//! search-only settings of existing fields.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::builder::RequestBuilder;
use crate::endpoint::{Endpoint, ParamSet, PathShape};
use crate::error::{ApiError, BoxError, BuildError};
use crate::method::RestMethod;
use crate::params::{format_bool, format_duration, join_list};
use crate::transport::{Transport, TransportRequest, TransportResponse};
use crate::types::enums::{DynamicMapping, ExpandWildcard};
use crate::types::{
    DynamicTemplate, FieldNamesField, Metadata, Property, RoutingField, RuntimeFields,
    ShardStatistics, SourceField, TypeMapping,
};

/// Descriptor for `PUT /{index}/_mapping`.
#[derive(Debug, Clone, Copy)]
pub struct PutMappingEndpoint;

impl PutMappingEndpoint {
    /// Bit of the required `index` path parameter.
    pub const INDEX: ParamSet = ParamSet::bit(0);
}

impl Endpoint for PutMappingEndpoint {
    const NAME: &'static str = "indices.put_mapping";
    const SHAPES: &'static [PathShape] = &[PathShape::new(
        Self::INDEX,
        RestMethod::Put,
        "/{index}/_mapping",
    )];
    const HAS_BODY: bool = true;
    type Body = TypeMapping;
    type Response = PutMappingResponse;
}

/// Acknowledgement of a mapping update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutMappingResponse {
    /// Whether the master applied the update before the timeout.
    pub acknowledged: bool,
    /// Shard outcomes, reported by some versions.
    #[serde(rename = "_shards", default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<ShardStatistics>,
}

/// Request builder for `indices.put_mapping`.
///
/// ## Examples
///
/// ```rust,ignore
/// use typedapi::Client;
/// use typedapi::types::Property;
///
/// let client = Client::connect("http://localhost:9200")?;
/// let response = client
///     .indices()
///     .put_mapping("logs")
///     .property("message", Property::text())
///     .property("@timestamp", Property::date())
///     .timeout(std::time::Duration::from_secs(30))
///     .execute()
///     .await?;
/// assert!(response.acknowledged);
/// ```
pub struct PutMapping<T> {
    inner: RequestBuilder<PutMappingEndpoint, T>,
}

impl<T> PutMapping<T> {
    /// Creates a builder with no index set; [`index`](Self::index) is required.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            inner: RequestBuilder::new(transport),
        }
    }

    fn map(
        self,
        f: impl FnOnce(RequestBuilder<PutMappingEndpoint, T>) -> RequestBuilder<PutMappingEndpoint, T>,
    ) -> Self {
        Self { inner: f(self.inner) }
    }

    fn body(self, edit: impl FnOnce(&mut TypeMapping)) -> Self {
        self.map(|b| b.with_body(edit))
    }

    /// Target index names, comma separated. Wildcards are supported.
    pub fn index(self, index: impl Into<String>) -> Self {
        self.map(|b| b.path_param("index", PutMappingEndpoint::INDEX, index))
    }

    /// Sets a request header; names compare case-insensitively.
    pub fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map(|b| b.header(name, value))
    }

    /// Replaces the whole mapping body.
    pub fn request(self, mapping: TypeMapping) -> Self {
        self.map(|b| b.request(mapping))
    }

    /// Sends `body` verbatim instead of the structured mapping.
    pub fn raw(self, body: impl Into<Bytes>) -> Self {
        self.map(|b| b.raw(body))
    }

    /// Adds a step that rewrites the mapping at build time.
    pub fn deferred<F>(self, step: F) -> Self
    where
        F: Fn(TypeMapping) -> Result<TypeMapping, BoxError> + Send + Sync + 'static,
    {
        self.map(|b| b.deferred(step))
    }

    // Query parameters

    /// Whether a wildcard or `_all` expression matching no index is accepted.
    pub fn allow_no_indices(self, allow: bool) -> Self {
        self.map(|b| b.query("allow_no_indices", format_bool(allow)))
    }

    /// Index states that wildcard expressions expand to, comma joined.
    pub fn expand_wildcards(self, states: impl IntoIterator<Item = ExpandWildcard>) -> Self {
        self.map(|b| b.query("expand_wildcards", join_list(states)))
    }

    /// Skips missing or closed indices instead of failing.
    pub fn ignore_unavailable(self, ignore: bool) -> Self {
        self.map(|b| b.query("ignore_unavailable", format_bool(ignore)))
    }

    /// How long to wait for the master node.
    pub fn master_timeout(self, timeout: Duration) -> Self {
        self.map(|b| b.query("master_timeout", format_duration(timeout)))
    }

    /// How long to wait for the update to be acknowledged.
    pub fn timeout(self, timeout: Duration) -> Self {
        self.map(|b| b.query("timeout", format_duration(timeout)))
    }

    /// Applies the mapping to the write index of an alias only.
    pub fn write_index_only(self, only: bool) -> Self {
        self.map(|b| b.query("write_index_only", format_bool(only)))
    }

    /// Includes server stack traces in error responses.
    pub fn error_trace(self, enabled: bool) -> Self {
        self.map(|b| b.query("error_trace", format_bool(enabled)))
    }

    /// Response fields to keep, as dotted paths.
    pub fn filter_path<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.map(|b| b.query("filter_path", join_list(paths)))
    }

    /// Returns sizes and durations in human-readable form.
    pub fn human(self, enabled: bool) -> Self {
        self.map(|b| b.query("human", format_bool(enabled)))
    }

    /// Asks the server to indent the JSON response.
    pub fn pretty(self, enabled: bool) -> Self {
        self.map(|b| b.query("pretty", format_bool(enabled)))
    }

    // Body fields

    /// Whether string values that look like dates are mapped as `date`.
    pub fn date_detection(self, enabled: bool) -> Self {
        self.body(|m| m.date_detection = Some(enabled))
    }

    /// How unmapped fields in new documents are handled.
    pub fn dynamic(self, dynamic: DynamicMapping) -> Self {
        self.body(|m| m.dynamic = Some(dynamic))
    }

    /// Date formats tried when `date_detection` is on.
    pub fn dynamic_date_formats<I, S>(self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body(|m| m.dynamic_date_formats = Some(formats.into_iter().map(Into::into).collect()))
    }

    /// Named rules for mapping new fields, tried in order.
    pub fn dynamic_templates(self, templates: Vec<BTreeMap<String, DynamicTemplate>>) -> Self {
        self.body(|m| m.dynamic_templates = Some(templates))
    }

    /// Settings of the `_field_names` field.
    pub fn field_names(self, field: FieldNamesField) -> Self {
        self.body(|m| m.field_names = Some(field))
    }

    /// Application metadata stored as `_meta`.
    pub fn meta(self, meta: Metadata) -> Self {
        self.body(|m| m.meta = Some(meta))
    }

    /// Whether numeric strings are mapped as numbers.
    pub fn numeric_detection(self, enabled: bool) -> Self {
        self.body(|m| m.numeric_detection = Some(enabled))
    }

    /// Replaces all field mappings.
    pub fn properties(self, properties: BTreeMap<String, Property>) -> Self {
        self.body(|m| m.properties = Some(properties))
    }

    /// Adds or replaces a single field mapping.
    pub fn property(self, name: impl Into<String>, property: Property) -> Self {
        self.body(|m| {
            m.properties
                .get_or_insert_with(BTreeMap::new)
                .insert(name.into(), property);
        })
    }

    /// Settings of the `_routing` field.
    pub fn routing(self, routing: RoutingField) -> Self {
        self.body(|m| m.routing = Some(routing))
    }

    /// Fields computed at query time.
    pub fn runtime(self, runtime: RuntimeFields) -> Self {
        self.body(|m| m.runtime = Some(runtime))
    }

    /// Settings of the `_source` field.
    pub fn source(self, source: SourceField) -> Self {
        self.body(|m| m.source = Some(source))
    }

    /// Builds the request without sending it.
    ///
    /// ## Errors
    ///
    /// Fails if no index was set, a deferred step fails, or a header is invalid.
    pub fn http_request(&self) -> Result<TransportRequest, BuildError> {
        self.inner.build()
    }
}

impl<T: Transport> PutMapping<T> {
    /// Sends the request and returns the undecoded response.
    pub async fn perform(&self) -> Result<TransportResponse, ApiError> {
        self.inner.perform().await
    }

    /// Sends the request and decodes the response.
    pub async fn execute(&self) -> Result<PutMappingResponse, ApiError> {
        self.inner.execute().await
    }
}

impl<T> Clone for PutMapping<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for PutMapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PutMapping").field(&self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::types::enums::SourceFieldMode;

    fn put_mapping() -> PutMapping<()> {
        PutMapping::new(Arc::new(()))
    }

    fn body(request: &TransportRequest) -> Value {
        serde_json::from_slice(&request.body).unwrap()
    }

    #[test]
    fn renders_put_to_index_mapping() {
        let request = put_mapping().index("logs").http_request().unwrap();
        assert_eq!(request.method, RestMethod::Put);
        assert_eq!(request.path, "/logs/_mapping");
        assert_eq!(body(&request), json!({}));
    }

    #[test]
    fn index_is_required() {
        let err = put_mapping().http_request().unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot build path for indices.put_mapping, check for missing path parameters"
        );
    }

    #[test]
    fn index_with_reserved_characters_is_escaped() {
        let request = put_mapping().index("my index#1").http_request().unwrap();
        assert_eq!(request.path, "/my%20index%231/_mapping");
    }

    #[test]
    fn dot_segment_index_is_rejected() {
        for index in [".", ".."] {
            let err = put_mapping().index(index).http_request().unwrap_err();
            assert!(err.is_missing_path(), "index {index:?} must not render");
        }
    }

    #[test]
    fn query_setters_format_values() {
        let request = put_mapping()
            .index("logs")
            .allow_no_indices(false)
            .expand_wildcards([ExpandWildcard::Open, ExpandWildcard::Hidden])
            .ignore_unavailable(true)
            .master_timeout(Duration::from_secs(60))
            .timeout(Duration::from_millis(500))
            .write_index_only(true)
            .http_request()
            .unwrap();

        let pairs: BTreeMap<String, String> =
            url::form_urlencoded::parse(request.query.as_deref().unwrap().as_bytes())
                .into_owned()
                .collect();

        assert_eq!(pairs["allow_no_indices"], "false");
        assert_eq!(pairs["expand_wildcards"], "open,hidden");
        assert_eq!(pairs["ignore_unavailable"], "true");
        assert_eq!(pairs["master_timeout"], "1m");
        assert_eq!(pairs["timeout"], "500ms");
        assert_eq!(pairs["write_index_only"], "true");
    }

    #[test]
    fn common_parameters() {
        let request = put_mapping()
            .index("logs")
            .error_trace(true)
            .filter_path(["acknowledged", "_shards.failed"])
            .human(false)
            .pretty(true)
            .http_request()
            .unwrap();
        assert_eq!(
            request.query.as_deref(),
            Some("error_trace=true&filter_path=acknowledged%2C_shards.failed&human=false&pretty=true")
        );
    }

    #[test]
    fn body_setters_fill_mapping() {
        let request = put_mapping()
            .index("logs")
            .date_detection(false)
            .dynamic(DynamicMapping::Strict)
            .dynamic_date_formats(["yyyy-MM-dd"])
            .numeric_detection(true)
            .field_names(FieldNamesField { enabled: false })
            .routing(RoutingField { required: true })
            .source(SourceField {
                mode: Some(SourceFieldMode::Stored),
                ..SourceField::default()
            })
            .meta(Metadata::from([("owner".to_string(), json!("ops"))]))
            .property("message", Property::text())
            .property("level", Property::keyword())
            .http_request()
            .unwrap();

        assert_eq!(
            body(&request),
            json!({
                "date_detection": false,
                "dynamic": "strict",
                "dynamic_date_formats": ["yyyy-MM-dd"],
                "numeric_detection": true,
                "_field_names": {"enabled": false},
                "_routing": {"required": true},
                "_source": {"mode": "stored"},
                "_meta": {"owner": "ops"},
                "properties": {
                    "level": {"type": "keyword"},
                    "message": {"type": "text"}
                }
            })
        );
    }

    #[test]
    fn dynamic_templates_and_runtime() {
        let template = DynamicTemplate {
            match_mapping_type: Some("string".to_string()),
            mapping: Some(Property::keyword()),
            ..DynamicTemplate::default()
        };
        let runtime = RuntimeFields::from([(
            "day".to_string(),
            crate::types::RuntimeField::new("keyword").with_script("emit('mon')"),
        )]);

        let request = put_mapping()
            .index("logs")
            .dynamic_templates(vec![BTreeMap::from([("strings".to_string(), template)])])
            .runtime(runtime)
            .http_request()
            .unwrap();

        assert_eq!(
            body(&request),
            json!({
                "dynamic_templates": [{"strings": {"mapping": {"type": "keyword"}, "match_mapping_type": "string"}}],
                "runtime": {"day": {"type": "keyword", "script": {"source": "emit('mon')"}}}
            })
        );
    }

    #[test]
    fn raw_body_wins_over_setters() {
        let request = put_mapping()
            .index("logs")
            .property("ignored", Property::long())
            .raw(r#"{"properties":{"a":{"type":"long"}}}"#)
            .http_request()
            .unwrap();
        assert_eq!(body(&request), json!({"properties": {"a": {"type": "long"}}}));
    }

    #[test]
    fn request_replaces_mapping() {
        let mapping = TypeMapping {
            numeric_detection: Some(false),
            ..TypeMapping::default()
        };
        let request = put_mapping()
            .index("logs")
            .date_detection(true)
            .request(mapping)
            .http_request()
            .unwrap();
        assert_eq!(body(&request), json!({"numeric_detection": false}));
    }

    #[test]
    fn response_parses_with_and_without_shards() {
        let plain: PutMappingResponse = serde_json::from_str(r#"{"acknowledged":true}"#).unwrap();
        assert!(plain.acknowledged);
        assert!(plain.shards.is_none());

        let with_shards: PutMappingResponse = serde_json::from_str(
            r#"{"acknowledged":true,"_shards":{"total":2,"successful":2,"failed":0}}"#,
        )
        .unwrap();
        assert!(with_shards.shards.unwrap().all_successful());
    }
}
