//! Endpoint descriptors and path-template rendering.
//!
//! Every API operation is described by a type implementing [`Endpoint`]: a
//! name, the set of [`PathShape`]s it can render, and the body and response
//! types it exchanges. The generic [`RequestBuilder`](crate::RequestBuilder)
//! does the rest.
//!
//! Path parameters are tracked in a [`ParamSet`] bitmask. A build succeeds
//! only when the mask equals the mask of exactly one declared shape, so an
//! endpoint that has no empty-mask shape cannot be built before a path
//! parameter has been supplied.

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::method::RestMethod;

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Bitmask of the path parameters supplied to a builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParamSet(u32);

impl ParamSet {
    /// No path parameters.
    pub const EMPTY: Self = Self(0);

    /// The mask for the parameter at `position` (0-based).
    pub const fn bit(position: u32) -> Self {
        Self(1 << position)
    }

    /// Combines two masks.
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// ORs `other` into this mask.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Returns `true` when no path parameter is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw mask.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// One URL shape an endpoint can render.
///
/// A shape is selected when the builder's [`ParamSet`] equals `params`
/// exactly. The template uses `{name}` placeholders, one per path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathShape {
    /// Path parameters this shape requires, and no others.
    pub params: ParamSet,
    /// HTTP method sent with this shape.
    pub method: RestMethod,
    /// Path template such as `/{index}/_mapping`.
    pub template: &'static str,
}

impl PathShape {
    /// Declares a shape selected by exactly `params`.
    pub const fn new(params: ParamSet, method: RestMethod, template: &'static str) -> Self {
        Self {
            params,
            method,
            template,
        }
    }

    /// Extracts placeholder names in the order they appear in the template.
    pub fn param_names(&self) -> Vec<&'static str> {
        self.template.split('/').filter_map(placeholder).collect()
    }
}

/// Static description of one API operation.
///
/// Implementors are zero-sized marker types; the per-endpoint wrapper
/// (for example [`PutMapping`](crate::indices::PutMapping)) holds a
/// `RequestBuilder<Self, T>` and exposes typed setters over it.
pub trait Endpoint: Send + Sync + 'static {
    /// API name used in errors and tracing spans, e.g. `indices.put_mapping`.
    const NAME: &'static str;

    /// Every valid path shape. Masks must be pairwise distinct.
    const SHAPES: &'static [PathShape];

    /// Whether a fresh builder starts with a default structured body.
    const HAS_BODY: bool;

    /// Structured request body. `()` for endpoints without one.
    type Body: Serialize + Clone + Default + fmt::Debug + Send + Sync + 'static;

    /// Decoded success response.
    type Response: DeserializeOwned + Send + 'static;

    /// Returns the shape whose mask equals `params`.
    fn shape(params: ParamSet) -> Option<&'static PathShape> {
        Self::SHAPES.iter().find(|shape| shape.params == params)
    }
}

/// Renders a path template, percent-encoding each substituted value as a
/// single segment.
///
/// Returns `None` when a placeholder has no value, an empty one, or a
/// dot-segment (`.` or `..`) that URL normalization would collapse.
///
/// ## Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use typedapi::endpoint::render_path;
///
/// let values = BTreeMap::from([("index", "logs 2024/01".to_string())]);
/// assert_eq!(
///     render_path("/{index}/_mapping", &values).as_deref(),
///     Some("/logs%202024%2F01/_mapping")
/// );
/// ```
pub fn render_path(template: &str, values: &BTreeMap<&'static str, String>) -> Option<String> {
    let mut path = String::with_capacity(template.len() + 16);

    for segment in template.split('/').filter(|s| !s.is_empty()) {
        path.push('/');
        match placeholder(segment) {
            Some(name) => {
                let value = values.get(name).filter(|v| is_segment_value(v))?;
                path.extend(utf8_percent_encode(value, PATH_SEGMENT));
            }
            None => path.push_str(segment),
        }
    }

    if path.is_empty() {
        path.push('/');
    }

    Some(path)
}

fn is_segment_value(value: &str) -> bool {
    !matches!(value, "" | "." | "..")
}

fn placeholder(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: ParamSet = ParamSet::bit(0);
    const NAME: ParamSet = ParamSet::bit(1);

    fn values(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn bits_are_distinct_and_combine() {
        assert_eq!(INDEX.bits(), 1);
        assert_eq!(NAME.bits(), 2);
        assert_eq!(INDEX.with(NAME).bits(), 3);
        assert!(ParamSet::EMPTY.is_empty());

        let mut set = ParamSet::EMPTY;
        set.insert(NAME);
        set.insert(NAME);
        assert_eq!(set, NAME);
    }

    #[test]
    fn param_names_in_template_order() {
        let shape = PathShape::new(
            INDEX.with(NAME),
            RestMethod::Get,
            "/{index}/_alias/{name}",
        );
        assert_eq!(shape.param_names(), vec!["index", "name"]);

        let root = PathShape::new(ParamSet::EMPTY, RestMethod::Get, "/_mapping");
        assert!(root.param_names().is_empty());
    }

    #[test]
    fn render_substitutes_values() {
        let path = render_path("/{index}/_alias/{name}", &values(&[("index", "logs"), ("name", "current")]));
        assert_eq!(path.as_deref(), Some("/logs/_alias/current"));
    }

    #[test]
    fn render_keeps_commas_and_wildcards() {
        let path = render_path("/{index}/_mapping", &values(&[("index", "logs-*,metrics")]));
        assert_eq!(path.as_deref(), Some("/logs-*,metrics/_mapping"));
    }

    #[test]
    fn render_escapes_segment_delimiters() {
        let path = render_path("/{index}/_mapping", &values(&[("index", "a/b?c#d%e")]));
        assert_eq!(path.as_deref(), Some("/a%2Fb%3Fc%23d%25e/_mapping"));
    }

    #[test]
    fn render_rejects_dot_segments() {
        assert_eq!(render_path("/{index}/_mapping", &values(&[("index", ".")])), None);
        assert_eq!(render_path("/{index}/_mapping", &values(&[("index", "..")])), None);
        assert_eq!(
            render_path("/{index}/_mapping", &values(&[("index", "...")])).as_deref(),
            Some("/.../_mapping")
        );
        assert_eq!(
            render_path("/{index}/_mapping", &values(&[("index", ".hidden")])).as_deref(),
            Some("/.hidden/_mapping")
        );
    }

    #[test]
    fn render_escapes_backslash() {
        let path = render_path("/{index}/_mapping", &values(&[("index", "a\\b")]));
        assert_eq!(path.as_deref(), Some("/a%5Cb/_mapping"));
    }

    #[test]
    fn render_fails_on_missing_or_empty_value() {
        assert_eq!(render_path("/{index}/_mapping", &values(&[])), None);
        assert_eq!(render_path("/{index}/_mapping", &values(&[("index", "")])), None);
    }

    #[test]
    fn render_static_template() {
        assert_eq!(render_path("/_mapping", &values(&[])).as_deref(), Some("/_mapping"));
        assert_eq!(render_path("/", &values(&[])).as_deref(), Some("/"));
    }
}
