//! The error document returned by the server on non-success statuses.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A server-reported error.
///
/// `status` is backfilled from the HTTP status when the body omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error(
    "status: {status}, failed: [{kind}], reason: {reason}",
    kind = .error.kind,
    reason = .error.reason.as_deref().unwrap_or_default()
)]
pub struct ElasticsearchError {
    /// What went wrong.
    #[serde(default, deserialize_with = "cause_or_reason")]
    pub error: ErrorCause,
    /// HTTP status code.
    #[serde(default)]
    pub status: u16,
}

/// Structured cause of a server error, possibly nested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorCause {
    /// Exception type, such as `index_not_found_exception`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Server stack trace, sent when `error_trace` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    /// The underlying cause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<Box<ErrorCause>>,
    /// Innermost causes across shards.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub root_cause: Vec<ErrorCause>,
    /// Errors suppressed while handling this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<ErrorCause>,
    /// Any additional keys, such as `index` or `index_uuid`.
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CauseRepr {
    Cause(ErrorCause),
    Reason(String),
}

// Some proxies answer with `{"error": "text", "status": 502}`.
fn cause_or_reason<'de, D>(deserializer: D) -> Result<ErrorCause, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match CauseRepr::deserialize(deserializer)? {
        CauseRepr::Cause(cause) => cause,
        CauseRepr::Reason(reason) => ErrorCause {
            reason: Some(reason),
            ..ErrorCause::default()
        },
    })
}
