use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-shard outcome counts reported by write operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShardStatistics {
    /// Shards the operation targeted.
    pub total: u32,
    /// Shards that succeeded.
    pub successful: u32,
    /// Shards that failed.
    pub failed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Shards skipped, when reported.
    pub skipped: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Details of each failure.
    pub failures: Vec<ShardFailure>,
}

impl ShardStatistics {
    /// Returns `true` when no shard failed.
    pub fn all_successful(&self) -> bool {
        self.failed == 0
    }
}

/// Why one shard failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShardFailure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Index of the shard.
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Node holding the shard.
    pub node: Option<String>,
    #[serde(default)]
    /// Shard number.
    pub shard: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Status name, such as `BAD_REQUEST`.
    pub status: Option<String>,
    #[serde(default)]
    /// The error cause as returned by the server.
    pub reason: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_failures() {
        let body = r#"{
            "total": 2, "successful": 1, "failed": 1,
            "failures": [{"index": "logs", "shard": 0, "reason": {"type": "x"}}]
        }"#;
        let stats: ShardStatistics = serde_json::from_str(body).unwrap();
        assert!(!stats.all_successful());
        assert_eq!(stats.failures[0].index.as_deref(), Some("logs"));
        assert_eq!(stats.skipped, None);
    }
}
