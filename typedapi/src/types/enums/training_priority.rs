use serde::{Deserialize, Serialize};

/// Scheduling priority of a trained-model deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrainingPriority {
    /// Default priority.
    Normal,
    /// Runs on spare capacity and may be starved by normal deployments.
    Low,
    /// A tag this crate does not know, kept verbatim.
    Unknown(String),
}

tag_enum!(TrainingPriority {
    Normal => "normal",
    Low => "low",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!("NORMAL".parse::<TrainingPriority>().unwrap(), TrainingPriority::Normal);
        assert_eq!("low".parse::<TrainingPriority>().unwrap(), TrainingPriority::Low);
        assert_eq!(TrainingPriority::Low.as_ref(), "low");
    }

    #[test]
    fn unknown_round_trips() {
        let priority = TrainingPriority::from("urgent");
        assert_eq!(priority.to_string(), "urgent");
        assert_eq!(serde_json::to_string(&priority).unwrap(), "\"urgent\"");
    }
}
