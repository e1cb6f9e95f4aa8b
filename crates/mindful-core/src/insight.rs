//! Insight types produced by the engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of finding an insight reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Pattern,
    Recommendation,
    Achievement,
    Warning,
    Milestone,
}

/// Coarse importance label attached to an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// Area of practice an insight speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Environment,
    Physical,
    Mental,
    Social,
    Progress,
}

/// One analytical dimension, listed in the order the engine reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Breathing,
    Environment,
    FlowState,
    OptimalDuration,
    Soundscape,
    TimeOfDay,
    Emotion,
}

impl Dimension {
    /// All dimensions in report order.
    pub const ALL: [Dimension; 7] = [
        Dimension::Breathing,
        Dimension::Environment,
        Dimension::FlowState,
        Dimension::OptimalDuration,
        Dimension::Soundscape,
        Dimension::TimeOfDay,
        Dimension::Emotion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Breathing => "breathing",
            Dimension::Environment => "environment",
            Dimension::FlowState => "flow-state",
            Dimension::OptimalDuration => "optimal-duration",
            Dimension::Soundscape => "soundscape",
            Dimension::TimeOfDay => "time-of-day",
            Dimension::Emotion => "emotion",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthesized, human-readable finding from one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    /// Declared trust level of the producing analyzer (0.0 to 1.0)
    pub confidence: f64,
    pub impact: Impact,
    pub category: InsightCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Insight {
    pub fn new(
        insight_type: InsightType,
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: f64,
        impact: Impact,
        category: InsightCategory,
    ) -> Self {
        Self {
            insight_type,
            title: title.into(),
            description: description.into(),
            confidence,
            impact,
            category,
            metadata: None,
            suggestions: None,
        }
    }

    /// Attach one metadata entry.
    pub fn with_metadata(mut self, key: &str, value: f64) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value);
        self
    }

    pub fn with_suggestions(mut self, suggestions: &[&str]) -> Self {
        self.suggestions = Some(suggestions.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Look up a metadata value by key.
    pub fn metadata_value(&self, key: &str) -> Option<f64> {
        self.metadata.as_ref()?.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_serializes_type_field_and_omits_empty_options() {
        let insight = Insight::new(
            InsightType::Pattern,
            "Optimal Session Duration",
            "Your mindfulness scores peak during 20-minute sessions",
            0.85,
            Impact::Medium,
            InsightCategory::Progress,
        );

        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["type"], "pattern");
        assert_eq!(json["impact"], "medium");
        assert_eq!(json["category"], "progress");
        assert!(json.get("metadata").is_none());
        assert!(json.get("suggestions").is_none());
    }

    #[test]
    fn test_with_metadata_accumulates() {
        let insight = Insight::new(
            InsightType::Recommendation,
            "t",
            "d",
            0.5,
            Impact::Low,
            InsightCategory::Environment,
        )
        .with_metadata("a", 1.0)
        .with_metadata("b", 2.0);

        assert_eq!(insight.metadata_value("a"), Some(1.0));
        assert_eq!(insight.metadata_value("b"), Some(2.0));
        assert_eq!(insight.metadata_value("c"), None);
    }

    #[test]
    fn test_dimension_serializes_kebab_case() {
        let json = serde_json::to_string(&Dimension::TimeOfDay).unwrap();
        assert_eq!(json, "\"time-of-day\"");
        assert_eq!(Dimension::FlowState.to_string(), "flow-state");
    }

    #[test]
    fn test_impact_ordering() {
        assert!(Impact::High > Impact::Medium);
        assert!(Impact::Medium > Impact::Low);
    }
}
