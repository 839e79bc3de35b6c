//! Detection result returned to callers and rendered on result cards

use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::Classification;

/// Outcome of one detection request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Verdict; serialized as `type`
    #[serde(rename = "type")]
    pub classification: Classification,
    /// Displayed confidence: 0-100
    pub confidence: u8,
    /// Human-readable summary
    pub details: String,
    /// Ordered indicator lines
    pub indicators: Vec<String>,
    /// Free-form analysis metadata
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl DetectionResult {
    pub fn is_deepfake(&self) -> bool {
        self.classification.is_deepfake()
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.classification.color();
        format!(
            "{} {} | confidence={}%",
            self.classification.emoji(),
            self.classification.to_string().color(color).bold(),
            self.confidence,
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "class={} | confidence={}% | indicators={}",
            self.classification.as_str(),
            self.confidence,
            self.indicators.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> DetectionResult {
        DetectionResult {
            classification: Classification::Authentic,
            confidence: 88,
            details: "ok".to_string(),
            indicators: vec!["Word repetition: Low".to_string()],
            metadata: serde_json::json!({ "modelVersion": "1.0.0" }),
        }
    }

    #[test]
    fn test_type_field_name() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "authentic");
        assert_eq!(json["confidence"], 88);
        assert!(json.get("classification").is_none());
    }

    #[test]
    fn test_parseable_string() {
        assert_eq!(
            sample().to_parseable_string(),
            "class=authentic | confidence=88% | indicators=1"
        );
    }
}
