//! Three-way verdict derived from an authenticity score

use serde::{Deserialize, Serialize};
use crate::{AUTHENTIC_THRESHOLD, DEEPFAKE_THRESHOLD, NEUTRAL_SCORE};

/// Verdict shown on a result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Score above 65
    Authentic,
    /// Score in (35, 65]
    Uncertain,
    /// Score at or below 35
    Deepfake,
}

impl Classification {
    /// Classify a score. Out-of-range and NaN inputs are clamped first.
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score > AUTHENTIC_THRESHOLD {
            Classification::Authentic
        } else if score > DEEPFAKE_THRESHOLD {
            Classification::Uncertain
        } else {
            Classification::Deepfake
        }
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Authentic => "authentic",
            Classification::Uncertain => "uncertain",
            Classification::Deepfake => "deepfake",
        }
    }

    pub fn is_deepfake(&self) -> bool {
        *self == Classification::Deepfake
    }

    /// Terminal color for this verdict
    pub fn color(&self) -> colored::Color {
        match self {
            Classification::Authentic => colored::Color::Green,
            Classification::Uncertain => colored::Color::Yellow,
            Classification::Deepfake => colored::Color::Red,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Classification::Authentic => "🛡️",
            Classification::Uncertain => "⚠️",
            Classification::Deepfake => "🚨",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Classification::Authentic => "AUTHENTIC",
            Classification::Uncertain => "UNCERTAIN",
            Classification::Deepfake => "DEEPFAKE",
        };
        write!(f, "{}", name)
    }
}

/// Displayed confidence: distance from the neutral midpoint rescaled to 0-100.
///
/// This is not the authenticity score. A score of 60 classifies UNCERTAIN
/// and reports 20% confidence.
pub fn confidence_for(score: f64) -> u8 {
    let distance = (clamp_score(score) - NEUTRAL_SCORE).abs() * 2.0;
    distance.round().clamp(0.0, 100.0) as u8
}

/// Clamp to [0, 100]; NaN maps to the neutral midpoint
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        NEUTRAL_SCORE
    } else {
        score.clamp(0.0, 100.0)
    }
}
