//! Signal structures for the text scorer

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{Classification, confidence_for};

/// Lexical and structural statistics extracted from one text sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSignals {
    /// (words - unique words) / words
    pub repetition_score: f64,
    /// Some sentence deviates >30% from the mean length
    pub sentence_length_variety: bool,
    /// Distinct AI-typical phrases matched
    pub ai_pattern_count: usize,
    /// Every sentence fragment starts uppercase
    pub has_consistent_formatting: bool,
    /// Every sentence fragment ends in . ! or ?
    pub has_perfect_punctuation: bool,
    pub has_personal_pronouns: bool,
    pub has_informal_language: bool,
    /// Repeated !/?, ellipses or emoji
    pub has_emotional_expression: bool,
    pub has_contractions: bool,
    /// and/but/so/yet style connectives
    pub has_natural_transitions: bool,
    /// Complex-vocabulary hits / words
    pub complex_word_score: f64,
}

impl TextSignals {
    /// Signals of a sample that triggers nothing
    pub fn zero() -> Self {
        Self {
            repetition_score: 0.0,
            sentence_length_variety: false,
            ai_pattern_count: 0,
            has_consistent_formatting: false,
            has_perfect_punctuation: false,
            has_personal_pronouns: false,
            has_informal_language: false,
            has_emotional_expression: false,
            has_contractions: false,
            has_natural_transitions: false,
            complex_word_score: 0.0,
        }
    }
}

/// Scored text with indicator breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Authenticity score: 0.0-100.0
    pub score: f64,
    /// Eight "<Label>: <Value>" lines, fixed order
    pub indicators: Vec<String>,
    /// Raw signals used to compute the score
    pub signals: TextSignals,
    pub word_count: usize,
    pub sentence_count: usize,
    pub char_count: usize,
    /// When this was computed
    pub timestamp: DateTime<Utc>,
}

impl ScoreResult {
    pub fn new(
        score: f64,
        indicators: Vec<String>,
        signals: TextSignals,
        word_count: usize,
        sentence_count: usize,
        char_count: usize,
    ) -> Self {
        Self {
            score,
            indicators,
            signals,
            word_count,
            sentence_count,
            char_count,
            timestamp: Utc::now(),
        }
    }

    pub fn classification(&self) -> Classification {
        Classification::from_score(self.score)
    }

    /// Distance-from-midpoint confidence shown to the user
    pub fn confidence(&self) -> u8 {
        confidence_for(self.score)
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "score={:.1} | class={} | confidence={}% | words={} | sentences={}",
            self.score,
            self.classification().as_str(),
            self.confidence(),
            self.word_count,
            self.sentence_count,
        )
    }
}
