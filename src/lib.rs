//! VoiceGuard: heuristic text authenticity scoring
//!
//! text → TextScorer → Classification + confidence → DetectionResult → record

pub mod config;
pub mod core;
pub mod telemetry;
pub mod types;

// =============================================================================
// CLASSIFICATION THRESHOLDS [C]
// =============================================================================

/// Scores strictly above this are AUTHENTIC
pub const AUTHENTIC_THRESHOLD: f64 = 65.0;

/// Scores at or below this are DEEPFAKE; between the two is UNCERTAIN
pub const DEEPFAKE_THRESHOLD: f64 = 35.0;

/// Neutral midpoint every score starts from
pub const NEUTRAL_SCORE: f64 = 50.0;

// =============================================================================
// SCORER WEIGHTS [C] - penalties
// =============================================================================

/// Multiplier on repetition ratio (0.0-1.0)
pub const PENALTY_REPETITION: f64 = 30.0;
/// Per distinct AI-typical phrase
pub const PENALTY_AI_PHRASE: f64 = 8.0;
/// Every sentence starts uppercase
pub const PENALTY_CONSISTENT_FORMATTING: f64 = 5.0;
/// Every sentence ends in terminal punctuation
pub const PENALTY_PERFECT_PUNCTUATION: f64 = 10.0;
/// Multiplier on complex-word density
pub const PENALTY_COMPLEX_WORDS: f64 = 60.0;
/// Maximum penalty for very short text
pub const PENALTY_SHORT_TEXT: f64 = 20.0;

// =============================================================================
// SCORER WEIGHTS [C] - bonuses
// =============================================================================

pub const BONUS_SENTENCE_VARIETY: f64 = 10.0;
pub const BONUS_PERSONAL_PRONOUNS: f64 = 10.0;
pub const BONUS_INFORMAL_LANGUAGE: f64 = 10.0;
pub const BONUS_EMOTIONAL_EXPRESSION: f64 = 5.0;
pub const BONUS_CONTRACTIONS: f64 = 10.0;
pub const BONUS_NATURAL_TRANSITIONS: f64 = 5.0;

/// Texts shorter than this (in chars) are penalized proportionally
pub const SHORT_TEXT_FLOOR: usize = 200;

/// Sentence lengths deviating more than this fraction of the mean count as variety
pub const SENTENCE_VARIETY_TOLERANCE: f64 = 0.3;

// =============================================================================
// SIMULATED MEDIA ANALYSIS [C]
// =============================================================================

/// Lowest simulated media confidence
pub const MEDIA_CONFIDENCE_MIN: f64 = 70.0;
/// Width of the simulated confidence band (70-100)
pub const MEDIA_CONFIDENCE_SPAN: f64 = 30.0;
/// Simulated confidence below this reports DEEPFAKE
pub const MEDIA_DEEPFAKE_CUTOFF: f64 = 85.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

/// Stored with every detection record
pub const MODEL_VERSION: &str = "1.0.0";
