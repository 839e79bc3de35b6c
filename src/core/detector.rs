//! Media detector: routes content to the text scorer or the simulated media analysis
//!
//! Image, video and audio analysis is a placeholder. Confidence and
//! technical metrics are drawn from a SHA-256 digest of the content, so the
//! same upload always yields the same result.

use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::info;
use crate::{
    MEDIA_CONFIDENCE_MIN, MEDIA_CONFIDENCE_SPAN, MEDIA_DEEPFAKE_CUTOFF, MODEL_VERSION,
};
use crate::core::TextScorer;
use crate::types::{Classification, DetectionResult, MediaType, ScanError, ScanResult, ScoreResult};

/// Steps reported in simulated media metadata
pub const PROCESSING_STEPS: [&str; 4] = [
    "Feature extraction",
    "Pattern analysis",
    "Anomaly detection",
    "Consistency verification",
];

/// Generic progress indicators for each media type
pub fn indicators_for(media_type: MediaType) -> &'static [&'static str] {
    match media_type {
        MediaType::Image => &[
            "Analyzing metadata integrity",
            "Examining pixel patterns",
            "Checking facial features",
            "Analyzing lighting patterns",
            "Detecting manipulation signatures",
        ],
        MediaType::Video => &[
            "Analyzing frame consistency",
            "Checking audio-visual sync",
            "Examining facial movements",
            "Detecting temporal anomalies",
            "Analyzing compression artifacts",
        ],
        MediaType::Audio => &[
            "Analyzing frequency patterns",
            "Checking voice signatures",
            "Examining background noise",
            "Detecting audio splicing",
            "Analyzing voice modulation",
        ],
        MediaType::Text => &[
            "Analyzing writing patterns",
            "Checking linguistic markers",
            "Examining content coherence",
            "Detecting AI patterns",
            "Analyzing style consistency",
        ],
    }
}

/// Front door for every detection request
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaDetector {
    scorer: TextScorer,
}

impl MediaDetector {
    pub fn new() -> Self {
        Self { scorer: TextScorer::new() }
    }

    /// Analyze raw content of the given media type
    pub fn detect(&self, content: &[u8], media_type: MediaType) -> ScanResult<DetectionResult> {
        if content.is_empty() {
            return Err(ScanError::EmptyInput);
        }

        let result = match media_type {
            MediaType::Text => {
                let text = String::from_utf8_lossy(content);
                self.detect_text(&text)?
            }
            other => simulate_media(content, other),
        };

        info!(
            media = %media_type,
            class = result.classification.as_str(),
            confidence = result.confidence,
            "detection complete"
        );
        Ok(result)
    }

    /// Score text and wrap it as a detection result
    pub fn detect_text(&self, text: &str) -> ScanResult<DetectionResult> {
        let scored = self.scorer.score(text)?;
        Ok(text_result(&scored))
    }
}

/// Detection result for an already scored text
pub fn text_result(scored: &ScoreResult) -> DetectionResult {
    let classification = scored.classification();

    DetectionResult {
        classification,
        confidence: scored.confidence(),
        details: text_details(classification).to_string(),
        indicators: scored.indicators.clone(),
        metadata: json!({
            "modelVersion": MODEL_VERSION,
            "authenticityScore": scored.score,
            "wordCount": scored.word_count,
            "sentenceCount": scored.sentence_count,
            "charCount": scored.char_count,
            "signals": scored.signals,
        }),
    }
}

fn text_details(classification: Classification) -> &'static str {
    match classification {
        Classification::Authentic => "The writing shows natural variation, personal voice and informal markers typical of human authors.",
        Classification::Uncertain => "The writing mixes human-like and machine-like traits; the result is inconclusive.",
        Classification::Deepfake => "The writing shows repetitive structure, formal transitions and elevated vocabulary typical of generated text.",
    }
}

fn simulate_media(content: &[u8], media_type: MediaType) -> DetectionResult {
    let digest = media_digest(content, media_type);

    let raw_confidence = MEDIA_CONFIDENCE_MIN + MEDIA_CONFIDENCE_SPAN * unit(&digest, 0);
    let is_deepfake = raw_confidence < MEDIA_DEEPFAKE_CUTOFF;

    let details = if is_deepfake {
        format!(
            "Our analysis indicates potential manipulation in this {} content. Multiple indicators suggest artificial generation or modification.",
            media_type
        )
    } else {
        format!(
            "Our analysis indicates this {} content shows strong signs of authenticity. Natural patterns and consistent signatures were detected.",
            media_type
        )
    };

    DetectionResult {
        classification: if is_deepfake { Classification::Deepfake } else { Classification::Authentic },
        confidence: raw_confidence.round() as u8,
        details,
        indicators: indicators_for(media_type).iter().map(|s| s.to_string()).collect(),
        metadata: json!({
            "modelVersion": MODEL_VERSION,
            "processingSteps": PROCESSING_STEPS,
            "technicalMetrics": {
                "signalToNoiseRatio": 20.0 + 10.0 * unit(&digest, 2),
                "patternConsistency": 0.5 + 0.5 * unit(&digest, 4),
                "anomalyScore": unit(&digest, 6),
            },
        }),
    }
}

fn media_digest(content: &[u8], media_type: MediaType) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(media_type.as_str().as_bytes());
    hasher.update(content);
    hasher.finalize().into()
}

/// Two digest bytes at `offset` mapped to [0, 1)
fn unit(digest: &[u8; 32], offset: usize) -> f64 {
    let value = u16::from_be_bytes([digest[offset], digest[offset + 1]]);
    value as f64 / 65536.0
}
