//! Detection record: one stored row per analysis

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use crate::MODEL_VERSION;
use crate::types::{DetectionResult, MediaType};

/// Details block stored alongside each record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub details: String,
    pub indicators: Vec<String>,
}

/// Stored detection row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub id: String,
    pub user_id: String,
    pub media_type: MediaType,
    pub confidence_score: u8,
    pub is_deepfake: bool,
    pub analysis_details: AnalysisDetails,
    pub detection_method: String,
    pub analysis_metadata: serde_json::Value,
    /// Seconds spent producing the result
    pub processing_time: f64,
    pub model_version: String,
    pub created_at: DateTime<Utc>,
}

impl DetectionRecord {
    /// Build a record from a finished detection
    pub fn from_result(
        user_id: &str,
        media_type: MediaType,
        result: &DetectionResult,
        processing_time: f64,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id: record_id(user_id, media_type, result, created_at),
            user_id: user_id.to_string(),
            media_type,
            confidence_score: result.confidence,
            is_deepfake: result.is_deepfake(),
            analysis_details: AnalysisDetails {
                details: result.details.clone(),
                indicators: result.indicators.clone(),
            },
            detection_method: media_type.detection_method(),
            analysis_metadata: result.metadata.clone(),
            processing_time,
            model_version: MODEL_VERSION.to_string(),
            created_at,
        }
    }
}

/// `rec_` + 16 hex chars of SHA-256 over the record's identifying fields
fn record_id(
    user_id: &str,
    media_type: MediaType,
    result: &DetectionResult,
    created_at: DateTime<Utc>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    hasher.update(media_type.as_str().as_bytes());
    hasher.update(result.details.as_bytes());
    hasher.update([result.confidence]);
    hasher.update(created_at.timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
    let digest = hasher.finalize();
    let hex: String = digest[..8].iter().map(|b| format!("{:02x}", b)).collect();
    format!("rec_{}", hex)
}
