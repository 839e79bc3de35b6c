//! Core types for VoiceGuard

mod classification;
mod signals;
mod media;
mod detection;
mod record;
mod error;

pub use classification::{Classification, confidence_for, clamp_score};
pub use signals::{TextSignals, ScoreResult};
pub use media::MediaType;
pub use detection::DetectionResult;
pub use record::{DetectionRecord, AnalysisDetails};
pub use error::{ScanError, ScanResult};
