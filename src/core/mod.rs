//! Core modules for VoiceGuard

pub mod text_scorer;
pub mod detector;
pub mod records;
pub mod api;

pub use text_scorer::{TextScorer, AI_PHRASES};
pub use detector::{MediaDetector, indicators_for, text_result, PROCESSING_STEPS};
pub use records::RecordStore;
pub use api::{create_router, run_server};
