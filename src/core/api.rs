//! HTTP API for VoiceGuard
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /detect - Detect any media type, records the result
//! - POST /analyze/text - Full text score breakdown
//! - GET /records - Stored detections, newest first
//! - GET /records/{id} - One stored detection

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::{MediaDetector, RecordStore, TextScorer};
use crate::types::{
    Classification, DetectionRecord, DetectionResult, MediaType, ScanError, TextSignals,
};

/// User id recorded when a request carries none
pub const ANONYMOUS_USER: &str = "anonymous";

/// App state
pub struct AppState {
    pub detector: MediaDetector,
    pub scorer: TextScorer,
    pub store: Option<RecordStore>,
    pub analysis_delay: Duration,
}

/// Detect request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    pub content: String,
    pub media_type: String,
    pub user_id: Option<String>,
}

/// Analyze text request
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// Analyze text response
#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub score: f64,
    pub classification: Classification,
    pub confidence: u8,
    pub indicators: Vec<String>,
    pub signals: TextSignals,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records_stored: usize,
}

/// Error body: `{ "error": msg }`
pub struct ApiError(pub ScanError);

impl From<ScanError> for ApiError {
    fn from(err: ScanError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ScanError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ScanError::EmptyInput
            | ScanError::InvalidMediaType(_)
            | ScanError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ScanError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router(config: &AppConfig) -> Router {
    let state = Arc::new(AppState {
        detector: MediaDetector::new(),
        scorer: TextScorer::new(),
        store: config.record_dir.as_ref().map(RecordStore::new),
        analysis_delay: Duration::from_millis(config.analysis_delay_ms),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/detect", post(detect))
        .route("/analyze/text", post(analyze_text))
        .route("/records", get(list_records))
        .route("/records/:id", get(get_record))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        records_stored: state.store.as_ref().map(RecordStore::count).unwrap_or(0),
    })
}

/// Detect content of any media type
async fn detect(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DetectionResult>, ApiError> {
    let started = Instant::now();
    let Json(req) = payload?;
    let media_type: MediaType = req.media_type.parse()?;

    simulated_delay(&state).await;
    let result = state.detector.detect(req.content.as_bytes(), media_type)?;
    let processing_time = started.elapsed().as_secs_f64();

    if let Some(store) = &state.store {
        let user_id = req.user_id.as_deref().unwrap_or(ANONYMOUS_USER);
        let record = DetectionRecord::from_result(user_id, media_type, &result, processing_time);
        // Recording is best-effort
        if let Err(e) = store.save(&record) {
            warn!(error = %e, "failed to store detection record");
        }
    }

    Ok(Json(result))
}

/// Score text with full breakdown
async fn analyze_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<AnalyzeTextResponse>, ApiError> {
    let Json(req) = payload?;
    simulated_delay(&state).await;
    let scored = state.scorer.score(&req.text)?;

    Ok(Json(AnalyzeTextResponse {
        score: scored.score,
        classification: scored.classification(),
        confidence: scored.confidence(),
        indicators: scored.indicators,
        signals: scored.signals,
    }))
}

/// List stored records
async fn list_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DetectionRecord>>, ApiError> {
    match &state.store {
        Some(store) => Ok(Json(store.list()?)),
        None => Ok(Json(Vec::new())),
    }
}

/// Get one stored record
async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DetectionRecord>, ApiError> {
    let store = state
        .store
        .as_ref()
        .ok_or_else(|| ScanError::NotFound("recording is disabled".to_string()))?;
    Ok(Json(store.load(&id)?))
}

async fn simulated_delay(state: &AppState) {
    if !state.analysis_delay.is_zero() {
        tokio::time::sleep(state.analysis_delay).await;
    }
}

/// Run the API server
pub async fn run_server(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(
        addr = %config.addr,
        records = ?config.record_dir,
        delay_ms = config.analysis_delay_ms,
        "VoiceGuard API listening"
    );
    axum::serve(listener, router).await?;
    Ok(())
}
