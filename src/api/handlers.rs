//! API request handlers
//!
//! All handlers run request-per-interaction: each call completes
//! synchronously against immutable shared state (classifier handle,
//! synthesizer client, audio store) before the response is returned.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::classifier::NutrientClassifier;
use crate::speech::{build_speech_request, AudioStore, SpeechSynthesizer};
use crate::types::{input_bounds, CropType, SoilSample, SoilType};
use crate::{config, encoder, formatter};

/// Shared handler state. Everything here is read-only after startup.
#[derive(Clone)]
pub struct ApiState {
    pub classifier: Arc<dyn NutrientClassifier>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub audio_store: Arc<AudioStore>,
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    model: String,
}

/// GET /api/v1/health — liveness and model status
pub async fn get_health(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(HealthResponse {
        status: "ok",
        model: state.classifier.describe().to_string(),
    })
}

// ============================================================================
// Options — declared input surface
// ============================================================================

#[derive(Debug, Serialize)]
struct NumericField {
    name: &'static str,
    /// Bilingual form label, e.g. "Temperature (ತಾಪಮಾನ) in °C"
    label: &'static str,
    min: f64,
    max: f64,
}

#[derive(Debug, Serialize)]
struct ChoiceOption {
    value: String,
    code: u8,
}

#[derive(Debug, Serialize)]
struct ChoiceField {
    name: &'static str,
    label: &'static str,
    options: Vec<ChoiceOption>,
}

#[derive(Debug, Serialize)]
struct OptionsResponse {
    numeric: Vec<NumericField>,
    categorical: Vec<ChoiceField>,
}

/// GET /api/v1/options — numeric bounds and enumerated selections for the
/// form surface, with bilingual field labels.
pub async fn get_options() -> Response {
    let numeric = vec![
        NumericField {
            name: "temperature",
            label: "Temperature (ತಾಪಮಾನ) in °C",
            min: input_bounds::TEMPERATURE.0,
            max: input_bounds::TEMPERATURE.1,
        },
        NumericField {
            name: "humidity",
            label: "Humidity (ಆರ್ದ್ರತೆ) in %",
            min: input_bounds::HUMIDITY.0,
            max: input_bounds::HUMIDITY.1,
        },
        NumericField {
            name: "ph",
            label: "Soil pH (ಮಣ್ಣಿನ ಪಿಎಚ್)",
            min: input_bounds::PH.0,
            max: input_bounds::PH.1,
        },
        NumericField {
            name: "ec",
            label: "Electrical Conductivity (ವಿದ್ಯುತ್ ಚಾಲಕತೆ)",
            min: input_bounds::EC.0,
            max: input_bounds::EC.1,
        },
        NumericField {
            name: "organic_carbon",
            label: "Organic Carbon (%) (ಸಸ್ಯ ಕಾರ್ಬನ್)",
            min: input_bounds::ORGANIC_CARBON.0,
            max: input_bounds::ORGANIC_CARBON.1,
        },
    ];

    let categorical = vec![
        ChoiceField {
            name: "soil_type",
            label: "Soil Type (ಮಣ್ಣಿನ ಪ್ರಕಾರ)",
            options: SoilType::ALL
                .iter()
                .map(|s| ChoiceOption {
                    value: s.to_string(),
                    code: s.code(),
                })
                .collect(),
        },
        ChoiceField {
            name: "crop_type",
            label: "Crop Type (ಬೆಳೆ ಪ್ರಕಾರ)",
            options: CropType::ALL
                .iter()
                .map(|c| ChoiceOption {
                    value: c.to_string(),
                    code: c.code(),
                })
                .collect(),
        },
    ];

    ApiResponse::ok(OptionsResponse {
        numeric,
        categorical,
    })
}

// ============================================================================
// Predict
// ============================================================================

/// POST /api/v1/predict — encode the sample, run the classifier, format the
/// bilingual report.
pub async fn post_predict(
    State(state): State<ApiState>,
    Json(sample): Json<SoilSample>,
) -> Response {
    let features = match encoder::encode(&sample) {
        Ok(f) => f,
        Err(e) => {
            warn!(error = %e, "Rejected prediction request");
            return ApiErrorResponse::bad_request(e.to_string());
        }
    };

    let prediction = match state.classifier.predict(&features) {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "Classifier failure");
            return ApiErrorResponse::internal(format!("prediction failed: {e}"));
        }
    };

    let report = formatter::format(&prediction);
    info!(
        soil = %sample.soil_type,
        crop = %sample.crop_type,
        deficient = report.deficient_count(),
        "Prediction served"
    );
    ApiResponse::ok(report)
}

// ============================================================================
// Speech
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SpeechBody {
    pub text: String,
    /// Language override; defaults to the configured language (Kannada).
    #[serde(default)]
    pub language: Option<String>,
}

/// POST /api/v1/speech — synthesize the given text and return MP3 bytes.
///
/// Synthesis failure is non-fatal: it surfaces as a visible error message
/// and never takes the rest of the interaction down.
pub async fn post_speech(State(state): State<ApiState>, Json(body): Json<SpeechBody>) -> Response {
    let language = body
        .language
        .unwrap_or_else(|| config::get().speech.language.clone());

    let request = match build_speech_request(&body.text, &language) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Rejected speech request");
            return ApiErrorResponse::bad_request(e.to_string());
        }
    };

    let audio = match state.synthesizer.synthesize(&request).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "Voice generation failed");
            return ApiErrorResponse::bad_gateway(format!("Voice generation failed. Error: {e}"));
        }
    };

    // Round-trip through the artifact store: fully written before read-back.
    let name = format!("speech_{}", chrono::Utc::now().timestamp_millis());
    let playback = match state
        .audio_store
        .save(&name, request.format, &audio)
        .and_then(|path| state.audio_store.load(&path))
    {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "Audio artifact round-trip failed");
            return ApiErrorResponse::internal(format!("audio artifact error: {e}"));
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, request.format.mime_type())],
        playback,
    )
        .into_response()
}

/// Legacy health endpoint at root level.
pub async fn legacy_health_check() -> Response {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"}))).into_response()
}
