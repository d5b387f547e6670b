//! API route definitions
//!
//! Endpoints for the soil nutrient form application:
//! - /api/v1/health  - liveness and model status
//! - /api/v1/options - declared input bounds and option sets
//! - /api/v1/predict - run a prediction, get the bilingual report
//! - /api/v1/speech  - synthesize Kannada speech for a spoken summary

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, ApiState};

/// Create all API routes.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/options", get(handlers::get_options))
        .route("/predict", post(handlers::post_predict))
        .route("/speech", post(handlers::post_speech))
        .with_state(state)
}

/// Legacy health endpoint at root level.
pub fn legacy_routes() -> Router {
    Router::new().route("/health", get(handlers::legacy_health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ClassifierError, NutrientClassifier};
    use crate::speech::{AudioStore, SpeechError, SpeechRequest, SpeechSynthesizer};
    use crate::types::{FeatureVector, PredictionVector};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedClassifier;

    impl NutrientClassifier for FixedClassifier {
        fn predict(&self, _: &FeatureVector) -> Result<PredictionVector, ClassifierError> {
            Ok(PredictionVector::from_flags([0, 1, 0]))
        }
    }

    struct SilentSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for SilentSynthesizer {
        async fn synthesize(&self, _: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
            Ok(vec![0xFF, 0xFB])
        }
    }

    fn create_test_state() -> ApiState {
        let dir = tempfile::tempdir().unwrap().into_path();
        ApiState {
            classifier: Arc::new(FixedClassifier),
            synthesizer: Arc::new(SilentSynthesizer),
            audio_store: Arc::new(AudioStore::open(&dir).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_api_routes_health() {
        let app = api_routes(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_routes_options() {
        let app = api_routes(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/options")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
