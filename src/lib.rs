//! SoilSense: Soil Nutrient Deficiency Prediction
//!
//! Bilingual (English/Kannada) soil nutrient advisory for N, P and K.
//!
//! ## Architecture
//!
//! - **Encoder**: raw soil sample → fixed 7-column classifier feature row
//! - **Classifier**: pre-trained tree-ensemble artifact behind an opaque trait
//! - **Formatter**: prediction vector → bilingual report + Kannada spoken summary
//! - **Speech**: text-to-speech boundary with transient audio artifacts
//! - **API**: Axum presentation boundary (form page + JSON endpoints)

pub mod api;
pub mod classifier;
pub mod config;
pub mod encoder;
pub mod formatter;
pub mod speech;
pub mod types;

// Re-export application configuration
pub use config::AppConfig;

// Re-export commonly used types
pub use types::{
    CropType, FeatureVector, Nutrient, NutrientFinding, NutrientStatus, PredictionReport,
    PredictionVector, SoilSample, SoilType,
};

// Re-export the classifier boundary
pub use classifier::{ClassifierError, NutrientClassifier, TreeEnsembleModel};

// Re-export the speech boundary
pub use speech::{build_speech_request, AudioStore, SpeechError, SpeechRequest, SpeechSynthesizer};
