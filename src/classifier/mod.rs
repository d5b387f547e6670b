//! Nutrient classifier boundary
//!
//! The classifier is an opaque collaborator: a 7-column feature row goes in,
//! a 3-column binary sufficiency vector comes out. The trait is the seam;
//! [`TreeEnsembleModel`] is the artifact-backed implementation loaded once
//! at startup and shared read-only.

mod model;

pub use model::{ModelMetadata, TreeEnsembleModel};

use std::path::PathBuf;
use thiserror::Error;

use crate::types::{FeatureVector, PredictionVector};

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("failed to read model artifact {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse model artifact {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Schema(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Opaque prediction boundary: feature row in, sufficiency vector out.
pub trait NutrientClassifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<PredictionVector, ClassifierError>;

    /// Short human-readable identifier for status reporting.
    fn describe(&self) -> &str {
        "classifier"
    }
}
