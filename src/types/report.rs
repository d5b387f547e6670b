//! Formatted bilingual prediction report types

use serde::{Deserialize, Serialize};

use super::{Nutrient, NutrientStatus};

/// Bilingual fertilizer recommendation, present only for a deficient nutrient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub english: String,
    pub kannada: String,
}

/// Per-nutrient formatted result line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientFinding {
    pub nutrient: Nutrient,
    pub status: NutrientStatus,
    /// English status line, e.g. "Deficient in Nitrogen"
    pub english_text: String,
    /// Kannada status line, e.g. "ನೈಟ್ರೋಜನ್ ಕೊರತೆ ಇದೆ"
    pub kannada_text: String,
    /// Present only when the nutrient is deficient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

/// Complete formatted output for one prediction: three findings in fixed
/// [Nitrogen, Phosphorus, Potassium] order plus the Kannada spoken summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Unix timestamp of formatting
    pub timestamp: u64,
    /// Findings in nutrient order — always exactly 3 entries
    pub findings: Vec<NutrientFinding>,
    /// Kannada text for speech synthesis, one fragment per nutrient in order
    pub spoken_summary: String,
}

impl PredictionReport {
    /// Finding for one nutrient.
    pub fn finding(&self, nutrient: Nutrient) -> Option<&NutrientFinding> {
        self.findings.iter().find(|f| f.nutrient == nutrient)
    }

    /// Number of deficient nutrients in this report.
    pub fn deficient_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.status.is_deficient())
            .count()
    }
}
