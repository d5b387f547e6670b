//! Soil sample input types and the classifier feature row

use serde::{Deserialize, Serialize};

/// Valid ranges for the numeric sample fields.
///
/// These bounds come from the training data of the model artifact; the
/// encoder rejects anything outside them before a feature row is built.
pub mod input_bounds {
    /// Temperature range (°C)
    pub const TEMPERATURE: (f64, f64) = (10.0, 50.0);
    /// Relative humidity range (%)
    pub const HUMIDITY: (f64, f64) = (10.0, 100.0);
    /// Soil pH range
    pub const PH: (f64, f64) = (3.0, 10.0);
    /// Electrical conductivity range (mS/cm)
    pub const EC: (f64, f64) = (0.0, 5.0);
    /// Organic carbon range (%)
    pub const ORGANIC_CARBON: (f64, f64) = (0.1, 3.0);
}

/// Soil texture classes the model was trained on.
///
/// The integer codes are an implicit contract with the model artifact and
/// must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Loamy,
    Clay,
    Sandy,
    Silty,
}

impl SoilType {
    /// All variants in code order, for option listings.
    pub const ALL: [Self; 4] = [Self::Loamy, Self::Clay, Self::Sandy, Self::Silty];

    /// Integer code used in the feature row.
    pub const fn code(self) -> u8 {
        match self {
            Self::Loamy => 0,
            Self::Clay => 1,
            Self::Sandy => 2,
            Self::Silty => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loamy => "Loamy",
            Self::Clay => "Clay",
            Self::Sandy => "Sandy",
            Self::Silty => "Silty",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Crop classes the model was trained on. Codes are part of the model contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    Rice,
    Wheat,
    Maize,
    Sugarcane,
    Millet,
}

impl CropType {
    /// All variants in code order, for option listings.
    pub const ALL: [Self; 5] = [
        Self::Rice,
        Self::Wheat,
        Self::Maize,
        Self::Sugarcane,
        Self::Millet,
    ];

    /// Integer code used in the feature row.
    pub const fn code(self) -> u8 {
        match self {
            Self::Rice => 0,
            Self::Wheat => 1,
            Self::Maize => 2,
            Self::Sugarcane => 3,
            Self::Millet => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rice => "Rice",
            Self::Wheat => "Wheat",
            Self::Maize => "Maize",
            Self::Sugarcane => "Sugarcane",
            Self::Millet => "Millet",
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw user-entered measurements for one prediction request.
///
/// The categorical fields are closed enums, so an out-of-set selection is
/// rejected at deserialization time rather than checked downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilSample {
    /// Temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Soil pH
    pub ph: f64,
    /// Electrical conductivity (mS/cm)
    pub ec: f64,
    /// Organic carbon (%)
    pub organic_carbon: f64,
    /// Soil texture class
    pub soil_type: SoilType,
    /// Crop being grown
    pub crop_type: CropType,
}

/// Number of columns in the classifier feature row.
pub const FEATURE_COUNT: usize = 7;

/// Single-row numeric input to the classifier.
///
/// Column order is fixed: temperature, humidity, ph, ec, organic_carbon,
/// soil code, crop code. Built fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// The feature row in model column order.
    pub const fn as_row(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Value of a single column.
    pub fn feature(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_codes_match_model_contract() {
        assert_eq!(SoilType::Loamy.code(), 0);
        assert_eq!(SoilType::Clay.code(), 1);
        assert_eq!(SoilType::Sandy.code(), 2);
        assert_eq!(SoilType::Silty.code(), 3);
    }

    #[test]
    fn crop_codes_match_model_contract() {
        assert_eq!(CropType::Rice.code(), 0);
        assert_eq!(CropType::Wheat.code(), 1);
        assert_eq!(CropType::Maize.code(), 2);
        assert_eq!(CropType::Sugarcane.code(), 3);
        assert_eq!(CropType::Millet.code(), 4);
    }

    #[test]
    fn unknown_categorical_is_rejected_at_deserialization() {
        let raw = r#"{
            "temperature": 25.0, "humidity": 60.0, "ph": 6.5, "ec": 1.2,
            "organic_carbon": 1.0, "soil_type": "Chalky", "crop_type": "Rice"
        }"#;
        assert!(serde_json::from_str::<SoilSample>(raw).is_err());
    }

    #[test]
    fn sample_round_trips_through_json() {
        let sample = SoilSample {
            temperature: 25.0,
            humidity: 60.0,
            ph: 6.5,
            ec: 1.2,
            organic_carbon: 1.0,
            soil_type: SoilType::Clay,
            crop_type: CropType::Maize,
        };
        let json = serde_json::to_string(&sample).unwrap();
        let back: SoilSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back.soil_type, SoilType::Clay);
        assert_eq!(back.crop_type, CropType::Maize);
    }
}
