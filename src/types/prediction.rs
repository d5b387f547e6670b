//! Classifier output types: nutrients, sufficiency statuses, prediction vector

use serde::{Deserialize, Serialize};

/// The three macronutrients the model classifies, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// Fixed processing order — also the display order and the
    /// concatenation order of the spoken summary.
    pub const ALL: [Self; 3] = [Self::Nitrogen, Self::Phosphorus, Self::Potassium];

    /// Output column of this nutrient in the prediction vector.
    pub const fn index(self) -> usize {
        match self {
            Self::Nitrogen => 0,
            Self::Phosphorus => 1,
            Self::Potassium => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nitrogen => "Nitrogen",
            Self::Phosphorus => "Phosphorus",
            Self::Potassium => "Potassium",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Binary sufficiency outcome for one nutrient (model flag 0 = deficient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientStatus {
    Deficient,
    Sufficient,
}

impl NutrientStatus {
    /// Map a raw model output flag: 0 → Deficient, anything else → Sufficient.
    pub const fn from_flag(flag: u8) -> Self {
        if flag == 0 {
            Self::Deficient
        } else {
            Self::Sufficient
        }
    }

    pub const fn is_deficient(self) -> bool {
        matches!(self, Self::Deficient)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deficient => "Deficient",
            Self::Sufficient => "Sufficient",
        }
    }
}

impl std::fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered triple of sufficiency statuses, positionally aligned to
/// [`Nutrient::ALL`]. Always exactly 3 entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionVector {
    statuses: [NutrientStatus; 3],
}

impl PredictionVector {
    pub const fn new(statuses: [NutrientStatus; 3]) -> Self {
        Self { statuses }
    }

    /// Build from raw binary model flags in [N, P, K] order.
    pub const fn from_flags(flags: [u8; 3]) -> Self {
        Self {
            statuses: [
                NutrientStatus::from_flag(flags[0]),
                NutrientStatus::from_flag(flags[1]),
                NutrientStatus::from_flag(flags[2]),
            ],
        }
    }

    /// Status of one nutrient.
    pub const fn status(&self, nutrient: Nutrient) -> NutrientStatus {
        self.statuses[nutrient.index()]
    }

    /// Statuses in [N, P, K] order.
    pub const fn statuses(&self) -> &[NutrientStatus; 3] {
        &self.statuses
    }
}
