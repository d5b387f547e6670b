//! Bilingual result formatter
//!
//! Maps a prediction vector plus the static nutrient table into per-nutrient
//! display strings and the Kannada spoken summary. Pure and total over any
//! prediction vector; nutrients are always processed in
//! [Nitrogen, Phosphorus, Potassium] order.

use crate::types::{
    Nutrient, NutrientFinding, NutrientStatus, PredictionReport, PredictionVector, Suggestion,
};

/// Static bilingual labels and fertilizer recommendations for one nutrient.
#[derive(Debug, Clone, Copy)]
pub struct NutrientInfo {
    pub nutrient: Nutrient,
    pub label_en: &'static str,
    pub label_kn: &'static str,
    pub recommendation_en: &'static str,
    pub recommendation_kn: &'static str,
}

/// The lookup table, indexed in [`Nutrient::ALL`] order.
pub const NUTRIENT_INFO: [NutrientInfo; 3] = [
    NutrientInfo {
        nutrient: Nutrient::Nitrogen,
        label_en: "Nitrogen",
        label_kn: "ನೈಟ್ರೋಜನ್",
        recommendation_en: "Apply Urea or Vermicompost.",
        recommendation_kn: "ಯುರಿಯಾ ಅಥವಾ ವರ್ಮಿಕಂಪೋಸ್ಟ್ ಹಾಕಿ.",
    },
    NutrientInfo {
        nutrient: Nutrient::Phosphorus,
        label_en: "Phosphorus",
        label_kn: "ಫಾಸ್ಪರಸ್",
        recommendation_en: "Apply Single Super Phosphate or Bone meal.",
        recommendation_kn: "ಸಿಂಗಲ್ ಸೂಪರ್ ಫಾಸ್ಫೇಟ್ ಅಥವಾ ಅಸ್ಥಿಮಜ್ಜೆ ಹಾಕಿ.",
    },
    NutrientInfo {
        nutrient: Nutrient::Potassium,
        label_en: "Potassium",
        label_kn: "ಪೊಟಾಷಿಯಮ್",
        recommendation_en: "Apply Muriate of Potash or Wood ash.",
        recommendation_kn: "ಮ್ಯೂರಿಯೇಟ್ ಆಫ್ ಪೊಟಾಶ್ ಅಥವಾ ಮರದ ಬೂದಿ ಹಾಕಿ.",
    },
];

/// Kannada phrase appended to a deficient nutrient's label.
const KN_DEFICIENT: &str = "ಕೊರತೆ ಇದೆ.";
/// Kannada phrase appended to a sufficient nutrient's label.
const KN_SUFFICIENT: &str = "ಸರಿಯಾಗಿಯೇ ಇದೆ.";

/// Table entry for one nutrient.
pub fn nutrient_info(nutrient: Nutrient) -> &'static NutrientInfo {
    &NUTRIENT_INFO[nutrient.index()]
}

/// Format a prediction vector into the bilingual report.
///
/// Per nutrient: status line in both languages, plus a fertilizer
/// suggestion when deficient. The spoken summary concatenates one Kannada
/// fragment per nutrient in fixed order regardless of how many are
/// deficient.
pub fn format(prediction: &PredictionVector) -> PredictionReport {
    let mut findings = Vec::with_capacity(NUTRIENT_INFO.len());
    let mut spoken_fragments = Vec::with_capacity(NUTRIENT_INFO.len());

    for info in &NUTRIENT_INFO {
        let status = prediction.status(info.nutrient);
        let (english_text, kannada_text, suggestion, fragment) = match status {
            NutrientStatus::Deficient => (
                format!("Deficient in {}", info.label_en),
                format!("{} {KN_DEFICIENT}", info.label_kn),
                Some(Suggestion {
                    english: info.recommendation_en.to_string(),
                    kannada: info.recommendation_kn.to_string(),
                }),
                format!("{} {KN_DEFICIENT} {}", info.label_kn, info.recommendation_kn),
            ),
            NutrientStatus::Sufficient => (
                format!("Sufficient {}", info.label_en),
                format!("{} {KN_SUFFICIENT}", info.label_kn),
                None,
                format!("{} {KN_SUFFICIENT}", info.label_kn),
            ),
        };

        findings.push(NutrientFinding {
            nutrient: info.nutrient,
            status,
            english_text,
            kannada_text,
            suggestion,
        });
        spoken_fragments.push(fragment);
    }

    PredictionReport {
        timestamp: chrono::Utc::now().timestamp().unsigned_abs(),
        findings,
        spoken_summary: spoken_fragments.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deficient_all() -> PredictionVector {
        PredictionVector::from_flags([0, 0, 0])
    }

    fn sufficient_all() -> PredictionVector {
        PredictionVector::from_flags([1, 1, 1])
    }

    #[test]
    fn always_three_findings_in_fixed_order() {
        for flags in [[0, 0, 0], [1, 1, 1], [0, 1, 0], [1, 0, 1]] {
            let report = format(&PredictionVector::from_flags(flags));
            assert_eq!(report.findings.len(), 3);
            let order: Vec<Nutrient> = report.findings.iter().map(|f| f.nutrient).collect();
            assert_eq!(order, Nutrient::ALL.to_vec());
        }
    }

    #[test]
    fn status_matches_flags() {
        let report = format(&PredictionVector::from_flags([0, 1, 0]));
        assert_eq!(
            report.finding(Nutrient::Nitrogen).unwrap().status,
            NutrientStatus::Deficient
        );
        assert_eq!(
            report.finding(Nutrient::Phosphorus).unwrap().status,
            NutrientStatus::Sufficient
        );
        assert_eq!(
            report.finding(Nutrient::Potassium).unwrap().status,
            NutrientStatus::Deficient
        );
    }

    #[test]
    fn all_deficient_carries_every_suggestion() {
        let report = format(&deficient_all());
        assert_eq!(report.deficient_count(), 3);

        let english: Vec<&str> = report
            .findings
            .iter()
            .map(|f| f.suggestion.as_ref().unwrap().english.as_str())
            .collect();
        assert_eq!(
            english,
            vec![
                "Apply Urea or Vermicompost.",
                "Apply Single Super Phosphate or Bone meal.",
                "Apply Muriate of Potash or Wood ash.",
            ]
        );

        for info in &NUTRIENT_INFO {
            assert!(report.spoken_summary.contains(info.recommendation_kn));
        }
    }

    #[test]
    fn all_sufficient_has_no_suggestions() {
        let report = format(&sufficient_all());
        assert_eq!(report.deficient_count(), 0);
        assert!(report.findings.iter().all(|f| f.suggestion.is_none()));
        assert_eq!(report.spoken_summary.matches(KN_SUFFICIENT).count(), 3);
        assert!(!report.spoken_summary.contains(KN_DEFICIENT));
    }

    #[test]
    fn mixed_prediction_only_flags_deficient_nutrients() {
        // Nitrogen and Potassium deficient, Phosphorus sufficient
        let report = format(&PredictionVector::from_flags([0, 1, 0]));

        let nitrogen = report.finding(Nutrient::Nitrogen).unwrap();
        assert_eq!(
            nitrogen.suggestion.as_ref().unwrap().english,
            "Apply Urea or Vermicompost."
        );

        let phosphorus = report.finding(Nutrient::Phosphorus).unwrap();
        assert!(phosphorus.suggestion.is_none());

        let potassium = report.finding(Nutrient::Potassium).unwrap();
        assert_eq!(
            potassium.suggestion.as_ref().unwrap().english,
            "Apply Muriate of Potash or Wood ash."
        );
    }

    #[test]
    fn spoken_summary_has_one_fragment_per_nutrient_in_order() {
        let report = format(&PredictionVector::from_flags([0, 1, 0]));
        let n = report.spoken_summary.find("ನೈಟ್ರೋಜನ್").unwrap();
        let p = report.spoken_summary.find("ಫಾಸ್ಪರಸ್").unwrap();
        let k = report.spoken_summary.find("ಪೊಟಾಷಿಯಮ್").unwrap();
        assert!(n < p && p < k);

        // One status phrase per nutrient, three in total
        let deficient = report.spoken_summary.matches(KN_DEFICIENT).count();
        let sufficient = report.spoken_summary.matches(KN_SUFFICIENT).count();
        assert_eq!(deficient + sufficient, 3);
    }

    #[test]
    fn format_is_idempotent() {
        let p = PredictionVector::from_flags([0, 1, 1]);
        let a = format(&p);
        let b = format(&p);
        assert_eq!(a.findings, b.findings);
        assert_eq!(a.spoken_summary, b.spoken_summary);
    }

    #[test]
    fn english_text_concatenates_status_and_label() {
        let report = format(&PredictionVector::from_flags([0, 1, 0]));
        assert_eq!(
            report.finding(Nutrient::Nitrogen).unwrap().english_text,
            "Deficient in Nitrogen"
        );
        assert_eq!(
            report.finding(Nutrient::Phosphorus).unwrap().english_text,
            "Sufficient Phosphorus"
        );
    }
}
