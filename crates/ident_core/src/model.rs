use serde::Deserialize;

/// Name the prediction service reports when it abstains from a guess.
pub const UNKNOWN_TAXON: &str = "Unknown";

/// One ranked guess as the prediction service reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxonGuess {
    pub taxon: String,
    pub confidence: f64,
    #[serde(default)]
    pub confidence_text: Option<String>,
}

impl Default for TaxonGuess {
    /// Sentinel substituted whenever the service omits a guess.
    fn default() -> Self {
        Self {
            taxon: UNKNOWN_TAXON.to_owned(),
            confidence: 0.0,
            confidence_text: None,
        }
    }
}

/// Body of a successful `/predict` call. Every field is defaulted so a
/// partially populated response still renders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub best_species: TaxonGuess,
    #[serde(default)]
    pub best_genus: TaxonGuess,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub top_species: Vec<TaxonGuess>,
    #[serde(default)]
    pub top_genus: Vec<TaxonGuess>,
    #[serde(default)]
    pub genus_superiority: Option<f64>,
}

/// Top-level `/predict` envelope. A missing `prediction` is an error the
/// caller must surface.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub prediction: Option<Prediction>,
}

/// Localized metadata for the best species. All fields are individually
/// optional; an error-shaped body (`{"error": ...}`) deserializes to an
/// empty value rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaxonInfo {
    #[serde(default)]
    pub fi_name: Option<String>,
    #[serde(default)]
    pub occurrence_count: Option<u64>,
    #[serde(default)]
    pub has_descriptions: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub is_invasive: bool,
    #[serde(default)]
    pub primary_habitat: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_guesses_fall_back_to_the_sentinel() {
        let parsed: PredictResponse =
            serde_json::from_str(r#"{"prediction": {}}"#).expect("empty prediction parses");
        let prediction = parsed.prediction.expect("prediction present");
        assert_eq!(prediction.best_species.taxon, UNKNOWN_TAXON);
        assert_eq!(prediction.best_species.confidence, 0.0);
        assert_eq!(prediction.best_genus, TaxonGuess::default());
        assert_eq!(prediction.notes, "");
        assert!(prediction.top_species.is_empty());
    }

    #[test]
    fn missing_prediction_field_is_detectable() {
        let parsed: PredictResponse =
            serde_json::from_str(r#"{"status": "ok"}"#).expect("envelope parses");
        assert!(parsed.prediction.is_none());
    }

    #[test]
    fn full_prediction_round_trips() {
        let body = r#"{
            "prediction": {
                "best_species": {"taxon": "Vulpes vulpes", "confidence": 0.87, "confidence_text": "high"},
                "best_genus": {"taxon": "Vulpes", "confidence": 0.91},
                "top_species": [{"taxon": "Vulpes vulpes", "confidence": 0.87}],
                "genus_superiority": 0.04,
                "notes": "blurry image"
            }
        }"#;
        let parsed: PredictResponse = serde_json::from_str(body).expect("parses");
        let prediction = parsed.prediction.expect("prediction present");
        assert_eq!(prediction.best_species.taxon, "Vulpes vulpes");
        assert_eq!(prediction.best_species.confidence_text.as_deref(), Some("high"));
        assert_eq!(prediction.best_genus.confidence_text, None);
        assert_eq!(prediction.top_species.len(), 1);
        assert_eq!(prediction.genus_superiority, Some(0.04));
        assert_eq!(prediction.notes, "blurry image");
    }

    #[test]
    fn null_taxon_body_deserializes_to_none() {
        let parsed: Option<TaxonInfo> = serde_json::from_str("null").expect("null parses");
        assert!(parsed.is_none());
    }

    #[test]
    fn error_shaped_taxon_body_degrades_to_empty_fields() {
        let parsed: TaxonInfo =
            serde_json::from_str(r#"{"error": "Taxon not found"}"#).expect("error body parses");
        assert_eq!(parsed, TaxonInfo::default());
        assert!(parsed.fi_name.is_none());
        assert!(!parsed.has_descriptions);
    }

    #[test]
    fn taxon_fields_are_independent() {
        let parsed: TaxonInfo =
            serde_json::from_str(r#"{"fi_name": "kettu", "has_descriptions": true}"#)
                .expect("partial body parses");
        assert_eq!(parsed.fi_name.as_deref(), Some("kettu"));
        assert!(parsed.occurrence_count.is_none());
        assert!(parsed.has_descriptions);
        assert!(parsed.description.is_none());
    }
}
