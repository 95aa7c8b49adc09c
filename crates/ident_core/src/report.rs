//! Display-field computation for the result panel.
//!
//! Everything the GUI writes into the result section is computed here from
//! the wire types, so placeholder and sentinel handling stays testable
//! without a UI context.

use crate::model::{Prediction, TaxonGuess, TaxonInfo};

/// Placeholder written to a field whose value is unavailable.
pub const PLACEHOLDER: &str = "-";

/// Fixed three-decimal confidence display.
pub fn confidence_display(confidence: f64) -> String {
    format!("{confidence:.3}")
}

/// Field values for one guess row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessView {
    pub name: String,
    pub confidence: String,
    pub confidence_text: String,
}

impl GuessView {
    fn from_guess(guess: &TaxonGuess) -> Self {
        Self {
            name: guess.taxon.clone(),
            confidence: confidence_display(guess.confidence),
            confidence_text: guess.confidence_text.clone().unwrap_or_default(),
        }
    }
}

/// Primary result fields, ready to write to the panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimaryView {
    pub species: GuessView,
    pub genus: GuessView,
    pub notes: String,
    pub top_species: Vec<GuessView>,
    pub top_genus: Vec<GuessView>,
}

impl PrimaryView {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            species: GuessView::from_guess(&prediction.best_species),
            genus: GuessView::from_guess(&prediction.best_genus),
            notes: prediction.notes.clone(),
            top_species: prediction.top_species.iter().map(GuessView::from_guess).collect(),
            top_genus: prediction.top_genus.iter().map(GuessView::from_guess).collect(),
        }
    }
}

/// What happened to the enrichment lookup for this cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentOutcome {
    /// Best species was absent or the sentinel; no request was made.
    Skipped,
    /// Request failed, parse failed, or the service answered non-2xx.
    Failed,
    /// Success with a `null` body.
    Empty,
    Data(TaxonInfo),
}

/// Description field content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionView {
    /// Left as the cycle-start clear left it.
    Blank,
    /// No description available; render the placeholder.
    Placeholder,
    /// Markup from the taxon service (`<h4>`/`<p>`/`<a>` vocabulary).
    Markup(String),
}

/// Enrichment fields. Empty strings mean "leave as cleared".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentView {
    pub localized_name: String,
    pub occurrence_count: String,
    pub description: DescriptionView,
    pub scientific_name: String,
    pub invasive: bool,
    pub habitat: String,
}

impl EnrichmentView {
    pub fn from_outcome(outcome: &EnrichmentOutcome) -> Self {
        match outcome {
            EnrichmentOutcome::Skipped => Self {
                localized_name: PLACEHOLDER.to_owned(),
                occurrence_count: String::new(),
                description: DescriptionView::Blank,
                scientific_name: String::new(),
                invasive: false,
                habitat: String::new(),
            },
            EnrichmentOutcome::Failed | EnrichmentOutcome::Empty => Self {
                localized_name: PLACEHOLDER.to_owned(),
                occurrence_count: PLACEHOLDER.to_owned(),
                description: DescriptionView::Blank,
                scientific_name: PLACEHOLDER.to_owned(),
                invasive: false,
                habitat: PLACEHOLDER.to_owned(),
            },
            EnrichmentOutcome::Data(info) => Self::from_info(info),
        }
    }

    fn from_info(info: &TaxonInfo) -> Self {
        let or_placeholder =
            |value: &Option<String>| value.clone().unwrap_or_else(|| PLACEHOLDER.to_owned());
        let description = match (&info.description, info.has_descriptions) {
            (Some(markup), true) => DescriptionView::Markup(markup.clone()),
            _ => DescriptionView::Placeholder,
        };
        Self {
            localized_name: or_placeholder(&info.fi_name),
            occurrence_count: info
                .occurrence_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_owned()),
            description,
            scientific_name: or_placeholder(&info.scientific_name),
            invasive: info.is_invasive,
            habitat: or_placeholder(&info.primary_habitat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.87, "0.870")]
    #[case(0.9115, "0.911")]
    #[case(0.0, "0.000")]
    #[case(1.0, "1.000")]
    fn confidence_uses_three_decimals(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(confidence_display(value), expected);
    }

    #[test]
    fn primary_view_applies_sentinel_defaults() {
        let view = PrimaryView::from_prediction(&Prediction::default());
        assert_eq!(view.species.name, "Unknown");
        assert_eq!(view.species.confidence, "0.000");
        assert_eq!(view.species.confidence_text, "");
        assert_eq!(view.genus.name, "Unknown");
        assert_eq!(view.notes, "");
    }

    #[test]
    fn primary_view_formats_a_real_prediction() {
        let prediction: Prediction = serde_json::from_str(
            r#"{
                "best_species": {"taxon": "Vulpes vulpes", "confidence": 0.87, "confidence_text": "high"},
                "best_genus": {"taxon": "Vulpes", "confidence": 0.91}
            }"#,
        )
        .expect("parses");
        let view = PrimaryView::from_prediction(&prediction);
        assert_eq!(view.species.name, "Vulpes vulpes");
        assert_eq!(view.species.confidence, "0.870");
        assert_eq!(view.species.confidence_text, "high");
        assert_eq!(view.genus.confidence, "0.910");
    }

    #[test]
    fn skipped_sets_only_the_localized_name() {
        let view = EnrichmentView::from_outcome(&EnrichmentOutcome::Skipped);
        assert_eq!(view.localized_name, PLACEHOLDER);
        assert_eq!(view.occurrence_count, "");
        assert_eq!(view.description, DescriptionView::Blank);
    }

    #[rstest]
    #[case(EnrichmentOutcome::Failed)]
    #[case(EnrichmentOutcome::Empty)]
    fn failed_and_empty_clear_both_fields(#[case] outcome: EnrichmentOutcome) {
        let view = EnrichmentView::from_outcome(&outcome);
        assert_eq!(view.localized_name, PLACEHOLDER);
        assert_eq!(view.occurrence_count, PLACEHOLDER);
    }

    #[test]
    fn data_fields_fall_back_independently() {
        let info: TaxonInfo = serde_json::from_str(r#"{"occurrence_count": 1200}"#).expect("parses");
        let view = EnrichmentView::from_outcome(&EnrichmentOutcome::Data(info));
        assert_eq!(view.localized_name, PLACEHOLDER);
        assert_eq!(view.occurrence_count, "1200");
        assert_eq!(view.description, DescriptionView::Placeholder);
    }

    #[test]
    fn description_is_placeholder_when_flag_is_false() {
        let info: TaxonInfo = serde_json::from_str(
            r#"{"fi_name": "kettu", "occurrence_count": 1200,
                "has_descriptions": false, "description": "<h4>Ignored</h4>"}"#,
        )
        .expect("parses");
        let view = EnrichmentView::from_outcome(&EnrichmentOutcome::Data(info));
        assert_eq!(view.localized_name, "kettu");
        assert_eq!(view.occurrence_count, "1200");
        assert_eq!(view.description, DescriptionView::Placeholder);
    }

    #[test]
    fn description_markup_passes_through_when_flagged() {
        let info: TaxonInfo = serde_json::from_str(
            r#"{"has_descriptions": true, "description": "<h4>Elinympäristö</h4>\nrannat"}"#,
        )
        .expect("parses");
        let view = EnrichmentView::from_outcome(&EnrichmentOutcome::Data(info));
        assert_eq!(
            view.description,
            DescriptionView::Markup("<h4>Elinympäristö</h4>\nrannat".to_owned())
        );
    }
}
