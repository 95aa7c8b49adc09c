pub mod client;
pub mod encode;
pub mod error;
pub mod input;
pub mod model;
pub mod report;

pub use client::{ApiClient, should_enrich};
pub use encode::{EncodedImage, encode_file, payload_after_comma};
pub use error::IdentError;
pub use input::{SelectedFile, declared_mime, first_path, validate};
pub use model::{Prediction, TaxonGuess, TaxonInfo, UNKNOWN_TAXON};
pub use report::{
    DescriptionView, EnrichmentOutcome, EnrichmentView, GuessView, PLACEHOLDER, PrimaryView,
    confidence_display,
};
