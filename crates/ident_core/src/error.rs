use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for one upload/identify cycle.
///
/// Primary failures (validation, read, prediction transport/shape) abort the
/// cycle and carry an alert text. Taxon-lookup failures are soft: callers
/// degrade the affected fields to placeholders and never alert.
#[derive(Debug, Error)]
pub enum IdentError {
    /// The selected file does not carry an `image/` type.
    #[error("not an image file: {0}")]
    NotImage(String),
    /// The selected file could not be read.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The prediction request failed on the wire.
    #[error("prediction request failed")]
    Transport(#[source] reqwest::Error),
    /// The prediction response body was not JSON.
    #[error("malformed prediction response")]
    MalformedResponse(#[source] serde_json::Error),
    /// The prediction response parsed but carried no `prediction` field.
    #[error("prediction response carried no prediction")]
    MissingPrediction,
    /// The taxon lookup answered with a non-success status.
    #[error("taxon lookup returned status {0}")]
    TaxonStatus(u16),
    /// The taxon lookup failed on the wire.
    #[error("taxon lookup request failed")]
    TaxonTransport(#[source] reqwest::Error),
    /// The taxon lookup body was not JSON.
    #[error("malformed taxon response")]
    TaxonMalformed(#[source] serde_json::Error),
}

impl IdentError {
    /// Alert text for the user, `None` for the soft taxon-lookup failures.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            IdentError::NotImage(_) => Some("Please select an image file."),
            IdentError::Read { .. }
            | IdentError::Transport(_)
            | IdentError::MalformedResponse(_) => {
                Some("Error processing image. Please try again.")
            }
            IdentError::MissingPrediction => Some("Invalid response from the server"),
            IdentError::TaxonStatus(_)
            | IdentError::TaxonTransport(_)
            | IdentError::TaxonMalformed(_) => None,
        }
    }
}
