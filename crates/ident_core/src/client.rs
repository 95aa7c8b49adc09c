use reqwest::blocking::Client;
use reqwest::header;
use serde_json::json;

use crate::error::IdentError;
use crate::model::{PredictResponse, Prediction, TaxonInfo, UNKNOWN_TAXON};

/// Blocking client for the prediction and taxon-lookup endpoints.
///
/// No retries and no explicit timeouts; both are delegated to reqwest
/// defaults. One `predict` call is issued per encode cycle.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `{base}/predict` with `{"image": <base64>}` and JSON
    /// content-type/accept headers.
    ///
    /// The body is parsed as JSON regardless of status code, matching the
    /// service contract: an unparsable body is a transport failure, a parsed
    /// body without `prediction` a shape failure.
    pub fn predict(&self, image_base64: &str) -> Result<Prediction, IdentError> {
        let url = format!("{}/predict", self.base_url);
        let response = self
            .http
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(&json!({ "image": image_base64 }))
            .send()
            .map_err(IdentError::Transport)?;
        let status = response.status();
        let body = response.text().map_err(IdentError::Transport)?;
        let parsed: PredictResponse =
            serde_json::from_str(&body).map_err(IdentError::MalformedResponse)?;
        match parsed.prediction {
            Some(prediction) => Ok(prediction),
            None => {
                tracing::warn!(%status, "prediction response carried no prediction field");
                Err(IdentError::MissingPrediction)
            }
        }
    }

    /// GET `{base}/taxon/{name}` with the name percent-encoded.
    ///
    /// `Ok(None)` is a success with a `null` body. Any `Err` is soft for the
    /// caller: degrade to placeholders, never alert.
    pub fn taxon(&self, name: &str) -> Result<Option<TaxonInfo>, IdentError> {
        let url = format!("{}/taxon/{}", self.base_url, urlencoding::encode(name));
        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .map_err(IdentError::TaxonTransport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(IdentError::TaxonStatus(status.as_u16()));
        }
        let body = response.text().map_err(IdentError::TaxonTransport)?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body).map_err(IdentError::TaxonMalformed)
    }
}

/// Enrichment is only worth a request when the best species is a real name.
pub fn should_enrich(taxon: &str) -> bool {
    !taxon.is_empty() && taxon != UNKNOWN_TAXON
}
