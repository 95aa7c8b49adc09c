use std::fs;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::IdentError;
use crate::input::SelectedFile;

/// Base64 payload plus the data URL and raw bytes the preview uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Wire payload: the data URL segment after the first comma.
    pub base64: String,
    pub data_url: String,
    /// Raw file bytes, kept so the caller can decode a preview without a
    /// second read.
    pub bytes: Vec<u8>,
}

/// Reads the file and produces `data:<mime>;base64,<payload>`. The wire
/// payload is re-extracted from the URL rather than kept separately; the
/// data URL is the source of truth.
pub fn encode_file(file: &SelectedFile) -> Result<EncodedImage, IdentError> {
    let bytes = fs::read(&file.path).map_err(|source| IdentError::Read {
        path: file.path.clone(),
        source,
    })?;
    let data_url = format!("data:{};base64,{}", file.mime, BASE64.encode(&bytes));
    let base64 = payload_after_comma(&data_url).unwrap_or("").to_owned();
    Ok(EncodedImage {
        base64,
        data_url,
        bytes,
    })
}

/// Payload segment of a data URL: everything after the first comma.
pub fn payload_after_comma(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, payload)| payload)
}
