use std::path::{Path, PathBuf};

use crate::error::IdentError;

/// A validated user selection ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// Effective MIME type, always `image/*` once validated.
    pub mime: String,
}

/// Both drop events and the file picker hand over a collection; only the
/// first entry is processed.
pub fn first_path(candidates: &[PathBuf]) -> Option<&PathBuf> {
    candidates.first()
}

/// Extension-derived MIME type, the desktop stand-in for the type a browser
/// declares on a picked file.
pub fn declared_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Accepts any `image/*` type. A non-empty `mime_hint` (e.g. the type a
/// windowing layer attached to a dropped file) wins over the extension.
pub fn validate(path: &Path, mime_hint: Option<&str>) -> Result<SelectedFile, IdentError> {
    let mime = mime_hint
        .filter(|hint| !hint.is_empty())
        .map(str::to_owned)
        .or_else(|| declared_mime(path).map(str::to_owned));
    match mime {
        Some(mime) if mime.starts_with("image/") => Ok(SelectedFile {
            path: path.to_path_buf(),
            mime,
        }),
        _ => Err(IdentError::NotImage(path.display().to_string())),
    }
}
