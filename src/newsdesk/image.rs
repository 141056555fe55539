//! Image ingestion.
//!
//! Article images are stored inline on the article as self-describing data
//! URLs (`data:image/png;base64,...`), so a stored collection never points at
//! files outside the slot.

use crate::error::{NewsdeskError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An inline image encoded as a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageData(String);

impl ImageData {
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Result<Self> {
        if !mime.starts_with("image/") {
            return Err(NewsdeskError::UnsupportedImage(format!(
                "{} is not an image type",
                mime
            )));
        }
        Ok(Self(format!("data:{};base64,{}", mime, BASE64.encode(bytes))))
    }

    /// Reads an image file and encodes it. The MIME type comes from the extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mime = mime_for_path(path).ok_or_else(|| {
            NewsdeskError::UnsupportedImage(format!("{}", path.display()))
        })?;
        let bytes = fs::read(path)?;
        let image = Self::from_bytes(mime, &bytes)?;
        tracing::debug!(
            path = %path.display(),
            mime,
            size = bytes.len(),
            encoded = image.encoded_len(),
            "staged image"
        );
        Ok(image)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type declared in the data URL header.
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let header = rest.split(',').next()?;
        header.split(';').next().filter(|m| !m.is_empty())
    }

    /// Size of the encoded string, which is what counts against the slot quota.
    pub fn encoded_len(&self) -> usize {
        self.0.len()
    }
}

pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}
