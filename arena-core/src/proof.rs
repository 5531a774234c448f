//! Proof-of-payment capture.
//!
//! The flow does not talk to the device directly; a [`ProofProvider`]
//! owns permission prompts and the gallery or camera picker.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Where the proof image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofSource {
    Gallery,
    Camera,
}

impl std::fmt::Display for ProofSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProofSource::Gallery => write!(f, "gallery"),
            ProofSource::Camera => write!(f, "camera"),
        }
    }
}

/// An image picked or captured on the device, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// Local reference to the image (file path or content URI).
    pub uri: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

#[derive(Debug, Error)]
pub enum ProofError {
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
}

/// Device-side access to images.
#[async_trait]
pub trait ProofProvider: Send + Sync {
    /// Ask for (or check) permission to use `source`.
    async fn ensure_permission(&self, source: ProofSource) -> bool;

    /// Obtain an image from `source`. `Ok(None)` means the user cancelled.
    async fn acquire(&self, source: ProofSource) -> Result<Option<CapturedImage>, ProofError>;
}

/// Guess an image MIME type from a file name.
pub fn mime_type_for(file_name: &str) -> Result<&'static str, ProofError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "webp" => Ok("image/webp"),
        "heic" => Ok("image/heic"),
        _ => Err(ProofError::UnsupportedType(file_name.to_owned())),
    }
}
