//! File-backed proof provider for the terminal.

use std::path::PathBuf;

use arena_core::proof::{CapturedImage, ProofError, ProofProvider, ProofSource, mime_type_for};
use async_trait::async_trait;
use bytes::Bytes;

/// Serves a screenshot from disk as the "gallery" pick.
///
/// A terminal has no camera, so camera permission is always denied. Gallery
/// access is always granted; a missing or unreadable file surfaces from
/// [`ProofProvider::acquire`] as an I/O error instead.
pub struct FileProofProvider {
    path: PathBuf,
}

impl FileProofProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProofProvider for FileProofProvider {
    async fn ensure_permission(&self, source: ProofSource) -> bool {
        match source {
            ProofSource::Gallery => true,
            ProofSource::Camera => false,
        }
    }

    async fn acquire(&self, _source: ProofSource) -> Result<Option<CapturedImage>, ProofError> {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "screenshot".to_string());
        let mime_type = mime_type_for(&file_name)?;
        let bytes = tokio::fs::read(&self.path).await?;

        Ok(Some(CapturedImage {
            uri: format!("file://{}", self.path.display()),
            file_name,
            mime_type: mime_type.to_string(),
            bytes: Bytes::from(bytes),
        }))
    }
}
