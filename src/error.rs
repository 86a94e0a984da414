//! Pipeline error taxonomy.
//!
//! Every failure is fatal to the single file being ingested and surfaces to
//! the caller exactly once: no partial documents, no retries. Sibling
//! ingestions running concurrently are unaffected.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned by the ingestion pipeline and its stages.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Source file exists but is not readable.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// No encoding in the fallback chain could decode the bytes.
    #[error("could not decode file with any known encoding")]
    Decode,

    /// PDF failed to open, image failed to decode, or the OCR engine failed.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// Residual I/O failure (neither missing file nor permission).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Map a read error to the taxonomy, attributing it to `path`.
    pub(crate) fn from_read(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => IngestError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                IngestError::PermissionDenied(path.to_path_buf())
            }
            _ => IngestError::Io(err),
        }
    }
}
