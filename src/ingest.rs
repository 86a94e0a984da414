//! Ingestion pipeline orchestration.
//!
//! Coordinates the full attachment flow: stat → classify → extract →
//! conditional chunking → [`Document`] assembly. Each call is independent
//! and stateless; callers may run many ingestions concurrently and fan in
//! results — a failure in one file never affects its siblings.
//!
//! All failures are all-or-nothing for the single file: no partial
//! `Document` is ever returned, and nothing is retried. The pipeline only
//! reads the source file; it never mutates or deletes it.

use std::path::Path;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::chunk::split_text;
use crate::config::Config;
use crate::error::IngestError;
use crate::extract::extract_content;
use crate::models::{Document, DocumentChunk, DocumentType};

/// Ingest one file into a [`Document`].
///
/// Stages run sequentially within this call; the async surface exists so
/// callers can run one ingestion per attached file concurrently. No timeout
/// is applied here — OCR and PDF parsing are CPU-bound — so callers wanting
/// one wrap the whole future.
///
/// # Errors
///
/// - [`IngestError::NotFound`] / [`IngestError::PermissionDenied`] for
///   unreadable sources
/// - [`IngestError::Extraction`] for corrupt PDFs, undecodable images, or
///   OCR engine failures
/// - [`IngestError::Decode`] when no encoding fits a text-like file
pub async fn ingest_file(path: &Path, config: &Config) -> Result<Document, IngestError> {
    // Size is best-effort metadata; a failed stat is not fatal.
    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    let doc_type = DocumentType::from_path(path);
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(file = %filename, %doc_type, size = file_size, "ingesting");

    let bytes = std::fs::read(path).map_err(|e| IngestError::from_read(e, path))?;
    let content = extract_content(path, &bytes, doc_type, &config.ocr)?;

    let chunk_size = config.chunking.chunk_size;
    let chunks = if content.chars().count() > chunk_size {
        let pieces = split_text(&content, chunk_size, config.chunking.overlap);
        debug!(file = %filename, chunks = pieces.len(), "content split");
        Some(
            pieces
                .into_iter()
                .enumerate()
                .map(|(index, content)| DocumentChunk {
                    id: Uuid::new_v4(),
                    content,
                    index,
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(Document {
        id: Uuid::new_v4(),
        filename,
        source_path: Some(path.to_path_buf()),
        doc_type,
        content: Some(content),
        chunks,
        file_size,
        created_at: Utc::now(),
    })
}
