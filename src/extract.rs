//! Content extraction for the supported document types.
//!
//! The pipeline hands this module a path plus the file's raw bytes; it
//! returns plain UTF-8 text. PDF parsing is pure-Rust (`pdf-extract`).
//! Image OCR shells out to an external engine (tesseract by default) —
//! accuracy is preferred over latency since OCR runs once per attachment,
//! so the engine is invoked with its LSTM (`--oem 1`) mode.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::config::OcrConfig;
use crate::decode::decode_text;
use crate::error::IngestError;
use crate::models::DocumentType;

/// Placeholder content for unknown file types whose bytes could not be
/// decoded. Unknown types must never abort attachment of a document.
pub const UNKNOWN_TYPE_FALLBACK: &str = "Could not extract content from this file type.";

/// Extract text from `bytes` according to the document's classified type.
///
/// - `Pdf` → [`extract_pdf`]
/// - `Image` → [`ocr_image`]
/// - `Code`, `Csv`, `Text` → [`decode_text`]
/// - `Unknown` → [`decode_text`], absorbing failure into
///   [`UNKNOWN_TYPE_FALLBACK`]
pub fn extract_content(
    path: &Path,
    bytes: &[u8],
    doc_type: DocumentType,
    ocr: &OcrConfig,
) -> Result<String, IngestError> {
    match doc_type {
        DocumentType::Pdf => extract_pdf(bytes),
        DocumentType::Image => ocr_image(path, bytes, ocr),
        DocumentType::Code | DocumentType::Csv | DocumentType::Text => decode_text(bytes),
        DocumentType::Unknown => Ok(decode_text(bytes).unwrap_or_else(|_| {
            warn!(path = %path.display(), "unknown file type could not be decoded, using placeholder");
            UNKNOWN_TYPE_FALLBACK.to_string()
        })),
    }
}

/// Extract the concatenated text of every page of a PDF.
///
/// Pages that yield no text are skipped; a newline is inserted after a
/// page's text only when it does not already end in one and the page is not
/// the last. An empty result is success, not failure — a scanned PDF with
/// no text layer legitimately extracts to nothing, and this pipeline does
/// not fall back to OCR for PDFs.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, IngestError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| IngestError::Extraction(format!("cannot open PDF: {}", e)))?;

    let page_count = pages.len();
    let mut out = String::new();
    for (i, page_text) in pages.iter().enumerate() {
        if page_text.is_empty() {
            continue;
        }
        out.push_str(page_text);
        if !page_text.ends_with('\n') && i < page_count - 1 {
            out.push('\n');
        }
    }

    if out.is_empty() {
        warn!("PDF has no embedded text layer ({} pages)", page_count);
    } else {
        debug!(pages = page_count, chars = out.chars().count(), "extracted PDF text");
    }
    Ok(out)
}

/// Run OCR over an image file and return the recognized text.
///
/// The bytes must decode as an image; the engine's output is returned
/// verbatim, preserving the region order the engine emits (regions are
/// newline-joined by the engine itself). Engine failures surface once, with
/// no retry.
pub fn ocr_image(path: &Path, bytes: &[u8], ocr: &OcrConfig) -> Result<String, IngestError> {
    image::load_from_memory(bytes)
        .map_err(|e| IngestError::Extraction(format!("cannot load image: {}", e)))?;

    let output = Command::new(&ocr.command)
        .arg(path)
        .arg("stdout")
        .args(["--oem", "1"])
        .args(["-l", &ocr.language])
        .output()
        .map_err(|e| {
            IngestError::Extraction(format!("failed to run OCR engine '{}': {}", ocr.command, e))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IngestError::Extraction(format!(
            "OCR engine exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!(chars = text.chars().count(), "OCR complete");
    Ok(text)
}
