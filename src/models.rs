//! Core data models for the ingestion pipeline.
//!
//! These types represent the documents and chunks that flow through the
//! pipeline and are handed back to the caller (chat UI, persistence layer).
//! A [`Document`] is immutable once emitted: any "update" is a replacement
//! of the whole value.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File type of an ingested document.
///
/// Classification is a pure function of the lowercased file extension
/// (see [`DocumentType::from_path`]) and is determined exactly once, at
/// ingestion time. It is never recomputed from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Image,
    Code,
    Csv,
    Text,
    Unknown,
}

/// Extensions recognized as source code.
///
/// Stands in for the original platform's "conforms to source code"
/// content-type check, as an explicit, testable table.
const CODE_EXTENSIONS: &[&str] = &[
    "py", "ipynb", "js", "ts", "jsx", "tsx", "swift", "java", "cpp", "cc", "c", "h", "hpp", "rs",
    "go", "rb", "php", "cs", "kt", "scala", "sh", "pl", "lua", "sql", "html", "css", "xml", "json",
    "yaml", "yml", "toml",
];

/// Extensions recognized as raster images.
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp", "heic",
];

/// Extensions recognized as plain text.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "log", "rtf"];

impl DocumentType {
    /// Classify a file by its extension.
    ///
    /// Files with no extension, or an extension not in any table, are
    /// `Unknown`. Matching is case-insensitive.
    pub fn from_path(path: &Path) -> Self {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => e.to_ascii_lowercase(),
            None => return DocumentType::Unknown,
        };

        match ext.as_str() {
            "pdf" => DocumentType::Pdf,
            "csv" => DocumentType::Csv,
            e if IMAGE_EXTENSIONS.contains(&e) => DocumentType::Image,
            e if CODE_EXTENSIONS.contains(&e) => DocumentType::Code,
            e if TEXT_EXTENSIONS.contains(&e) => DocumentType::Text,
            _ => DocumentType::Unknown,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Image => "image",
            DocumentType::Code => "code",
            DocumentType::Csv => "csv",
            DocumentType::Text => "text",
            DocumentType::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// One paragraph-aligned slice of a document's content.
///
/// Chunks are read in `index` order and never reordered. Adjacent chunks
/// may share up to `overlap` trailing/leading characters (see
/// [`crate::chunk`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: Uuid,
    pub content: String,
    pub index: usize,
}

/// One ingested file attached to a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    /// Display name, derived from the source path's file name.
    pub filename: String,
    /// Original file location; may be dropped once content is captured.
    pub source_path: Option<PathBuf>,
    pub doc_type: DocumentType,
    /// Full extracted text. `None` only if the pipeline chose to surface a
    /// failed extraction as absent content rather than an error.
    pub content: Option<String>,
    /// Present only when `content` exceeded the configured chunk size.
    /// When present: non-empty, with indices exactly `0..n`.
    pub chunks: Option<Vec<DocumentChunk>>,
    /// Byte length of the source file, best-effort (0 if unreadable).
    pub file_size: u64,
    pub created_at: DateTime<Utc>,
}
