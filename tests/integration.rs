//! End-to-end pipeline tests: file on disk in, `Document` out.

use std::path::PathBuf;

use tempfile::TempDir;

use docpipe::config::Config;
use docpipe::error::IngestError;
use docpipe::ingest::ingest_file;
use docpipe::models::{Document, DocumentType};

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn config(chunk_size: usize, overlap: usize) -> Config {
    let mut config = Config::default();
    config.chunking.chunk_size = chunk_size;
    config.chunking.overlap = overlap;
    config
}

#[tokio::test]
async fn ingest_markdown_preserves_content() {
    let dir = TempDir::new().unwrap();
    let body = "# Title\n\nFirst paragraph.\n\nSecond paragraph.\n";
    let path = write_file(&dir, "doc.md", body.as_bytes());

    let doc = ingest_file(&path, &Config::default()).await.unwrap();
    assert_eq!(doc.doc_type, DocumentType::Text);
    assert_eq!(doc.content.as_deref(), Some(body));
    assert!(doc.chunks.is_none(), "short content must not be chunked");
    assert_eq!(doc.source_path.as_deref(), Some(path.as_path()));
}

#[tokio::test]
async fn ingest_csv_is_classified_and_decoded() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "table.csv", b"a,b,c\n1,2,3\n");

    let doc = ingest_file(&path, &Config::default()).await.unwrap();
    assert_eq!(doc.doc_type, DocumentType::Csv);
    assert_eq!(doc.content.as_deref(), Some("a,b,c\n1,2,3\n"));
}

#[tokio::test]
async fn ingest_latin1_source_file() {
    let dir = TempDir::new().unwrap();
    // "café" with a bare 0xE9: invalid UTF-8, valid ISO-8859-1.
    let path = write_file(&dir, "legacy.py", b"# caf\xE9\nprint(1)\n");

    let doc = ingest_file(&path, &Config::default()).await.unwrap();
    assert_eq!(doc.doc_type, DocumentType::Code);
    assert!(doc.content.unwrap().starts_with("# café"));
}

#[tokio::test]
async fn long_document_chunk_invariants() {
    let dir = TempDir::new().unwrap();
    let body = (0..40)
        .map(|i| format!("This is paragraph number {} of the test corpus.", i))
        .collect::<Vec<_>>()
        .join("\n\n");
    let path = write_file(&dir, "long.txt", body.as_bytes());

    let doc = ingest_file(&path, &config(120, 30)).await.unwrap();
    let chunks = doc.chunks.expect("long content must be chunked");

    assert!(!chunks.is_empty());
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.index, i, "indices must be 0..n with no gaps");
        assert!(!chunk.content.is_empty());
        assert!(chunk.content.chars().count() >= 1);
    }

    // Adjacent chunks carry the closed chunk's trailing characters.
    for pair in chunks.windows(2) {
        let prev: Vec<char> = pair[0].content.chars().collect();
        let carry = prev.len().min(30);
        let tail: String = prev[prev.len() - carry..].iter().collect();
        let head: String = pair[1].content.chars().take(carry).collect();
        assert_eq!(tail, head, "overlap mismatch at chunk {}", pair[1].index);
    }
}

#[tokio::test]
async fn zero_byte_file_yields_empty_content() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.txt", b"");

    let doc = ingest_file(&path, &Config::default()).await.unwrap();
    assert_eq!(doc.content.as_deref(), Some(""));
    assert!(doc.chunks.is_none());
    assert_eq!(doc.file_size, 0);
}

#[tokio::test]
async fn nonexistent_path_is_not_found() {
    let err = ingest_file(std::path::Path::new("/no/such/file.txt"), &Config::default())
        .await
        .unwrap_err();
    assert!(matches!(err, IngestError::NotFound(_)));
}

#[tokio::test]
async fn corrupt_pdf_is_extraction_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.pdf", b"definitely not a pdf");

    let err = ingest_file(&path, &Config::default()).await.unwrap_err();
    assert!(matches!(err, IngestError::Extraction(_)));
}

#[tokio::test]
async fn unknown_type_with_text_payload_is_decoded() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "mystery.xyz", b"readable after all");

    let doc = ingest_file(&path, &Config::default()).await.unwrap();
    assert_eq!(doc.doc_type, DocumentType::Unknown);
    assert_eq!(doc.content.as_deref(), Some("readable after all"));
}

#[tokio::test]
async fn sibling_pipelines_are_independent() {
    let dir = TempDir::new().unwrap();
    let good_a = write_file(&dir, "a.txt", b"alpha");
    let bad = write_file(&dir, "bad.pdf", b"not a pdf");
    let good_b = write_file(&dir, "b.txt", b"beta");

    let cfg = Config::default();
    let (ra, rbad, rb) = tokio::join!(
        ingest_file(&good_a, &cfg),
        ingest_file(&bad, &cfg),
        ingest_file(&good_b, &cfg),
    );

    // One failed pipeline must not affect the others.
    assert_eq!(ra.unwrap().content.as_deref(), Some("alpha"));
    assert!(rbad.is_err());
    assert_eq!(rb.unwrap().content.as_deref(), Some("beta"));
}

#[tokio::test]
async fn document_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let body = (0..40)
        .map(|i| format!("Paragraph {} with enough text to force chunking.", i))
        .collect::<Vec<_>>()
        .join("\n\n");
    let path = write_file(&dir, "persisted.txt", body.as_bytes());

    let doc = ingest_file(&path, &config(100, 20)).await.unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    let restored: Document = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.id, doc.id);
    assert_eq!(restored.doc_type, doc.doc_type);
    assert_eq!(restored.content, doc.content);
    assert_eq!(
        restored.chunks.as_ref().map(|c| c.len()),
        doc.chunks.as_ref().map(|c| c.len())
    );
}
