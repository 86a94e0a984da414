//! # docpipe
//!
//! A document ingestion and chunking pipeline for LLM chat attachments.
//!
//! docpipe turns a file a user attaches to a conversation into a structured
//! [`models::Document`]: it classifies the file by extension, extracts text
//! (PDF parsing, image OCR, or encoding-aware decoding), and splits long
//! content into overlapping, paragraph-aligned chunks sized for a bounded
//! LLM context window.
//!
//! ## Architecture
//!
//! ```text
//! file ──▶ classify ──▶ extract ──▶ chunk? ──▶ Document
//!          (models)     ├─ pdf  (pdf-extract)
//!                       ├─ image (external OCR engine)
//!                       └─ text/code/csv (encoding fallback chain)
//! ```
//!
//! Each ingestion is independent and stateless; run one per attachment
//! concurrently and fan in results. Failures are all-or-nothing per file
//! and never retried.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration (chunk size, overlap, OCR engine) |
//! | [`models`] | `Document`, `DocumentChunk`, type classification |
//! | [`error`] | `IngestError` taxonomy |
//! | [`decode`] | byte → text with encoding fallbacks |
//! | [`extract`] | per-type content extraction and dispatch |
//! | [`chunk`] | paragraph-boundary overlap chunker |
//! | [`ingest`] | pipeline orchestration |

pub mod chunk;
pub mod config;
pub mod decode;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod models;
