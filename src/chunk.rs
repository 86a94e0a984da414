//! Paragraph-boundary text chunker with trailing overlap.
//!
//! Splits document content into chunks that respect a configurable
//! `chunk_size`, breaking only on paragraph boundaries (`\n\n`) so that no
//! sentence is ever truncated mid-thought. When a chunk is closed, the next
//! chunk starts with up to `overlap` trailing characters of the closed
//! chunk, preserving cross-boundary context for the model.
//!
//! # Algorithm
//!
//! 1. Split content on `\n\n`; the separator is re-inserted only between
//!    paragraphs placed in the same chunk.
//! 2. Accumulate paragraphs until `len(current) + len(paragraph)` would
//!    exceed `chunk_size` (lengths in characters; the separator is not
//!    counted in the check).
//! 3. On overflow, close the current chunk. The new chunk starts with the
//!    trailing `overlap` characters of the closed chunk if it is longer
//!    than `overlap`, otherwise with the whole closed chunk, immediately
//!    followed by the overflowing paragraph (no separator in between).
//! 4. A single paragraph longer than `chunk_size` is never split: it
//!    becomes its own oversized chunk.
//!
//! The overlap slice is always taken from the just-closed chunk, which may
//! itself begin with the previous chunk's overlap. Across several
//! consecutive splits the shared prefix can therefore compound. This is
//! intentional, long-standing behavior; see
//! `test_overlap_compounds_across_consecutive_splits`.

/// Split `content` into paragraph-aligned chunks of roughly `chunk_size`
/// characters, with `overlap` trailing characters carried into each
/// subsequent chunk.
///
/// Expects `chunk_size > 0` and `overlap < chunk_size`; callers source both
/// from [`crate::config::ChunkingConfig`], which validates the range.
///
/// # Guarantees
///
/// - Output is non-empty iff `content` is non-empty.
/// - Chunks appear in document order; concatenating them (minus overlap
///   prefixes) reproduces the original paragraph sequence.
/// - Breaks occur only at paragraph boundaries.
pub fn split_text(content: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    // Separators and overlap prefixes count toward the running length, so
    // track characters incrementally rather than re-scanning `current`.
    let mut current_chars = 0usize;

    for paragraph in content.split("\n\n") {
        let paragraph_chars = paragraph.chars().count();

        if !current.is_empty() && current_chars + paragraph_chars > chunk_size {
            let carry = overlap_suffix(&current, current_chars, overlap);
            chunks.push(std::mem::take(&mut current));

            current_chars = carry.chars().count() + paragraph_chars;
            current = carry;
            current.push_str(paragraph);
        } else {
            if !current.is_empty() {
                current.push_str("\n\n");
                current_chars += 2;
            }
            current.push_str(paragraph);
            current_chars += paragraph_chars;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Overlap prefix for the next chunk: the trailing `overlap` characters of
/// the closed chunk when it is longer than `overlap`, otherwise the whole
/// closed chunk.
fn overlap_suffix(closed: &str, closed_chars: usize, overlap: usize) -> String {
    if closed_chars > overlap {
        let skip = closed_chars - overlap;
        let start = closed
            .char_indices()
            .nth(skip)
            .map(|(i, _)| i)
            .unwrap_or(closed.len());
        closed[start..].to_string()
    } else {
        closed.to_string()
    }
}
