//! Byte-to-text decoding with a fixed encoding fallback chain.
//!
//! Attachments arrive as raw bytes with no declared encoding. Decoding tries
//! UTF-8 first, then falls back in a fixed order: ASCII, ISO-Latin-1, UTF-16
//! (BOM/native), UTF-16LE, UTF-16BE. The first successful decode wins.
//!
//! ISO-Latin-1 maps every byte to a code point, so in practice the chain
//! terminates there and [`IngestError::Decode`] is unreachable. The variant
//! and the chain order are still contractual; the UTF-16 decoders remain
//! reachable for callers that probe encodings individually.

use encoding_rs::{UTF_16BE, UTF_16LE};

use crate::error::IngestError;

/// Decode raw bytes to text using the fallback chain.
///
/// Pure function of the input bytes; no side effects.
pub fn decode_text(bytes: &[u8]) -> Result<String, IngestError> {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Ok(s.to_string());
    }
    if let Some(s) = decode_ascii(bytes) {
        return Ok(s);
    }
    if let Some(s) = decode_latin1(bytes) {
        return Ok(s);
    }
    if let Some(s) = decode_utf16_native(bytes) {
        return Ok(s);
    }
    if let Some(s) = decode_utf16(bytes, Endianness::Little) {
        return Ok(s);
    }
    if let Some(s) = decode_utf16(bytes, Endianness::Big) {
        return Ok(s);
    }
    Err(IngestError::Decode)
}

#[derive(Clone, Copy, PartialEq)]
enum Endianness {
    Little,
    Big,
}

fn decode_ascii(bytes: &[u8]) -> Option<String> {
    if bytes.is_ascii() {
        // ASCII is a strict subset of UTF-8.
        std::str::from_utf8(bytes).ok().map(|s| s.to_string())
    } else {
        None
    }
}

fn decode_latin1(bytes: &[u8]) -> Option<String> {
    // ISO-8859-1: each byte is the identical Unicode code point.
    // Total over all inputs.
    Some(bytes.iter().map(|&b| b as char).collect())
}

/// UTF-16 with BOM detection; without a BOM, host byte order is assumed.
fn decode_utf16_native(bytes: &[u8]) -> Option<String> {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, Endianness::Little),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, Endianness::Big),
        _ => {
            let native = if cfg!(target_endian = "big") {
                Endianness::Big
            } else {
                Endianness::Little
            };
            decode_utf16(bytes, native)
        }
    }
}

fn decode_utf16(bytes: &[u8], endian: Endianness) -> Option<String> {
    let encoding = match endian {
        Endianness::Little => UTF_16LE,
        Endianness::Big => UTF_16BE,
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_round_trip() {
        let original = "héllo wörld — naïve résumé 日本語";
        let decoded = decode_text(original.as_bytes()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_ascii_decodes_as_is() {
        let decoded = decode_text(b"plain ascii text\n").unwrap();
        assert_eq!(decoded, "plain ascii text\n");
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_latin1() {
        // 0xE9 alone is invalid UTF-8 but is 'é' in ISO-8859-1.
        let decoded = decode_text(b"caf\xE9").unwrap();
        assert_eq!(decoded, "café");
    }

    #[test]
    fn test_utf16_le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "hi".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_utf16_native(&bytes).unwrap(), "hi");
    }

    #[test]
    fn test_utf16_be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "hi".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_utf16_native(&bytes).unwrap(), "hi");
    }

    #[test]
    fn test_utf16_explicit_endianness() {
        let le: Vec<u8> = "chunk"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        assert_eq!(decode_utf16(&le, Endianness::Little).unwrap(), "chunk");

        let be: Vec<u8> = "chunk"
            .encode_utf16()
            .flat_map(|u| u.to_be_bytes())
            .collect();
        assert_eq!(decode_utf16(&be, Endianness::Big).unwrap(), "chunk");
    }

    #[test]
    fn test_utf16_odd_length_fails() {
        assert!(decode_utf16(&[0x00, 0x68, 0x00], Endianness::Big).is_none());
    }

    #[test]
    fn test_arbitrary_bytes_never_fail() {
        // Latin-1 is total, so the chain always produces something.
        let bytes: Vec<u8> = (0..=255).collect();
        assert!(decode_text(&bytes).is_ok());
    }
}
