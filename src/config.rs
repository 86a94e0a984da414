use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Pipeline settings, loadable from a TOML file.
///
/// Everything has a sensible default, so the library is fully usable with
/// `Config::default()` and no file on disk.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
}

/// Chunking parameters, in characters.
///
/// The pipeline tolerates any `chunk_size > 0` and any
/// `overlap in [0, chunk_size)`; narrower UI-facing ranges (500–8000 and
/// 0–500 in the chat client) are the caller's concern.
#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
        }
    }
}

fn default_chunk_size() -> usize {
    4000
}
fn default_overlap() -> usize {
    200
}

/// External OCR engine invocation.
#[derive(Debug, Deserialize, Clone)]
pub struct OcrConfig {
    /// Engine binary; must accept `<image> stdout --oem 1 -l <lang>`.
    #[serde(default = "default_ocr_command")]
    pub command: String,
    #[serde(default = "default_ocr_language")]
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            command: default_ocr_command(),
            language: default_ocr_language(),
        }
    }
}

fn default_ocr_command() -> String {
    "tesseract".to_string()
}
fn default_ocr_language() -> String {
    "eng".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    if config.chunking.chunk_size == 0 {
        anyhow::bail!("chunking.chunk_size must be > 0");
    }
    if config.chunking.overlap >= config.chunking.chunk_size {
        anyhow::bail!(
            "chunking.overlap must be < chunking.chunk_size ({} >= {})",
            config.chunking.overlap,
            config.chunking.chunk_size
        );
    }
    if config.ocr.command.is_empty() {
        anyhow::bail!("ocr.command must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.chunking.chunk_size, 4000);
        assert_eq!(config.chunking.overlap, 200);
        assert_eq!(config.ocr.command, "tesseract");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str("[chunking]\nchunk_size = 1000\n").unwrap();
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.chunking.overlap, 200);
        assert_eq!(config.ocr.language, "eng");
    }

    #[test]
    fn test_overlap_must_be_less_than_chunk_size() {
        let config: Config =
            toml::from_str("[chunking]\nchunk_size = 100\noverlap = 100\n").unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config: Config = toml::from_str("[chunking]\nchunk_size = 0\n").unwrap();
        assert!(validate(&config).is_err());
    }
}
