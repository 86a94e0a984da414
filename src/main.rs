//! # docpipe CLI
//!
//! Command-line front end for the docpipe ingestion pipeline. Useful for
//! inspecting what the chat client will see when a user attaches a file,
//! and for tuning chunking settings against real documents.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `docpipe ingest <FILES>...` | Run the full pipeline on each file and print a summary (or `--json` documents) |
//! | `docpipe chunk <FILE>` | Decode a text file and print its chunk boundaries |
//!
//! ## Examples
//!
//! ```bash
//! # Ingest a PDF and a CSV concurrently
//! docpipe ingest report.pdf data.csv
//!
//! # Full document values as JSON
//! docpipe ingest notes.md --json
//!
//! # Preview how a smaller chunk size would split a document
//! docpipe chunk thesis.txt --chunk-size 1000 --overlap 50
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::task::JoinSet;

use docpipe::config::{self, Config};
use docpipe::ingest::ingest_file;
use docpipe::models::Document;

/// docpipe — a document ingestion and chunking pipeline for LLM chat
/// attachments.
#[derive(Parser)]
#[command(
    name = "docpipe",
    about = "Ingest files into chunked documents for LLM context windows",
    version
)]
struct Cli {
    /// Path to a TOML configuration file.
    ///
    /// Optional; built-in defaults (chunk_size 4000, overlap 200, tesseract
    /// OCR) apply when omitted. See `config/docpipe.example.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured chunk size (characters).
    #[arg(long, global = true)]
    chunk_size: Option<usize>,

    /// Override the configured chunk overlap (characters).
    #[arg(long, global = true)]
    overlap: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest one or more files into documents.
    ///
    /// Files are processed concurrently and independently: a corrupt PDF
    /// does not stop the other attachments, it just sets a non-zero exit
    /// code.
    Ingest {
        /// Files to ingest.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print full documents as JSON instead of summaries.
        #[arg(long)]
        json: bool,
    },

    /// Show how a text file would be split into chunks.
    Chunk {
        /// File to chunk (decoded with the standard encoding fallbacks).
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };
    if let Some(size) = cli.chunk_size {
        config.chunking.chunk_size = size;
    }
    if let Some(overlap) = cli.overlap {
        config.chunking.overlap = overlap;
    }
    config::validate(&config)?;

    match cli.command {
        Commands::Ingest { files, json } => run_ingest(files, json, config).await,
        Commands::Chunk { file } => run_chunk(&file, &config),
    }
}

async fn run_ingest(files: Vec<PathBuf>, json: bool, config: Config) -> Result<()> {
    let mut set = JoinSet::new();
    for path in files {
        let config = config.clone();
        set.spawn(async move {
            let result = ingest_file(&path, &config).await;
            (path, result)
        });
    }

    let mut failures = 0usize;
    while let Some(joined) = set.join_next().await {
        let (path, result) = joined?;
        match result {
            Ok(doc) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                } else {
                    print_summary(&doc);
                }
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} file(s) failed to ingest", failures);
    }
    Ok(())
}

fn print_summary(doc: &Document) {
    println!("{}", doc.filename);
    println!("  type: {}", doc.doc_type);
    println!("  size: {} bytes", doc.file_size);
    let content_chars = doc.content.as_deref().map(|c| c.chars().count()).unwrap_or(0);
    println!("  content: {} chars", content_chars);
    match &doc.chunks {
        Some(chunks) => println!("  chunks: {}", chunks.len()),
        None => println!("  chunks: none"),
    }
}

fn run_chunk(file: &std::path::Path, config: &Config) -> Result<()> {
    let bytes = std::fs::read(file)?;
    let content = docpipe::decode::decode_text(&bytes)?;
    let chunks = docpipe::chunk::split_text(
        &content,
        config.chunking.chunk_size,
        config.chunking.overlap,
    );

    println!(
        "{} chars -> {} chunk(s) (chunk_size {}, overlap {})",
        content.chars().count(),
        chunks.len(),
        config.chunking.chunk_size,
        config.chunking.overlap
    );
    for (i, chunk) in chunks.iter().enumerate() {
        let first_line = chunk.lines().next().unwrap_or("");
        println!("  [{}] {} chars | {}", i, chunk.chars().count(), first_line);
    }
    Ok(())
}
