use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use passage_chunker::config::PASSAGE_DEFAULTS;
use passage_chunker::{extract_pdf_passages_or_empty, SegmentParams};
use passage_model::{to_json_line, to_json_pretty};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pdf-passages", version, about = "Extract page-tagged text passages from a PDF as JSON")]
struct Cli {
    /// PDF file to read
    #[arg(value_name = "PDF_FILE")]
    pdf_file: PathBuf,

    /// Close a passage once it holds at least this many words
    #[arg(long, env = "PDF_PASSAGES_MIN_WORDS", default_value_t = PASSAGE_DEFAULTS.min_words)]
    min_words: usize,

    /// Close a passage early rather than grow it past this many words
    #[arg(long, env = "PDF_PASSAGES_MAX_WORDS", default_value_t = PASSAGE_DEFAULTS.max_words)]
    max_words: usize,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Exit with status 1 when the document cannot be read (output is still `[]`)
    #[arg(long)]
    strict: bool,
}

fn init_tracing() {
    // stdout carries the JSON document only
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .try_init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let params = SegmentParams { min_words: cli.min_words, max_words: cli.max_words };
    if params.min_words > params.max_words {
        warn!(min_words = params.min_words, max_words = params.max_words, "min-words exceeds max-words; passages will mostly hold one fragment each");
    }

    let (passages, failure) = extract_pdf_passages_or_empty(&cli.pdf_file, &params);
    if let Some(err) = &failure {
        eprintln!("Error extracting PDF: {err}");
    }

    let encoded = if cli.pretty { to_json_pretty(&passages) } else { to_json_line(&passages) };
    let json = encoded.context("failed to encode passages as JSON")?;
    println!("{json}");

    if failure.is_some() && cli.strict {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
