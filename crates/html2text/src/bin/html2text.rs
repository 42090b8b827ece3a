use anyhow::{Context, Result};
use clap::Parser;
use html2text::{extract_text_stats, CaseFold, ExtractOptions, MAX_WORD_LENGTH};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Largest page body read before extraction, matching what a small-screen
/// client fetches.
const DEFAULT_MAX_BYTES: u64 = 32 * 1024;

/// Strips markup from an HTML document and prints the readable text.
#[derive(Debug, Parser)]
#[command(name = "html2text", version)]
struct Args {
    /// HTML file to read; stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Which words get their first letter lowercased.
    #[arg(long, default_value_t = CaseFold::FirstToken)]
    case_fold: CaseFold,

    /// Raw words this long or longer are dropped.
    #[arg(long, default_value_t = MAX_WORD_LENGTH)]
    max_word_length: usize,

    /// Read at most this many bytes of input, 0 for no limit.
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    max_bytes: u64,

    /// Print extraction counters to stderr.
    #[arg(long)]
    stats: bool,

    /// Log scanner decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let html_bytes = read_input(args.input.as_ref(), args.max_bytes)?;
    let options = ExtractOptions::default()
        .with_case_fold(args.case_fold)
        .with_max_word_length(args.max_word_length);

    let (text, stats) = extract_text_stats(&html_bytes, &options)
        .with_context(|| format!("failed to extract text from {} bytes", html_bytes.len()))?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writer.write_all(&text)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    if args.stats {
        eprintln!(
            "words: {}, dropped: {}, tags: {}, unterminated tag: {}",
            stats.words_emitted, stats.words_dropped, stats.tags_skipped, stats.unterminated_tag
        );
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>, max_bytes: u64) -> Result<Vec<u8>> {
    let reader: Box<dyn Read> = match path {
        Some(path) if path.as_os_str() != "-" => Box::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        ),
        _ => Box::new(io::stdin().lock()),
    };

    let limit = if max_bytes == 0 { u64::MAX } else { max_bytes };
    let mut html_bytes = Vec::new();
    reader
        .take(limit)
        .read_to_end(&mut html_bytes)
        .context("failed to read HTML input")?;

    Ok(html_bytes)
}
