use anyhow::{Context, Result};
use clap::Parser;
use keyedcsv::{convert, ConvertConfig, Delimiter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Convert a delimited text file into a JSON object keyed by one column.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Delimited UTF-8 source with a header line
    source: PathBuf,

    /// JSON output file (replaced if it exists)
    destination: PathBuf,

    /// Field separator: one ASCII character, or `\t` / `tab`
    #[arg(short, long, default_value_t = Delimiter::SEMICOLON)]
    delimiter: Delimiter,

    /// Header name whose value keys each row (matched verbatim)
    #[arg(short, long, default_value = "id")]
    key_column: String,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = ConvertConfig::new(
        args.source,
        args.destination,
        args.delimiter,
        args.key_column,
    );

    let summary = convert(&config).with_context(|| {
        format!(
            "converting {} → {}",
            config.source.display(),
            config.destination.display()
        )
    })?;
    info!(rows = summary.rows, keys = summary.keys, "done");
    Ok(())
}
