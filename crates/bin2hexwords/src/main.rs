use anyhow::Result;
use clap::Parser;

mod cli;
mod convert;
mod words;

fn main() -> Result<()> {
    init_tracing()?;
    let cli = cli::Cli::parse();

    tracing::debug!("Converting {}", cli.input.display());
    let summary = convert::convert(&cli.input, &cli.output)?;
    tracing::debug!(
        "Input bytes: {}, padding bytes: {}",
        summary.input_bytes,
        summary.padding
    );
    println!("Wrote {} words to {}", summary.words, cli.output.display());

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // stdout is reserved for the one-line summary.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Can't initialize tracing subscriber: {e}"))?;
    Ok(())
}
