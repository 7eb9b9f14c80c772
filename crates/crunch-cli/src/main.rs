//! crunch — compact a set of sources to fit a byte budget.

mod build;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use crunch_core::BuildConfig;
use std::path::PathBuf;

/// Substitute constants, mangle identifiers and audit the packaged size.
#[derive(Parser, Debug)]
#[command(name = "crunch", version)]
struct Cli {
    /// Build configuration file
    #[arg(short, long, value_name = "FILE", default_value = "crunch.json")]
    config: PathBuf,

    /// Write the debug variant as the compact output too
    #[arg(long)]
    no_minify: bool,

    /// Strip indentation and blank lines after mangling
    #[arg(long)]
    line_minify: bool,

    /// Override budget.max_bytes
    #[arg(long, value_name = "BYTES")]
    max_bytes: Option<u64>,

    /// Packaged artifact to audit instead of the compact output
    #[arg(long, value_name = "PATH")]
    artifact: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = BuildConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let options = build::BuildOptions {
        no_minify: cli.no_minify,
        line_minify: cli.line_minify,
        max_bytes: cli.max_bytes,
        artifact: cli.artifact,
    };

    let summary = build::run(&config, &options).await?;
    tracing::info!(
        compact = %config.output.compact.display(),
        debug = %config.output.debug.display(),
        compact_len = summary.compact.output.len(),
        debug_len = summary.debug_len,
        audited = %summary.audited.display(),
        over_budget = summary.size.is_over(),
        "Done."
    );
    Ok(())
}

#[cfg(test)]
mod tests;
