//! Build orchestration: read sources, compact both variants, write, audit.

use anyhow::{bail, Context, Result};
use crunch_compactor::audit::{self, SizeReport};
use crunch_compactor::{CompactionReport, Compactor, LineMinifier};
use crunch_core::BuildConfig;
use std::path::{Path, PathBuf};

/// Command-line overrides on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub no_minify: bool,
    pub line_minify: bool,
    pub max_bytes: Option<u64>,
    pub artifact: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub compact: CompactionReport,
    pub debug_len: usize,
    pub audited: PathBuf,
    pub size: SizeReport,
}

/// Read every source concurrently and join them with `\n` in the given order.
pub async fn read_sources(paths: &[PathBuf]) -> Result<String> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move {
            let text = tokio::fs::read_to_string(&path).await;
            (path, text)
        }))
        .collect();

    let mut parts = Vec::with_capacity(handles.len());
    for handle in handles {
        let (path, text) = handle.await?;
        parts.push(text.with_context(|| format!("reading source {}", path.display()))?);
    }
    Ok(parts.join("\n"))
}

async fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))
}

pub async fn run(config: &BuildConfig, options: &BuildOptions) -> Result<BuildSummary> {
    if config.input.sources.is_empty() {
        bail!("no input sources configured");
    }
    let source = read_sources(&config.input.sources).await?;
    tracing::info!(sources = config.input.sources.len(), len = source.len(), "read sources");

    let constants = config.constant_table().context("loading constants")?;
    let mut compactor = Compactor::from_config(config);
    if options.line_minify {
        compactor = compactor.with_minifier(LineMinifier);
    }
    tracing::debug!(minifier = compactor.minifier_name(), "configured compactor");

    // Both variants are computed before anything is written.
    let compact = compactor
        .compact_with_report(&source, &constants, !options.no_minify)
        .context("compacting source")?;
    let debug = compactor
        .compact(&source, &constants, false)
        .context("building debug source")?;

    tracing::info!(
        "Compiled source is {}% the size of the original source",
        (compact.ratio() * 100.0).round()
    );
    if !compact.unprofitable.is_empty() {
        tracing::debug!(tokens = ?compact.unprofitable, "left unmangled, no shorter code free");
    }

    write_output(&config.output.compact, &compact.output).await?;
    write_output(&config.output.debug, &debug).await?;

    let max = options.max_bytes.unwrap_or(config.budget.max_bytes);
    let audited = artifact_path(config, options);
    let size = audit::audit_file(&audited, max)
        .with_context(|| format!("measuring {}", audited.display()))?;
    size.log();

    Ok(BuildSummary { compact, debug_len: debug.len(), audited, size })
}

/// The packaged artifact when it exists, otherwise the compact output.
fn artifact_path(config: &BuildConfig, options: &BuildOptions) -> PathBuf {
    let configured = options.artifact.as_ref().or(config.output.artifact.as_ref());
    match configured {
        Some(path) if path.exists() => path.clone(),
        Some(path) => {
            tracing::warn!(artifact = %path.display(), "artifact not found, auditing compact output");
            config.output.compact.clone()
        }
        None => config.output.compact.clone(),
    }
}
