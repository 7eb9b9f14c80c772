//! Compaction pipeline — substitute, analyze, mangle, minify.

use crate::analyzer::{self, AnalyzerOptions};
use crate::encoder::Alphabet;
use crate::mangle::{self, MangleOptions};
use crate::minify::{Minifier, Passthrough};
use crate::substitute::substitute;
use crunch_core::config::AlphabetKind;
use crunch_core::{BuildConfig, ConstantTable, CrunchError, ExclusionSet, MangleMap, Result};

/// Result of one compaction with statistics.
#[derive(Debug, Clone)]
pub struct CompactionReport {
    pub output: String,
    pub original_len: usize,
    pub substituted_len: usize,
    /// Length after mangling, before the minifier. Equals
    /// `substituted_len` for the debug variant.
    pub mangled_len: usize,
    pub minified: bool,
    pub mangle_map: Option<MangleMap>,
    pub unprofitable: Vec<String>,
}

impl CompactionReport {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.output.len() as f64 / self.original_len as f64
    }

    pub fn reduction_pct(&self) -> f64 {
        (1.0 - self.ratio()) * 100.0
    }
}

/// The compaction pipeline. Holds configuration only; every call owns its
/// own encoder index and map.
pub struct Compactor {
    exclusions: Option<ExclusionSet>,
    analyzer: AnalyzerOptions,
    mangle: MangleOptions,
    minifier: Box<dyn Minifier>,
}

impl Compactor {
    /// No exclusion set (minified mode will refuse to run), lowercase
    /// alphabet, passthrough minifier.
    pub fn new() -> Self {
        Self {
            exclusions: None,
            analyzer: AnalyzerOptions::default(),
            mangle: MangleOptions::default(),
            minifier: Box::new(Passthrough),
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        let alphabet = match config.mangle.alphabet {
            AlphabetKind::Lower => Alphabet::lowercase(),
            AlphabetKind::Extended => Alphabet::extended(),
        };
        Self::new()
            .with_exclusions(config.exclusions())
            .with_analyzer_options(AnalyzerOptions {
                min_len: config.mangle.min_len,
                min_occurrences: config.mangle.min_occurrences,
                max_candidates: config.mangle.max_candidates,
            })
            .with_mangle_options(MangleOptions { alphabet, probe_limit: config.mangle.probe_limit })
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = Some(exclusions);
        self
    }

    pub fn with_analyzer_options(mut self, options: AnalyzerOptions) -> Self {
        self.analyzer = options;
        self
    }

    pub fn with_mangle_options(mut self, options: MangleOptions) -> Self {
        self.mangle = options;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.mangle.alphabet = alphabet;
        self
    }

    pub fn with_minifier(mut self, minifier: impl Minifier + 'static) -> Self {
        self.minifier = Box::new(minifier);
        self
    }

    pub fn minifier_name(&self) -> &str {
        self.minifier.name()
    }

    /// Compact `source`. With `minify == false` the result is exactly the
    /// constant-substituted text.
    pub fn compact(&self, source: &str, constants: &ConstantTable, minify: bool) -> Result<String> {
        self.compact_with_report(source, constants, minify).map(|r| r.output)
    }

    pub fn compact_with_report(
        &self,
        source: &str,
        constants: &ConstantTable,
        minify: bool,
    ) -> Result<CompactionReport> {
        let substituted = substitute(source, constants);
        let substituted_len = substituted.len();

        if !minify {
            return Ok(CompactionReport {
                original_len: source.len(),
                substituted_len,
                mangled_len: substituted_len,
                minified: false,
                mangle_map: None,
                unprofitable: Vec::new(),
                output: substituted,
            });
        }

        let exclusions = self
            .exclusions
            .as_ref()
            .ok_or_else(|| CrunchError::config("an exclusion set is required to minify"))?;

        let candidates = analyzer::analyze(&substituted, exclusions, &self.analyzer);
        let outcome = mangle::build(&candidates, &substituted, exclusions, &self.mangle)?;
        let mangled = mangle::apply_map(&substituted, &outcome.map);
        let mangled_len = mangled.len();
        tracing::info!(
            before = substituted_len,
            after = mangled_len,
            saved = substituted_len.saturating_sub(mangled_len),
            "applied mangling map"
        );

        let output = self.minifier.minify(&mangled).map_err(|e| match e {
            e @ CrunchError::Minifier { .. } => e,
            other => CrunchError::Minifier { name: self.minifier.name().to_string(), message: other.to_string() },
        })?;
        tracing::info!(minifier = self.minifier.name(), len = output.len(), "minified");

        Ok(CompactionReport {
            output,
            original_len: source.len(),
            substituted_len,
            mangled_len,
            minified: true,
            mangle_map: Some(outcome.map),
            unprofitable: outcome.unprofitable,
        })
    }
}

impl Default for Compactor {
    fn default() -> Self {
        Self::new()
    }
}
