//! Build configuration loaded from a JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::{CrunchError, Result};
use crate::exclusions::ExclusionSet;
use crate::types::{is_identifier, ConstantTable};

/// Default hard budget for the packaged artifact, 13 KiB.
pub const DEFAULT_MAX_BYTES: u64 = 13 * 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    /// Raw constant values; validated by [`BuildConfig::constant_table`].
    pub constants: Map<String, Value>,
    pub exclude: ExcludeConfig,
    pub mangle: MangleConfig,
    pub budget: BudgetConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Source fragments, concatenated in this order.
    pub sources: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub compact: PathBuf,
    pub debug: PathBuf,
    /// Packaged artifact produced downstream; audited instead of `compact`
    /// when it exists.
    pub artifact: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            compact: "build/compact.js".into(),
            debug: "build/debug.js".into(),
            artifact: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionPreset {
    Javascript,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcludeConfig {
    pub preset: ExclusionPreset,
    pub words: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self { preset: ExclusionPreset::Javascript, words: Vec::new() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetKind {
    /// `a-z` everywhere.
    Lower,
    /// `a-zA-Z` first, `a-zA-Z0-9` after.
    Extended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MangleConfig {
    pub min_len: usize,
    pub min_occurrences: usize,
    pub max_candidates: Option<usize>,
    pub probe_limit: usize,
    pub alphabet: AlphabetKind,
}

impl Default for MangleConfig {
    fn default() -> Self {
        Self {
            min_len: 2,
            min_occurrences: 1,
            max_candidates: None,
            probe_limit: 512,
            alphabet: AlphabetKind::Lower,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BudgetConfig {
    pub max_bytes: u64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self { max_bytes: DEFAULT_MAX_BYTES }
    }
}

impl BuildConfig {
    /// Parse and validate a JSON document. Relative paths are kept as-is.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from disk, resolving relative paths against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&text)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        tracing::debug!(path = %path.display(), sources = config.input.sources.len(), "loaded build config");
        Ok(config)
    }

    pub fn resolve_paths(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        for source in &mut self.input.sources {
            join(source);
        }
        join(&mut self.output.compact);
        join(&mut self.output.debug);
        if let Some(artifact) = self.output.artifact.as_mut() {
            join(artifact);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.mangle.min_len == 0 {
            return Err(CrunchError::config("mangle.min_len must be at least 1"));
        }
        if self.mangle.min_occurrences == 0 {
            return Err(CrunchError::config("mangle.min_occurrences must be at least 1"));
        }
        if self.mangle.probe_limit == 0 {
            return Err(CrunchError::config("mangle.probe_limit must be at least 1"));
        }
        if self.budget.max_bytes == 0 {
            return Err(CrunchError::config("budget.max_bytes must be positive"));
        }
        if let Some(word) = self.exclude.words.iter().find(|w| !is_identifier(w)) {
            return Err(CrunchError::config(format!("exclude.words: `{word}` is not an identifier")));
        }
        self.constant_table().map(|_| ())
    }

    /// Validated constants in document order.
    pub fn constant_table(&self) -> Result<ConstantTable> {
        ConstantTable::from_json(&self.constants)
    }

    /// Preset words plus the configured extras.
    pub fn exclusions(&self) -> ExclusionSet {
        let mut set = match self.exclude.preset {
            ExclusionPreset::Javascript => ExclusionSet::javascript(),
            ExclusionPreset::None => ExclusionSet::new(),
        };
        set.extend(self.exclude.words.iter().cloned());
        set
    }
}
