//! Token analyzer — rank identifier words by how many bytes they occupy.

use crate::words;
use crunch_core::{CandidateToken, ExclusionSet};
use std::collections::HashMap;

/// Words shorter than this can never shrink.
pub const MIN_TOKEN_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub min_len: usize,
    pub min_occurrences: usize,
    pub max_candidates: Option<usize>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self { min_len: MIN_TOKEN_LEN, min_occurrences: 1, max_candidates: None }
    }
}

/// Distinct identifiers of `source`, most valuable first.
///
/// Ordered by `occurrences * len` descending; equal weights keep
/// first-appearance order. Words in `exclusions` or shorter than
/// `options.min_len` are never returned.
pub fn analyze(source: &str, exclusions: &ExclusionSet, options: &AnalyzerOptions) -> Vec<CandidateToken> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tokens: Vec<CandidateToken> = Vec::new();

    for (offset, word) in words::identifiers(source) {
        if word.len() < options.min_len || exclusions.contains(word) {
            continue;
        }
        if let Some(&i) = slots.get(word) {
            tokens[i].occurrences += 1;
            continue;
        }
        slots.insert(word, tokens.len());
        tokens.push(CandidateToken { text: word.to_string(), occurrences: 1, first_seen: offset });
    }

    tokens.retain(|t| t.occurrences >= options.min_occurrences);
    // Stable: ties stay in first-appearance order.
    tokens.sort_by(|a, b| b.weight().cmp(&a.weight()));
    if let Some(max) = options.max_candidates {
        tokens.truncate(max);
    }

    tracing::debug!(candidates = tokens.len(), "analyzed source");
    tokens
}
