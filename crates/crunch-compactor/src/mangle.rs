//! Mangling map builder — collision-safe short-code assignment.

use crate::encoder::Alphabet;
use crate::words;
use crunch_core::{CandidateToken, CrunchError, ExclusionSet, MangleMap, Result};
use std::borrow::Cow;
use std::collections::HashMap;

/// Consecutive colliding codes tolerated for one candidate.
pub const DEFAULT_PROBE_LIMIT: usize = 512;

#[derive(Debug, Clone)]
pub struct MangleOptions {
    pub alphabet: Alphabet,
    pub probe_limit: usize,
}

impl Default for MangleOptions {
    fn default() -> Self {
        Self { alphabet: Alphabet::lowercase(), probe_limit: DEFAULT_PROBE_LIMIT }
    }
}

/// Map plus what the builder passed over.
#[derive(Debug, Clone, Default)]
pub struct MangleOutcome {
    pub map: MangleMap,
    /// Candidates whose first free code was not shorter than themselves.
    pub unprofitable: Vec<String>,
    /// Codes skipped because they collided.
    pub collisions: usize,
}

/// Assign each candidate, in order, the next free short code.
pub fn build_map(
    candidates: &[CandidateToken],
    source: &str,
    exclusions: &ExclusionSet,
    options: &MangleOptions,
) -> Result<MangleMap> {
    build(candidates, source, exclusions, options).map(|o| o.map)
}

/// [`build_map`] with statistics.
///
/// Codes come from one monotonic index shared by all candidates. A code is
/// taken if it is an excluded word or a whole word of the text as it stands
/// after the assignments made so far. When the first free code is not
/// strictly shorter than the candidate, the candidate stays unmapped and the
/// code is left for the next one.
pub fn build(
    candidates: &[CandidateToken],
    source: &str,
    exclusions: &ExclusionSet,
    options: &MangleOptions,
) -> Result<MangleOutcome> {
    let mut live: HashMap<Cow<'_, str>, usize> = words::word_counts(source)
        .into_iter()
        .map(|(w, n)| (Cow::Borrowed(w), n))
        .collect();
    let mut outcome = MangleOutcome::default();
    let mut index: u64 = 0;

    for candidate in candidates {
        let token = candidate.text.as_str();
        if exclusions.contains(token) || outcome.map.get(token).is_some() {
            continue;
        }

        let mut probed = 0;
        let code = loop {
            let code = options.alphabet.encode(index);
            let taken = exclusions.contains(&code) || live.get(code.as_str()).is_some_and(|&n| n > 0);
            if !taken {
                break code;
            }
            tracing::debug!(code = %code, token, "skipping colliding code");
            index += 1;
            probed += 1;
            outcome.collisions += 1;
            if probed >= options.probe_limit {
                return Err(CrunchError::EncoderExhaustion { token: token.to_string(), probed });
            }
        };

        if code.len() >= token.len() {
            tracing::debug!(code = %code, token, "code would not shrink token");
            outcome.unprofitable.push(token.to_string());
            continue;
        }
        index += 1;

        let count = live.remove(token).unwrap_or(0);
        tracing::debug!(token, code = %code, count, saved = count * (token.len() - code.len()), "assigned code");
        live.insert(Cow::Owned(code.clone()), count);
        outcome.map.insert(token, code);
    }

    tracing::info!(
        mapped = outcome.map.len(),
        unprofitable = outcome.unprofitable.len(),
        collisions = outcome.collisions,
        "built mangling map"
    );
    Ok(outcome)
}

/// Rewrite every whole word found in `map`.
///
/// One tokenizing pass; gives the same text as applying the entries one
/// after another, because no assigned code equals a token still present when
/// it was assigned.
pub fn apply_map(source: &str, map: &MangleMap) -> String {
    if map.is_empty() {
        return source.to_string();
    }
    words::replace_words(source, |word| map.get(word))
}
