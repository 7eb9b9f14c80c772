//! Constant substitution — whole-word names → literal source text.

use crate::words;
use crunch_core::ConstantTable;
use std::collections::HashMap;

/// Replace every whole-word occurrence of each constant with its literal.
///
/// Matching is case-sensitive and done in a single scan of `source`, so a
/// literal is never itself rewritten by a later constant.
pub fn substitute(source: &str, constants: &ConstantTable) -> String {
    if source.is_empty() || constants.is_empty() {
        return source.to_string();
    }

    let rendered: HashMap<&str, String> = constants
        .iter()
        .map(|(name, value)| (name, value.to_source()))
        .collect();
    let mut hits: HashMap<&str, usize> = HashMap::new();

    let result = words::replace_words(source, |word| {
        let (name, literal) = rendered.get_key_value(word)?;
        *hits.entry(*name).or_insert(0) += 1;
        Some(literal.as_str())
    });

    for (name, _) in constants.iter() {
        let count = hits.get(name).copied().unwrap_or(0);
        tracing::debug!(constant = name, value = %rendered[name], count, "replaced constant");
    }
    tracing::info!(
        constants = constants.len(),
        replaced = hits.values().sum::<usize>(),
        "substituted constants"
    );
    result
}
