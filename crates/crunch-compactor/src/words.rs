//! Whole-word scanning shared by every stage.
//!
//! A word is a maximal run of `[A-Za-z0-9_]`; a whole-word match of `x` is
//! a word equal to `x`.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// Every word with its byte offset.
pub fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    RE_WORD.find_iter(text).map(|m| (m.start(), m.as_str()))
}

/// Words that can be identifiers (not starting with a digit).
pub fn identifiers(text: &str) -> impl Iterator<Item = (usize, &str)> {
    words(text).filter(|(_, w)| !w.as_bytes()[0].is_ascii_digit())
}

/// Occurrence count of every word.
pub fn word_counts(text: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for (_, w) in words(text) {
        *counts.entry(w).or_insert(0) += 1;
    }
    counts
}

/// True if `word` appears in `text` as a whole word.
pub fn contains_word(text: &str, word: &str) -> bool {
    words(text).any(|(_, w)| w == word)
}

/// Rebuild `text`, swapping each word for which `lookup` returns a
/// replacement. One pass: replacement text is never scanned again.
pub fn replace_words<'r, F>(text: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<&'r str>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in RE_WORD.find_iter(text) {
        if let Some(rep) = lookup(m.as_str()) {
            out.push_str(&text[last..m.start()]);
            out.push_str(rep);
            last = m.end();
        }
    }
    out.push_str(&text[last..]);
    out
}
