//! Short-code encoder — index → Nth shortest code over a fixed alphabet.
//!
//! Codes are enumerated by length first, then by alphabet rank within a
//! length, so with `a-z`: `a..z`, `aa..zz`, `aaa..`. This is a bijective
//! base-K numbering; [`Alphabet::decode`] is its inverse.

use crunch_core::{CrunchError, Result};
use std::collections::HashSet;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Symbols allowed at the start of a code (`head`) and after it (`tail`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    head: Vec<u8>,
    tail: Vec<u8>,
}

impl Alphabet {
    pub fn new(head: &str, tail: &str) -> Result<Self> {
        let head = symbols(head, "head")?;
        let tail = symbols(tail, "tail")?;
        if head.is_empty() {
            return Err(CrunchError::config("alphabet head is empty"));
        }
        if tail.len() < 2 {
            return Err(CrunchError::config("alphabet tail needs at least two symbols"));
        }
        if let Some(d) = head.iter().find(|b| b.is_ascii_digit()) {
            return Err(CrunchError::config(format!(
                "alphabet head contains digit `{}`; codes must be identifiers",
                *d as char
            )));
        }
        Ok(Self { head, tail })
    }

    /// `a-z` for every position.
    pub fn lowercase() -> Self {
        Self { head: LOWER.as_bytes().to_vec(), tail: LOWER.as_bytes().to_vec() }
    }

    /// `a-zA-Z` first, `a-zA-Z0-9` after.
    pub fn extended() -> Self {
        let head = format!("{LOWER}{UPPER}").into_bytes();
        let tail = format!("{LOWER}{UPPER}{DIGITS}").into_bytes();
        Self { head, tail }
    }

    /// Number of distinct codes of exactly `len` symbols.
    pub fn count_with_len(&self, len: u32) -> u128 {
        if len == 0 {
            return 0;
        }
        (self.tail.len() as u128)
            .checked_pow(len - 1)
            .and_then(|t| t.checked_mul(self.head.len() as u128))
            .unwrap_or(u128::MAX)
    }

    /// The `index`-th code.
    pub fn encode(&self, index: u64) -> String {
        let mut rest = index as u128;
        let mut len = 1u32;
        loop {
            let n = self.count_with_len(len);
            if rest < n {
                break;
            }
            rest -= n;
            len += 1;
        }

        let base = self.tail.len() as u128;
        let mut out = vec![0u8; len as usize];
        for slot in out[1..].iter_mut().rev() {
            *slot = self.tail[(rest % base) as usize];
            rest /= base;
        }
        out[0] = self.head[rest as usize];
        // Every symbol was validated as ASCII.
        out.into_iter().map(char::from).collect()
    }

    /// Like [`encode`](Self::encode) for callers holding signed indices.
    /// Negative input is rejected, never clamped.
    pub fn encode_signed(&self, index: i64) -> Result<String> {
        u64::try_from(index)
            .map(|i| self.encode(i))
            .map_err(|_| CrunchError::config(format!("encoder index {index} is negative")))
    }

    /// Inverse of [`encode`](Self::encode). `None` if `code` is not in the
    /// enumeration or its index overflows `u64`.
    pub fn decode(&self, code: &str) -> Option<u64> {
        let bytes = code.as_bytes();
        let (&first, rest) = bytes.split_first()?;
        let len = u32::try_from(bytes.len()).ok()?;

        let mut index: u128 = 0;
        for l in 1..len {
            index = index.checked_add(self.count_with_len(l))?;
        }
        let base = self.tail.len() as u128;
        let mut offset = self.head.iter().position(|&b| b == first)? as u128;
        for b in rest {
            let digit = self.tail.iter().position(|t| t == b)? as u128;
            offset = offset.checked_mul(base)?.checked_add(digit)?;
        }
        u64::try_from(index.checked_add(offset)?).ok()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

fn symbols(s: &str, which: &str) -> Result<Vec<u8>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return Err(CrunchError::config(format!("alphabet {which} has non-identifier symbol `{c}`")));
        }
        if !seen.insert(c) {
            return Err(CrunchError::config(format!("alphabet {which} repeats `{c}`")));
        }
        out.push(c as u8);
    }
    Ok(out)
}
