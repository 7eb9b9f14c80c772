use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{CrunchError, Result};

/// True when `word` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(word: &str) -> bool {
    let mut bytes = word.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Literal value a constant stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    Str(String),
}

impl Literal {
    /// Canonical source text of the literal.
    ///
    /// Strings are JSON-quoted with escaping, booleans are `true`/`false` and
    /// numbers use the shorter of plain decimal and exponent notation.
    pub fn to_source(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Str(s) => Value::String(s.clone()).to_string(),
            Self::Number(n) => format_number(*n),
        }
    }
}

fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".into();
    }
    let plain = if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    };
    let exp = format!("{n:e}");
    if exp.len() < plain.len() { exp } else { plain }
}

impl TryFrom<&Value> for Literal {
    type Error = String;

    fn try_from(value: &Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::String(s) => Ok(Self::Str(s.clone())),
            Value::Number(n) => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map(Self::Number)
                .ok_or_else(|| format!("number {n} has no finite representation")),
            Value::Null => Err("null is not a literal".into()),
            Value::Array(_) => Err("arrays are not literals".into()),
            Value::Object(_) => Err("objects are not literals".into()),
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self { Self::Bool(b) }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self { Self::Number(n) }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self { Self::Number(n as f64) }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self { Self::Str(s.to_string()) }
}

/// Named constants in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    entries: Vec<(String, Literal)>,
    index: HashMap<String, usize>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constant. Names must be identifiers and unique; numbers
    /// must be finite.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Literal>) -> Result<()> {
        let name = name.into();
        let value = value.into();
        if let Literal::Number(n) = &value {
            if !n.is_finite() {
                return Err(CrunchError::InvalidConstant {
                    name,
                    reason: format!("number {n} has no finite representation"),
                });
            }
        }
        if !is_identifier(&name) {
            return Err(CrunchError::InvalidConstant {
                name,
                reason: "name is not a valid identifier".into(),
            });
        }
        if self.index.contains_key(&name) {
            return Err(CrunchError::InvalidConstant {
                name,
                reason: "declared more than once".into(),
            });
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
        Ok(())
    }

    /// Builder-style insert for tests and literals known to be valid.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Literal>) -> Result<Self> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Build from a JSON object, keeping document order.
    pub fn from_json(map: &serde_json::Map<String, Value>) -> Result<Self> {
        let mut table = Self::new();
        for (name, value) in map {
            let literal = Literal::try_from(value).map_err(|reason| CrunchError::InvalidConstant {
                name: name.clone(),
                reason,
            })?;
            table.insert(name.clone(), literal)?;
        }
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&Literal> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A word worth replacing, with how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateToken {
    pub text: String,
    pub occurrences: usize,
    /// Byte offset of the first occurrence; used for tie-breaks.
    pub first_seen: usize,
}

impl CandidateToken {
    /// Bytes the token currently occupies across the whole text.
    pub fn weight(&self) -> usize {
        self.occurrences * self.text.len()
    }
}

/// Ordered token -> short code assignments.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MangleMap {
    entries: Vec<(String, String)>,
    #[serde(skip)]
    by_token: HashMap<String, usize>,
    #[serde(skip)]
    by_code: HashMap<String, usize>,
}

impl MangleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assignment. Returns false if the token or the code is
    /// already mapped.
    pub fn insert(&mut self, token: impl Into<String>, code: impl Into<String>) -> bool {
        let (token, code) = (token.into(), code.into());
        if self.by_token.contains_key(&token) || self.by_code.contains_key(&code) {
            return false;
        }
        let i = self.entries.len();
        self.by_token.insert(token.clone(), i);
        self.by_code.insert(code.clone(), i);
        self.entries.push((token, code));
        true
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.by_token.get(token).map(|&i| self.entries[i].1.as_str())
    }

    /// Reverse lookup, code -> original token.
    pub fn token_for(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(|&i| self.entries[i].0.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
