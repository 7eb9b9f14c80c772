//! Minifier collaborator — the last stage of a minified compaction.

use crunch_core::Result;

/// Generic text minifier run after mangling.
pub trait Minifier: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    fn minify(&self, source: &str) -> Result<String>;
}

/// Returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Minifier for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn minify(&self, source: &str) -> Result<String> {
        Ok(source.to_string())
    }
}

/// Line-level whitespace cleanup: CRLF → LF, indentation and trailing
/// blanks stripped, empty lines dropped.
///
/// Not syntax-aware: whitespace inside multi-line string literals is
/// trimmed too.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineMinifier;

impl Minifier for LineMinifier {
    fn name(&self) -> &str {
        "lines"
    }

    fn minify(&self, source: &str) -> Result<String> {
        Ok(source
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
