//! Crunch compactor — shrink source text to fit a byte budget.
//!
//! Stages:
//! 1. Constant substitution — named constants → literal values
//! 2. Token analysis — identifiers ranked by bytes occupied
//! 3. Mangling — collision-safe short codes from a bijective encoder
//! 4. Minification — pluggable [`Minifier`] collaborator
//!
//! [`audit`] compares the packaged result with the size budget.

pub mod analyzer;
pub mod audit;
pub mod encoder;
pub mod mangle;
pub mod minify;
pub mod pipeline;
pub mod substitute;
pub mod words;

pub use analyzer::{analyze, AnalyzerOptions};
pub use audit::{audit, SizeReport};
pub use encoder::Alphabet;
pub use mangle::{apply_map, build_map, MangleOptions};
pub use minify::{LineMinifier, Minifier, Passthrough};
pub use pipeline::{CompactionReport, Compactor};
pub use substitute::substitute;
