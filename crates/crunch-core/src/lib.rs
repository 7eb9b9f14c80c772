//! Shared types, errors and build configuration for the crunch compactor.

pub mod config;
pub mod error;
pub mod exclusions;
pub mod types;

pub use config::{BuildConfig, DEFAULT_MAX_BYTES};
pub use error::{CrunchError, Result};
pub use exclusions::ExclusionSet;
pub use types::{is_identifier, CandidateToken, ConstantTable, Literal, MangleMap};
