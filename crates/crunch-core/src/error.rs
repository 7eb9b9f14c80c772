use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrunchError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid constant {name}: {reason}")]
    InvalidConstant { name: String, reason: String },
    #[error("Encoder exhausted while mangling `{token}`: {probed} consecutive codes collided")]
    EncoderExhaustion { token: String, probed: usize },
    #[error("Minifier {name} failed: {message}")]
    Minifier { name: String, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CrunchError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CrunchError>;
