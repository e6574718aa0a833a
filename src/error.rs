// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The requested names were not a JSON array of strings.
    #[error("invalid client name list: {0}")]
    Names(#[from] serde_json::Error),

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
