//! Error types for the element store, style choices, and configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("element index {index} out of bounds (store has {len} elements)")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("unsupported font size: {0}px")]
    UnsupportedFontSize(u32),
    #[error("unsupported font family: {0:?}")]
    UnsupportedFontFamily(String),
    #[error("unsupported alignment: {0:?}")]
    UnsupportedAlignment(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
