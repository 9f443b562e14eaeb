//! Error types for text engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Invalid font data: {0}")]
    InvalidFontData(String),

    #[error("Invalid font specification: {0}")]
    InvalidFontSpec(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
