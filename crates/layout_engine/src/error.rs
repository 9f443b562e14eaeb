//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Text measurement failed: {0}")]
    Measurement(#[from] text_engine::TextError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
