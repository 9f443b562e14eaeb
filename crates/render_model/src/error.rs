//! Error types for render model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Layout failed: {0}")]
    Layout(#[from] layout_engine::LayoutError),

    #[error("Drawing surface failed: {0}")]
    SurfaceFailed(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
