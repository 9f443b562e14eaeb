//! Render Model - Layout to draw plan conversion
//!
//! This crate converts a text layout into an ordered list of draw
//! instructions that any rasterizer can replay, and hosts the
//! [`render_text`] entry point that runs layout and planning in one call.

mod error;
mod plan;
mod render_item;
mod renderer;
mod surface;

pub use error::*;
pub use plan::*;
pub use render_item::*;
pub use renderer::*;
pub use surface::*;
