//! Layout Engine - Word wrapping, truncation, and line positioning
//!
//! This crate turns a string and its style settings into positioned lines.
//! It never rasterizes anything; widths come from a
//! [`text_engine::TextMeasurer`] supplied by the caller.
//!
//! The pipeline runs in a fixed order:
//! 1. [`WordWrapper`] splits the text into greedy-wrapped lines
//! 2. [`LineTruncator`] applies the max-line limit and collects overflow
//! 3. [`TextLayoutEngine`] measures the visible lines, sizes the box, and
//!    positions every line

mod error;
mod settings;
mod text_layout;
mod truncation;
mod word_wrap;

pub use error::*;
pub use settings::*;
pub use text_layout::*;
pub use truncation::*;
pub use word_wrap::*;
