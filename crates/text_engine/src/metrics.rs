//! Text measurement
//!
//! [`TextMeasurer`] is the only capability the layout engine needs from a
//! font backend. Implementations must be pure: the same text and font state
//! always produce the same width.

use crate::{FontState, Result};
use unicode_segmentation::UnicodeSegmentation;

/// Measures the rendered width of a string
pub trait TextMeasurer {
    /// Width of `text` in pixels when rendered with `font`.
    fn measure_width(&self, text: &str, font: &FontState) -> Result<f64>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &FontState) -> Result<f64>,
{
    fn measure_width(&self, text: &str, font: &FontState) -> Result<f64> {
        self(text, font)
    }
}

/// Monospace measurer: every grapheme advances by `advance_em` of the font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMeasurer {
    pub advance_em: f64,
}

impl FixedWidthMeasurer {
    pub fn new(advance_em: f64) -> Self {
        Self { advance_em }
    }

    /// A measurer where each grapheme is exactly `width` pixels at `font_size`
    pub fn with_cell_width(width: f64, font_size: f64) -> Self {
        Self::new(width / font_size)
    }
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        // Average glyph width is roughly 60% of the em
        Self::new(0.6)
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure_width(&self, text: &str, font: &FontState) -> Result<f64> {
        font.validate()?;
        let clusters = text.graphemes(true).count();
        Ok(clusters as f64 * self.advance_em * font.size)
    }
}
