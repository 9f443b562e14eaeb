//! Text measurement from real font data using rustybuzz
//!
//! rustybuzz is a pure Rust port of HarfBuzz. Shaping turns a string into
//! positioned glyphs; the rendered width of the string is the sum of the
//! glyph advances scaled from font units to the requested pixel size.

use crate::{FontState, Result, TextError, TextMeasurer};
use std::collections::HashMap;

/// Font data registered under a family name
struct LoadedFace {
    data: Vec<u8>,
    index: u32,
}

impl LoadedFace {
    fn face(&self) -> Result<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index)
            .ok_or_else(|| TextError::InvalidFontData("Failed to parse font".into()))
    }
}

/// Measures text by shaping it against loaded fonts
///
/// Families are resolved in the order given by the [`FontState`]; the first
/// family with loaded data is used for the whole string.
pub struct TextShaper {
    faces: HashMap<String, LoadedFace>,
}

impl TextShaper {
    /// Create a shaper with no fonts loaded
    pub fn new() -> Self {
        Self {
            faces: HashMap::new(),
        }
    }

    /// Register font data under a family name
    pub fn load_font(&mut self, family: impl Into<String>, data: Vec<u8>) -> Result<()> {
        self.load_font_index(family, data, 0)
    }

    /// Register a face from a font collection
    pub fn load_font_index(
        &mut self,
        family: impl Into<String>,
        data: Vec<u8>,
        index: u32,
    ) -> Result<()> {
        let family = family.into();
        let loaded = LoadedFace { data, index };
        let units_per_em = loaded.face()?.units_per_em();

        tracing::debug!(
            target: "text_engine::shaper",
            family = %family,
            units_per_em = units_per_em,
            "font loaded"
        );

        self.faces.insert(family, loaded);
        Ok(())
    }

    /// Check if a family has font data
    pub fn has_font(&self, family: &str) -> bool {
        self.faces.contains_key(family)
    }

    fn resolve(&self, font: &FontState) -> Result<&LoadedFace> {
        font.families
            .iter()
            .find_map(|family| self.faces.get(family))
            .ok_or_else(|| TextError::FontNotFound(font.families.join(", ")))
    }

    /// Shape `text` and return its advance width in pixels
    fn shape_width(&self, text: &str, size: f64, face: &rustybuzz::Face<'_>) -> Result<f64> {
        let units_per_em = face.units_per_em() as f64;
        if units_per_em <= 0.0 {
            return Err(TextError::InvalidFontData("units per em is zero".into()));
        }

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(face, &[], buffer);

        let total_advance: i64 = output
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance as i64)
            .sum();

        Ok(total_advance as f64 * size / units_per_em)
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for TextShaper {
    fn measure_width(&self, text: &str, font: &FontState) -> Result<f64> {
        font.validate()?;
        if text.is_empty() {
            return Ok(0.0);
        }
        let loaded = self.resolve(font)?;
        let face = loaded.face()?;
        self.shape_width(text, font.size, &face)
    }
}
