//! Font state used for measurement and drawing

use crate::{Result, TextError};
use serde::{Deserialize, Serialize};

/// Default family when none is configured
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Vertical anchor of the text relative to the draw position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Top,
    Hanging,
    Middle,
    Ideographic,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Top => "top",
            Self::Hanging => "hanging",
            Self::Middle => "middle",
            Self::Ideographic => "ideographic",
            Self::Bottom => "bottom",
        }
    }
}

/// The font settings in effect when a string is measured or drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontState {
    /// Ordered family list, most preferred first
    pub families: Vec<String>,
    /// CSS-style font style keywords (e.g. "normal", "italic bold")
    pub style: String,
    /// Font size in pixels
    pub size: f64,
    /// Text baseline
    pub baseline: TextBaseline,
}

impl FontState {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            families: vec![family.into()],
            style: "normal".to_string(),
            size,
            baseline: TextBaseline::Alphabetic,
        }
    }

    pub fn with_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.families = families.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// The same font with its size multiplied by `precision`
    pub fn scaled(&self, precision: f64) -> Self {
        Self {
            size: self.size * precision,
            ..self.clone()
        }
    }

    /// First family in the list, if any
    pub fn primary_family(&self) -> Option<&str> {
        self.families.first().map(String::as_str)
    }

    /// CSS font shorthand, e.g. `normal 40px "Roboto","sans-serif"`
    pub fn css_font(&self) -> String {
        let families = self
            .families
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(",");
        format!("{} {}px {}", self.style, self.size, families)
    }

    /// Check that the font can be measured at all.
    pub fn validate(&self) -> Result<()> {
        if self.families.is_empty() || self.families.iter().any(|f| f.trim().is_empty()) {
            return Err(TextError::InvalidFontSpec(
                "font family list must contain non-empty names".into(),
            ));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(TextError::InvalidFontSpec(format!(
                "font size must be positive, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

impl Default for FontState {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, 40.0)
    }
}
