//! Style settings for a text layout
//!
//! Settings are plain data: every field is either required, optional with a
//! documented default, or a flag. They are validated once by
//! [`StyleSettings::validate`] before layout and read directly afterwards.

use crate::{LayoutError, Result};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use text_engine::{FontState, TextBaseline, DEFAULT_FONT_FAMILY};

/// Default text color (opaque white), ARGB
pub const DEFAULT_TEXT_COLOR: u32 = 0xFFFF_FFFF;
/// Default highlight color (fully transparent), ARGB
pub const DEFAULT_HIGHLIGHT_COLOR: u32 = 0x0000_0000;
/// Default shadow color (opaque black), ARGB
pub const DEFAULT_SHADOW_COLOR: u32 = 0xFF00_0000;

/// Horizontal alignment of each line within the inner width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Parse an alignment name. Unknown names fall back to left.
    pub fn from_name(name: &str) -> Self {
        match name {
            "center" => Self::Center,
            "right" => Self::Right,
            _ => Self::Left,
        }
    }
}

impl<'de> Deserialize<'de> for TextAlign {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Values that are not strings read as left
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAlign {
            Name(String),
            Other(IgnoredAny),
        }

        Ok(match RawAlign::deserialize(deserializer)? {
            RawAlign::Name(name) => Self::from_name(&name),
            RawAlign::Other(_) => Self::Left,
        })
    }
}

/// One family name or an ordered list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontFace {
    Single(String),
    List(Vec<String>),
}

impl FontFace {
    pub fn families(&self) -> Vec<String> {
        match self {
            Self::Single(family) => vec![family.clone()],
            Self::List(families) => families.clone(),
        }
    }
}

impl Default for FontFace {
    fn default() -> Self {
        Self::Single(DEFAULT_FONT_FAMILY.to_string())
    }
}

/// Clip box in layout units
///
/// A side counts as set when either of its coordinates is non-zero; a
/// missing coordinate reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClipRegion {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl ClipRegion {
    /// Width of the clip box, if the horizontal clip is active
    pub fn horizontal_extent(&self) -> Option<f64> {
        (self.start_x != 0.0 || self.end_x != 0.0).then(|| self.end_x - self.start_x)
    }

    /// Height of the clip box, if the vertical clip is active
    pub fn vertical_extent(&self) -> Option<f64> {
        (self.start_y != 0.0 || self.end_y != 0.0).then(|| self.end_y - self.start_y)
    }

    /// Top-left corner, if the clip box is offset from the origin
    pub fn origin(&self) -> Option<(f64, f64)> {
        (self.start_x != 0.0 || self.start_y != 0.0).then_some((self.start_x, self.start_y))
    }
}

/// Style settings for one layout call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSettings {
    /// The text to lay out
    pub text: String,
    /// Font family or ordered family list
    pub font_face: FontFace,
    /// CSS-style font style keywords
    pub font_style: String,
    /// Font size in layout units
    pub font_size: f64,
    /// Text baseline
    pub text_baseline: TextBaseline,
    /// Explicit box width (zero or unset: auto-size)
    pub w: Option<f64>,
    /// Explicit box height (zero or unset: auto-size)
    pub h: Option<f64>,
    pub padding_left: f64,
    pub padding_right: f64,
    /// Greedy word wrapping; when off, only explicit newlines break lines
    pub word_wrap: bool,
    /// Wrap width (zero or unset: the inner width)
    pub word_wrap_width: Option<f64>,
    /// Maximum visible lines (zero or unset: unlimited)
    pub max_lines: Option<usize>,
    /// Appended to the last visible line when text is truncated
    pub max_lines_suffix: Option<String>,
    /// Distance between baselines (zero or unset: the font size)
    pub line_height: Option<f64>,
    /// Baseline of the first line (unset: the font size)
    pub offset_y: Option<f64>,
    pub text_align: TextAlign,
    /// Text color, ARGB
    pub text_color: u32,

    pub highlight: bool,
    pub highlight_color: u32,
    /// Highlight height (zero or unset: 1.5 × font size)
    pub highlight_height: Option<f64>,
    /// Highlight top relative to the baseline (unset: -0.5 × font size)
    pub highlight_offset: Option<f64>,
    /// Unset: the text's left padding
    pub highlight_padding_left: Option<f64>,
    /// Unset: the text's right padding
    pub highlight_padding_right: Option<f64>,

    pub shadow: bool,
    pub shadow_color: u32,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
    pub shadow_blur: f64,

    pub cut_sx: Option<f64>,
    pub cut_sy: Option<f64>,
    pub cut_ex: Option<f64>,
    pub cut_ey: Option<f64>,

    /// Scale factor applied to all output geometry
    pub precision: f64,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_face: FontFace::default(),
            font_style: "normal".to_string(),
            font_size: 40.0,
            text_baseline: TextBaseline::Alphabetic,
            w: None,
            h: None,
            padding_left: 0.0,
            padding_right: 0.0,
            word_wrap: true,
            word_wrap_width: None,
            max_lines: None,
            max_lines_suffix: None,
            line_height: None,
            offset_y: None,
            text_align: TextAlign::Left,
            text_color: DEFAULT_TEXT_COLOR,
            highlight: false,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            highlight_height: None,
            highlight_offset: None,
            highlight_padding_left: None,
            highlight_padding_right: None,
            shadow: false,
            shadow_color: DEFAULT_SHADOW_COLOR,
            shadow_offset_x: 0.0,
            shadow_offset_y: 0.0,
            shadow_blur: 5.0,
            cut_sx: None,
            cut_sy: None,
            cut_ex: None,
            cut_ey: None,
            precision: 1.0,
        }
    }
}

impl StyleSettings {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_font_face<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.font_face = FontFace::List(families.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_size(mut self, w: Option<f64>, h: Option<f64>) -> Self {
        self.w = w;
        self.h = h;
        self
    }

    pub fn with_padding(mut self, left: f64, right: f64) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    pub fn with_word_wrap(mut self, word_wrap: bool) -> Self {
        self.word_wrap = word_wrap;
        self
    }

    pub fn with_word_wrap_width(mut self, width: f64) -> Self {
        self.word_wrap_width = Some(width);
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize, suffix: Option<&str>) -> Self {
        self.max_lines = Some(max_lines);
        self.max_lines_suffix = suffix.map(str::to_string);
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn with_offset_y(mut self, offset_y: f64) -> Self {
        self.offset_y = Some(offset_y);
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn with_highlight(mut self, color: u32) -> Self {
        self.highlight = true;
        self.highlight_color = color;
        self
    }

    pub fn with_shadow(mut self, color: u32, offset_x: f64, offset_y: f64, blur: f64) -> Self {
        self.shadow = true;
        self.shadow_color = color;
        self.shadow_offset_x = offset_x;
        self.shadow_offset_y = offset_y;
        self.shadow_blur = blur;
        self
    }

    pub fn with_clip(mut self, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        self.cut_sx = Some(start_x);
        self.cut_sy = Some(start_y);
        self.cut_ex = Some(end_x);
        self.cut_ey = Some(end_y);
        self
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Reject settings that cannot describe any geometry.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("fontSize", Some(self.font_size)),
            ("w", self.w),
            ("h", self.h),
            ("paddingLeft", Some(self.padding_left)),
            ("paddingRight", Some(self.padding_right)),
            ("wordWrapWidth", self.word_wrap_width),
            ("lineHeight", self.line_height),
            ("offsetY", self.offset_y),
            ("highlightHeight", self.highlight_height),
            ("highlightOffset", self.highlight_offset),
            ("highlightPaddingLeft", self.highlight_padding_left),
            ("highlightPaddingRight", self.highlight_padding_right),
            ("shadowOffsetX", Some(self.shadow_offset_x)),
            ("shadowOffsetY", Some(self.shadow_offset_y)),
            ("shadowBlur", Some(self.shadow_blur)),
            ("cutSx", self.cut_sx),
            ("cutSy", self.cut_sy),
            ("cutEx", self.cut_ex),
            ("cutEy", self.cut_ey),
            ("precision", Some(self.precision)),
        ];
        for (name, value) in numbers {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(invalid(format!("{} must be finite, got {}", name, value)));
                }
            }
        }

        if self.precision <= 0.0 {
            return Err(invalid(format!("precision must be positive, got {}", self.precision)));
        }
        if self.font_size <= 0.0 {
            return Err(invalid(format!("fontSize must be positive, got {}", self.font_size)));
        }
        for (name, value) in [("w", self.w), ("h", self.h), ("lineHeight", self.line_height)] {
            if matches!(value, Some(v) if v < 0.0) {
                return Err(invalid(format!("{} must not be negative", name)));
            }
        }
        Ok(())
    }

    /// Font state used for layout measurement (unscaled)
    pub fn font_state(&self) -> FontState {
        FontState::new(DEFAULT_FONT_FAMILY, self.font_size)
            .with_families(self.font_face.families())
            .with_style(self.font_style.clone())
            .with_baseline(self.text_baseline)
    }

    pub fn explicit_width(&self) -> Option<f64> {
        self.w.filter(|w| *w != 0.0)
    }

    pub fn explicit_height(&self) -> Option<f64> {
        self.h.filter(|h| *h != 0.0)
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines.filter(|n| *n > 0)
    }

    pub fn max_lines_suffix(&self) -> Option<&str> {
        self.max_lines_suffix.as_deref().filter(|s| !s.is_empty())
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
            .filter(|h| *h != 0.0)
            .unwrap_or(self.font_size)
    }

    /// Baseline of the first line
    pub fn baseline_offset(&self) -> f64 {
        self.offset_y.unwrap_or(self.font_size)
    }

    pub fn clip_region(&self) -> ClipRegion {
        ClipRegion {
            start_x: self.cut_sx.unwrap_or(0.0),
            start_y: self.cut_sy.unwrap_or(0.0),
            end_x: self.cut_ex.unwrap_or(0.0),
            end_y: self.cut_ey.unwrap_or(0.0),
        }
    }
}

fn invalid(message: String) -> LayoutError {
    LayoutError::InvalidSettings(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = StyleSettings::new("hi");
        assert_eq!(settings.font_size, 40.0);
        assert_eq!(settings.line_height(), 40.0);
        assert_eq!(settings.baseline_offset(), 40.0);
        assert!(settings.word_wrap);
        assert_eq!(settings.text_align, TextAlign::Left);
        assert_eq!(settings.precision, 1.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_values_read_as_unset() {
        let mut settings = StyleSettings::new("hi")
            .with_size(Some(0.0), Some(0.0))
            .with_max_lines(0, Some(""))
            .with_line_height(0.0);
        assert_eq!(settings.explicit_width(), None);
        assert_eq!(settings.explicit_height(), None);
        assert_eq!(settings.max_lines(), None);
        assert_eq!(settings.max_lines_suffix(), None);
        assert_eq!(settings.line_height(), 40.0);

        // An explicit zero offset is honored
        settings.offset_y = Some(0.0);
        assert_eq!(settings.baseline_offset(), 0.0);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "text": "Hello world",
            "fontFace": ["Roboto", "sans-serif"],
            "fontSize": 24,
            "textBaseline": "top",
            "w": 300,
            "paddingLeft": 5,
            "maxLines": 2,
            "maxLinesSuffix": "...",
            "textAlign": "center",
            "highlight": true,
            "highlightColor": 4278190335,
            "cutSx": 10,
            "precision": 2
        }"#;
        let settings: StyleSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.text, "Hello world");
        assert_eq!(settings.font_face.families(), vec!["Roboto", "sans-serif"]);
        assert_eq!(settings.font_size, 24.0);
        assert_eq!(settings.text_baseline, TextBaseline::Top);
        assert_eq!(settings.explicit_width(), Some(300.0));
        assert_eq!(settings.padding_left, 5.0);
        assert_eq!(settings.max_lines(), Some(2));
        assert_eq!(settings.max_lines_suffix(), Some("..."));
        assert_eq!(settings.text_align, TextAlign::Center);
        assert!(settings.highlight);
        assert_eq!(settings.highlight_color, 0xFF00_00FF);
        assert_eq!(settings.precision, 2.0);
        // Fields not present keep their defaults
        assert!(settings.word_wrap);
        assert_eq!(settings.shadow_blur, 5.0);
    }

    #[test]
    fn test_font_face_single_string() {
        let settings: StyleSettings =
            serde_json::from_str(r#"{"text": "x", "fontFace": "Roboto"}"#).unwrap();
        assert_eq!(settings.font_face, FontFace::Single("Roboto".into()));
        assert_eq!(settings.font_state().families, vec!["Roboto"]);
    }

    #[test]
    fn test_unknown_alignment_is_left() {
        let settings: StyleSettings =
            serde_json::from_str(r#"{"text": "x", "textAlign": "justify"}"#).unwrap();
        assert_eq!(settings.text_align, TextAlign::Left);
    }

    #[test]
    fn test_non_string_alignment_is_left() {
        for value in ["null", "3", "1.5", "true", "[\"right\"]", "{\"align\": \"center\"}"] {
            let json = format!(r#"{{"text": "x", "textAlign": {}, "fontSize": 12}}"#, value);
            let settings: StyleSettings = serde_json::from_str(&json).unwrap();
            assert_eq!(settings.text_align, TextAlign::Left, "textAlign = {}", value);
            // Fields after the alignment still parse
            assert_eq!(settings.font_size, 12.0);
        }

        let settings: StyleSettings =
            serde_json::from_str(r#"{"text": "x", "textAlign": "right"}"#).unwrap();
        assert_eq!(settings.text_align, TextAlign::Right);
    }

    #[test]
    fn test_validate_rejects_bad_precision() {
        let settings = StyleSettings::new("x").with_precision(0.0);
        assert!(matches!(settings.validate(), Err(LayoutError::InvalidSettings(_))));
        let settings = StyleSettings::new("x").with_precision(f64::NAN);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_box() {
        let settings = StyleSettings::new("x").with_size(Some(-5.0), None);
        assert!(settings.validate().is_err());
        let settings = StyleSettings::new("x").with_font_size(0.0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_font_state_carries_style() {
        let mut settings = StyleSettings::new("x")
            .with_font_face(["Roboto", "Arial"])
            .with_font_size(18.0);
        settings.font_style = "italic".into();
        let font = settings.font_state();
        assert_eq!(font.families, vec!["Roboto", "Arial"]);
        assert_eq!(font.size, 18.0);
        assert_eq!(font.style, "italic");
    }

    #[test]
    fn test_clip_region_activation() {
        let clip = StyleSettings::new("x").clip_region();
        assert_eq!(clip.horizontal_extent(), None);
        assert_eq!(clip.vertical_extent(), None);
        assert_eq!(clip.origin(), None);

        let clip = StyleSettings::new("x").with_clip(0.0, 5.0, 50.0, 25.0).clip_region();
        assert_eq!(clip.horizontal_extent(), Some(50.0));
        assert_eq!(clip.vertical_extent(), Some(20.0));
        assert_eq!(clip.origin(), Some((0.0, 5.0)));
    }
}
