//! Box sizing and line positioning
//!
//! The layout engine runs the whole measurement pipeline for one call:
//! wrap, truncate, measure each visible line, then size the box and place
//! every line. Geometry is computed in layout units and multiplied by the
//! precision factor on the way out.

use crate::{LineTruncator, Result, StyleSettings, TextAlign, WordWrapper, WrapResult};
use serde::Serialize;
use text_engine::{FontState, TextMeasurer};

/// Smallest inner width an explicit box may have
pub const MIN_INNER_WIDTH: f64 = 10.0;

/// Widest surface, in pixels, used to bound wrapping when no width is set
pub const MAX_SURFACE_WIDTH: f64 = 2048.0;

/// A positioned visible line, in precision-scaled units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub text: String,
    /// Measured width
    pub width: f64,
    /// Left edge of the text
    pub x: f64,
    /// Baseline
    pub y: f64,
}

/// Summary of a layout call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    /// Total box width, scaled by precision
    pub width: f64,
    /// Total box height, scaled by precision
    pub height: f64,
    pub precision: f64,
    /// Visible lines, top to bottom
    pub lines: Vec<String>,
    /// Measured width of each visible line, in layout units
    pub line_widths: Vec<f64>,
    /// Whether text was cut off by the line limit
    pub more_text_lines: bool,
    /// Overflow text, empty when nothing was cut off
    pub remaining_text: String,
}

/// Pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// Everything the render plan needs from layout
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub info: LayoutInfo,
    /// Positioned lines, scaled by precision
    pub lines: Vec<Line>,
    /// Box width minus paddings, in layout units
    pub inner_width: f64,
    /// Surface dimensions after clipping and flooring
    pub surface: SurfaceSize,
    /// Font used for measurement (unscaled)
    pub font: FontState,
}

/// Runs the layout pipeline for one set of settings
pub struct TextLayoutEngine<'a, M: TextMeasurer + ?Sized> {
    settings: &'a StyleSettings,
    measurer: &'a M,
}

impl<'a, M: TextMeasurer + ?Sized> TextLayoutEngine<'a, M> {
    pub fn new(settings: &'a StyleSettings, measurer: &'a M) -> Self {
        Self { settings, measurer }
    }

    /// Wrap, truncate, measure and position the text
    pub fn layout(&self) -> Result<TextLayout> {
        let settings = self.settings;
        let precision = settings.precision;
        let paddings = settings.padding_left + settings.padding_right;
        let font = settings.font_state();

        let (mut width, mut inner_width) = box_width(
            settings
                .explicit_width()
                .unwrap_or(MAX_SURFACE_WIDTH / precision),
            paddings,
        );

        let wrap_width = settings
            .word_wrap_width
            .filter(|w| *w != 0.0)
            .unwrap_or(inner_width);

        let wrapper = WordWrapper::new(self.measurer, &font);
        let wrapped = if settings.word_wrap {
            wrapper.wrap(&settings.text, wrap_width)?
        } else {
            WrapResult::split_lines(&settings.text)
        };

        let truncated = LineTruncator::new(settings.max_lines(), settings.max_lines_suffix())
            .truncate(wrapped, &wrapper, wrap_width)?;

        let line_widths = truncated
            .lines
            .iter()
            .map(|line| wrapper.measure(line))
            .collect::<Result<Vec<f64>>>()?;
        let max_line_width = line_widths.iter().copied().fold(0.0, f64::max);

        if settings.explicit_width().is_none() {
            width = max_line_width + paddings;
            inner_width = max_line_width;
        }

        let line_height = settings.line_height();
        let height = match settings.explicit_height() {
            Some(h) => h,
            None => auto_height(settings, truncated.lines.len(), line_height),
        };

        let baseline = settings.baseline_offset();
        let lines = truncated
            .lines
            .iter()
            .zip(&line_widths)
            .enumerate()
            .map(|(index, (text, &line_width))| {
                let x = align_offset(settings.text_align, inner_width, line_width)
                    + settings.padding_left;
                let y = index as f64 * line_height + baseline;
                Line {
                    text: text.clone(),
                    width: line_width * precision,
                    x: x * precision,
                    y: y * precision,
                }
            })
            .collect();

        let width = floor_dimension(width);
        let height = floor_dimension(height);
        let surface = surface_size(settings, width, height);

        tracing::debug!(
            target: "layout_engine::layout",
            width = width,
            height = height,
            lines = truncated.lines.len(),
            truncated = truncated.more_text_lines,
            precision = precision,
            "text laid out"
        );

        Ok(TextLayout {
            info: LayoutInfo {
                width: width * precision,
                height: height * precision,
                precision,
                lines: truncated.lines,
                line_widths,
                more_text_lines: truncated.more_text_lines,
                remaining_text: truncated.remaining_text,
            },
            lines,
            inner_width,
            surface,
            font,
        })
    }
}

/// Box width and inner width, growing the box to keep the minimum inner width
fn box_width(width: f64, paddings: f64) -> (f64, f64) {
    let inner_width = width - paddings;
    if inner_width < MIN_INNER_WIDTH {
        (width + (MIN_INNER_WIDTH - inner_width), MIN_INNER_WIDTH)
    } else {
        (width, inner_width)
    }
}

/// Height that fits every line plus room below the last baseline
fn auto_height(settings: &StyleSettings, line_count: usize, line_height: f64) -> f64 {
    let font_size = settings.font_size;
    // An unset offset adds nothing here, even though the first baseline
    // still defaults to the font size.
    let offset_y = settings.offset_y.unwrap_or(0.0);
    line_height * line_count.saturating_sub(1) as f64
        + 0.5 * font_size
        + line_height.max(font_size)
        + offset_y
}

fn align_offset(align: TextAlign, inner_width: f64, line_width: f64) -> f64 {
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => (inner_width - line_width) / 2.0,
        TextAlign::Right => inner_width - line_width,
    }
}

/// Zero, negative and NaN sizes become 1
fn floor_dimension(value: f64) -> f64 {
    if value >= 1.0 {
        value
    } else {
        1.0
    }
}

fn surface_size(settings: &StyleSettings, width: f64, height: f64) -> SurfaceSize {
    let clip = settings.clip_region();
    let width = clip
        .horizontal_extent()
        .map_or(width, |extent| width.min(extent));
    let height = clip
        .vertical_extent()
        .map_or(height, |extent| height.min(extent));

    let precision = settings.precision;
    SurfaceSize {
        width: (floor_dimension(width) * precision).ceil() as u32,
        height: (floor_dimension(height) * precision).ceil() as u32,
    }
}
