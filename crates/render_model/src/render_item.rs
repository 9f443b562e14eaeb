//! Draw instruction types

use serde::{Deserialize, Serialize};
use text_engine::FontState;

/// A rectangle in surface coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// CSS `rgba()` string with alpha in `[0, 1]`
    pub fn css_rgba(&self) -> String {
        format!(
            "rgba({},{},{},{:.4})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

/// Shadow applied to everything drawn while it is set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowState {
    pub color: Color,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
}

impl Default for ShadowState {
    /// No visible shadow
    fn default() -> Self {
        Self {
            color: Color::TRANSPARENT,
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
        }
    }
}

/// One step of a draw plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawInstruction {
    /// Move the coordinate origin
    Translate { x: f64, y: f64 },
    /// A filled rectangle (line highlight)
    FillRect { bounds: Rect, color: Color },
    /// Save the current shadow and apply this one
    SetShadow(ShadowState),
    /// A run of text with its left baseline point
    DrawText { text: String, x: f64, y: f64 },
    /// Restore the shadow saved by the last `SetShadow`
    RestoreShadow,
}

/// Everything a rasterizer needs to draw laid-out text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawPlan {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Font with its size scaled by precision
    pub font: FontState,
    pub text_color: Color,
    pub instructions: Vec<DrawInstruction>,
}

impl DrawPlan {
    /// Text runs in draw order
    pub fn text_runs(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.instructions.iter().filter_map(|instruction| match instruction {
            DrawInstruction::DrawText { text, x, y } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }

    /// Highlight rectangles in draw order
    pub fn fill_rects(&self) -> impl Iterator<Item = &Rect> {
        self.instructions.iter().filter_map(|instruction| match instruction {
            DrawInstruction::FillRect { bounds, .. } => Some(bounds),
            _ => None,
        })
    }
}
