//! Replaying draw plans onto a drawing surface
//!
//! A [`DrawSurface`] is whatever finally puts pixels somewhere: a raster
//! canvas, a GPU text atlas, or the [`RecordingSurface`] used in tests.
//! Replaying takes `&mut` on the surface, so one surface can only serve one
//! plan at a time.

use crate::{Color, DrawInstruction, DrawPlan, Rect, Result, ShadowState};
use serde::Serialize;
use text_engine::FontState;

/// A drawing backend
pub trait DrawSurface {
    /// Resize the surface; this discards its previous contents and state.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    fn set_font(&mut self, font: &FontState);

    fn translate(&mut self, x: f64, y: f64);

    fn fill_rect(&mut self, bounds: Rect, color: Color);

    fn shadow(&self) -> ShadowState;

    fn set_shadow(&mut self, shadow: ShadowState);

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color);
}

impl DrawPlan {
    /// Draw this plan onto `surface`
    pub fn execute<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.resize(self.width, self.height)?;
        // Resizing resets the font, so it is applied afterwards
        surface.set_font(&self.font);

        let mut saved_shadow = None;
        for instruction in &self.instructions {
            match instruction {
                DrawInstruction::Translate { x, y } => surface.translate(*x, *y),
                DrawInstruction::FillRect { bounds, color } => surface.fill_rect(*bounds, *color),
                DrawInstruction::SetShadow(shadow) => {
                    saved_shadow = Some(surface.shadow());
                    surface.set_shadow(*shadow);
                }
                DrawInstruction::DrawText { text, x, y } => {
                    surface.fill_text(text, *x, *y, self.text_color)
                }
                DrawInstruction::RestoreShadow => {
                    if let Some(shadow) = saved_shadow.take() {
                        surface.set_shadow(shadow);
                    }
                }
            }
        }
        Ok(())
    }
}

/// A call received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SurfaceCall {
    Resize { width: u32, height: u32 },
    SetFont(String),
    Translate { x: f64, y: f64 },
    FillRect { bounds: Rect, color: Color },
    SetShadow(ShadowState),
    FillText { text: String, x: f64, y: f64, color: Color, shadow: ShadowState },
}

/// Headless surface that records every call
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub width: u32,
    pub height: u32,
    /// Accumulated translation
    pub origin: (f64, f64),
    shadow: ShadowState,
    max_dimension: Option<u32>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject resizes beyond `max` pixels in either direction
    pub fn with_max_dimension(mut self, max: u32) -> Self {
        self.max_dimension = Some(max);
        self
    }

    /// Text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if let Some(max) = self.max_dimension {
            if width > max || height > max {
                return Err(crate::RenderError::SurfaceFailed(format!(
                    "{}x{} exceeds the {}px limit",
                    width, height, max
                )));
            }
        }
        self.width = width;
        self.height = height;
        self.origin = (0.0, 0.0);
        self.shadow = ShadowState::default();
        self.calls.push(SurfaceCall::Resize { width, height });
        Ok(())
    }

    fn set_font(&mut self, font: &FontState) {
        self.calls.push(SurfaceCall::SetFont(font.css_font()));
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.origin.0 += x;
        self.origin.1 += y;
        self.calls.push(SurfaceCall::Translate { x, y });
    }

    fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.calls.push(SurfaceCall::FillRect { bounds, color });
    }

    fn shadow(&self) -> ShadowState {
        self.shadow
    }

    fn set_shadow(&mut self, shadow: ShadowState) {
        self.shadow = shadow;
        self.calls.push(SurfaceCall::SetShadow(shadow));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color) {
        self.calls.push(SurfaceCall::FillText {
            text: text.to_string(),
            x,
            y,
            color,
            shadow: self.shadow,
        });
    }
}
