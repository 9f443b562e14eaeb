//! Convert a text layout into a draw plan

use crate::{Color, DrawInstruction, DrawPlan, Rect, ShadowState};
use layout_engine::{StyleSettings, TextLayout};

/// Highlight geometry with every default resolved, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyle {
    pub color: Color,
    pub height: f64,
    /// Top of the highlight relative to the baseline
    pub offset: f64,
    pub padding_left: f64,
    pub padding_right: f64,
}

impl HighlightStyle {
    pub fn resolve(settings: &StyleSettings) -> Self {
        let font_size = settings.font_size;
        Self {
            color: Color::from_argb(settings.highlight_color),
            height: settings
                .highlight_height
                .filter(|h| *h != 0.0)
                .unwrap_or(font_size * 1.5),
            offset: settings.highlight_offset.unwrap_or(-0.5 * font_size),
            padding_left: settings
                .highlight_padding_left
                .unwrap_or(settings.padding_left),
            padding_right: settings
                .highlight_padding_right
                .unwrap_or(settings.padding_right),
        }
    }
}

/// Builds draw plans from layouts
pub struct DrawPlanBuilder<'a> {
    settings: &'a StyleSettings,
}

impl<'a> DrawPlanBuilder<'a> {
    pub fn new(settings: &'a StyleSettings) -> Self {
        Self { settings }
    }

    /// Emit the draw instructions for `layout`
    ///
    /// Order: clip translation, highlights, shadow, text runs, shadow
    /// restore, reverse translation.
    pub fn build(&self, layout: &TextLayout) -> DrawPlan {
        let settings = self.settings;
        let precision = settings.precision;
        let mut instructions = Vec::new();

        let clip_origin = settings.clip_region().origin();
        if let Some((x, y)) = clip_origin {
            instructions.push(DrawInstruction::Translate {
                x: -(x * precision),
                y: -(y * precision),
            });
        }

        if settings.highlight {
            let style = HighlightStyle::resolve(settings);
            for line in &layout.lines {
                instructions.push(DrawInstruction::FillRect {
                    bounds: Rect::new(
                        line.x - style.padding_left * precision,
                        line.y + style.offset * precision,
                        line.width + (style.padding_left + style.padding_right) * precision,
                        style.height * precision,
                    ),
                    color: style.color,
                });
            }
        }

        if settings.shadow {
            instructions.push(DrawInstruction::SetShadow(ShadowState {
                color: Color::from_argb(settings.shadow_color),
                offset_x: settings.shadow_offset_x * precision,
                offset_y: settings.shadow_offset_y * precision,
                blur: settings.shadow_blur * precision,
            }));
        }

        for line in &layout.lines {
            instructions.push(DrawInstruction::DrawText {
                text: line.text.clone(),
                x: line.x,
                y: line.y,
            });
        }

        if settings.shadow {
            instructions.push(DrawInstruction::RestoreShadow);
        }

        // The reverse translation is in layout units, not scaled.
        if let Some((x, y)) = clip_origin {
            instructions.push(DrawInstruction::Translate { x, y });
        }

        tracing::trace!(
            target: "render_model::plan",
            instructions = instructions.len(),
            width = layout.surface.width,
            height = layout.surface.height,
            "draw plan built"
        );

        DrawPlan {
            width: layout.surface.width,
            height: layout.surface.height,
            font: layout.font.scaled(precision),
            text_color: Color::from_argb(settings.text_color),
            instructions,
        }
    }
}
