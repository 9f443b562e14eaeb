//! Text render entry point
//!
//! [`render_text`] validates the settings, runs layout, and (when drawing)
//! builds the draw plan. Nothing is cached between calls.

use crate::{DrawPlan, DrawPlanBuilder, DrawSurface, Result};
use layout_engine::{LayoutInfo, StyleSettings, TextLayoutEngine};
use serde::Serialize;
use text_engine::TextMeasurer;

/// Whether a draw plan is wanted or only the layout summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Draw,
    MeasureOnly,
}

/// Result of a render call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub layout_info: LayoutInfo,
    /// Present only for [`RenderMode::Draw`]
    pub draw_plan: Option<DrawPlan>,
}

/// Lay out `settings.text` and, in draw mode, plan how to draw it
pub fn render_text<M: TextMeasurer + ?Sized>(
    settings: &StyleSettings,
    measurer: &M,
    mode: RenderMode,
) -> Result<RenderOutput> {
    settings.validate()?;

    let layout = TextLayoutEngine::new(settings, measurer).layout()?;
    let draw_plan = match mode {
        RenderMode::Draw => Some(DrawPlanBuilder::new(settings).build(&layout)),
        RenderMode::MeasureOnly => None,
    };

    Ok(RenderOutput {
        layout_info: layout.info,
        draw_plan,
    })
}

/// Render and replay the plan onto `surface` in one step
pub fn draw_text<M, S>(settings: &StyleSettings, measurer: &M, surface: &mut S) -> Result<LayoutInfo>
where
    M: TextMeasurer + ?Sized,
    S: DrawSurface + ?Sized,
{
    let output = render_text(settings, measurer, RenderMode::Draw)?;
    if let Some(plan) = &output.draw_plan {
        plan.execute(surface)?;
    }
    Ok(output.layout_info)
}
