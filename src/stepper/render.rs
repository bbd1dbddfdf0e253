//! Pure per-step render description: facets, resolved style and circle content.

use serde::Serialize;

use super::descriptor::StepDescriptor;
use super::facets::{facets, StepFacets};
use super::style::{StepIconStyle, StepIconStyleOverrides};

pub const CHECKMARK: &str = "\u{2713}";

/// What goes inside a step's circle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CircleContent {
    /// Default checkmark for completed steps
    Check,
    /// Author-supplied glyph
    Glyph(String),
    /// 1-based step number
    Number(usize),
}

impl CircleContent {
    pub fn text(&self) -> String {
        match self {
            CircleContent::Check => CHECKMARK.to_string(),
            CircleContent::Glyph(glyph) => glyph.clone(),
            CircleContent::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedStep {
    pub index: usize,
    pub label: String,
    pub facets: StepFacets,
    pub style: StepIconStyle,
    pub content: CircleContent,
}

/// Inputs shared by every position of one render pass
#[derive(Debug, Clone, Copy)]
pub struct RenderPass<'a> {
    pub active: usize,
    pub all_completed: bool,
    pub step_count: usize,
    /// Stepper-wide overrides
    pub step_props: &'a StepIconStyleOverrides,
}

impl RenderPass<'_> {
    /// Describe step `index`. Does not depend on any other position having been rendered.
    pub fn step(&self, index: usize, descriptor: Option<&StepDescriptor>) -> RenderedStep {
        let facets = facets(index, self.active, self.all_completed, self.step_count);

        let overrides = match descriptor {
            Some(d) => d.style.layered_over(self.step_props),
            None => self.step_props.clone(),
        };

        RenderedStep {
            index,
            label: descriptor.map(|d| d.label.clone()).unwrap_or_default(),
            facets,
            style: StepIconStyle::resolve(&overrides, facets),
            content: circle_content(index, facets, descriptor),
        }
    }

    /// Describe every position in order.
    pub fn row(&self, steps: &[StepDescriptor]) -> Vec<RenderedStep> {
        (0..self.step_count)
            .map(|i| self.step(i, steps.get(i)))
            .collect()
    }
}

fn circle_content(index: usize, facets: StepFacets, descriptor: Option<&StepDescriptor>) -> CircleContent {
    let glyphs = descriptor.map(|d| &d.glyphs);

    let custom = if facets.is_completed {
        glyphs.and_then(|g| g.completed.clone())
    } else if facets.is_active {
        glyphs.and_then(|g| g.active.clone())
    } else {
        glyphs.and_then(|g| g.disabled.clone())
    };

    match custom {
        Some(glyph) => CircleContent::Glyph(glyph),
        None if facets.is_completed => CircleContent::Check,
        None => CircleContent::Number(index + 1),
    }
}
