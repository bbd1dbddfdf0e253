//! Author-supplied step descriptors.

use serde::{Deserialize, Serialize};

use super::style::StepIconStyleOverrides;

/// Custom glyphs for the three visual states of a step icon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepGlyphs {
    pub active: Option<String>,
    pub disabled: Option<String>,
    pub completed: Option<String>,
}

/// One page of the wizard. Identified by its position in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepDescriptor {
    /// Title shown under the step icon
    pub label: String,
    /// Content lines shown while this step is active
    pub body: Vec<String>,
    /// Whether the step carries a text input
    pub input: bool,
    /// Per-step overrides, layered over the stepper-wide ones
    pub style: StepIconStyleOverrides,
    pub glyphs: StepGlyphs,
}

impl StepDescriptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_input(mut self) -> Self {
        self.input = true;
        self
    }

    pub fn with_style(mut self, style: StepIconStyleOverrides) -> Self {
        self.style = style;
        self
    }

    pub fn with_glyphs(mut self, glyphs: StepGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }
}
