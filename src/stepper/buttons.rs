//! Navigation-button selection for the button row.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Previous,
    Next,
    Submit,
}

impl ButtonKind {
    /// Default caption
    pub fn label(&self) -> &'static str {
        match self {
            ButtonKind::Previous => "Previous",
            ButtonKind::Next => "Next",
            ButtonKind::Submit => "Submit",
        }
    }
}

impl std::fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Caller-supplied disabled flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonFlags {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub submit_disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonSlot {
    /// Step index at selection time
    pub step: usize,
    pub kind: ButtonKind,
    pub disabled: bool,
}

/// The two slots of the button row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavButtons {
    pub left: ButtonSlot,
    pub right: ButtonSlot,
}

impl NavButtons {
    /// Pick the buttons for `active` out of `step_count` steps.
    ///
    /// Previous is always offered and forced disabled on the first step.
    /// The right slot is Next until the last step, where it becomes Submit.
    pub fn select(active: usize, step_count: usize, flags: ButtonFlags) -> Self {
        let left = ButtonSlot {
            step: active,
            kind: ButtonKind::Previous,
            disabled: active == 0 || flags.prev_disabled,
        };

        let right = if active + 1 < step_count {
            ButtonSlot {
                step: active,
                kind: ButtonKind::Next,
                disabled: flags.next_disabled,
            }
        } else {
            ButtonSlot {
                step: active,
                kind: ButtonKind::Submit,
                disabled: flags.submit_disabled,
            }
        };

        Self { left, right }
    }

    pub fn slot(&self, kind: ButtonKind) -> Option<&ButtonSlot> {
        [&self.left, &self.right].into_iter().find(|s| s.kind == kind)
    }
}
