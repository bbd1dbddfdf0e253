//! Keyboard shortcuts for the wizard.
//!
//! Single registry consumed by the help footer and by the app's key dispatch,
//! so what is shown is what is bound.

use crossterm::event::KeyCode;

/// What a key does in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Quit,
    PrevStep,
    NextStep,
    /// Press whatever sits in the right-hand slot (Next or Submit)
    PressRight,
    /// Jump to a 0-based step, clamped by the stepper
    Jump(i64),
    JumpFirst,
    JumpLast,
    ToggleAllCompleted,
    ToggleButtonRow,
    FocusInput,
    LeaveInput,
}

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g., vim-style letter for an arrow)
    pub alt_key: Option<KeyCode>,
    /// Human-readable description of what this shortcut does
    pub description: &'static str,
    pub action: WizardAction,
    /// Context where this shortcut is active
    pub context: ShortcutContext,
}

/// Contexts where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Navigating between steps
    Wizard,
    /// Typing into a step's text input
    Input,
}

impl ShortcutContext {
    /// Display name for this context
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Wizard => "Wizard",
            ShortcutContext::Input => "Text Input",
        }
    }
}

impl Shortcut {
    /// Format key for display (e.g., "q", "Tab", "l/→")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }

    fn matches(&self, key: KeyCode) -> bool {
        self.key == key || self.alt_key == Some(key)
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => format!("{:?}", key),
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        key: KeyCode::Char('h'),
        alt_key: Some(KeyCode::Left),
        description: "Previous",
        action: WizardAction::PrevStep,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::Char('l'),
        alt_key: Some(KeyCode::Right),
        description: "Next",
        action: WizardAction::NextStep,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::Enter,
        alt_key: None,
        description: "Next / Submit",
        action: WizardAction::PressRight,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::Home,
        alt_key: None,
        description: "First step",
        action: WizardAction::JumpFirst,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::End,
        alt_key: None,
        description: "Last step",
        action: WizardAction::JumpLast,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::Tab,
        alt_key: None,
        description: "Edit field",
        action: WizardAction::FocusInput,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::Char('c'),
        alt_key: None,
        description: "Mark all done",
        action: WizardAction::ToggleAllCompleted,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::Char('b'),
        alt_key: None,
        description: "Toggle buttons",
        action: WizardAction::ToggleButtonRow,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: None,
        description: "Quit",
        action: WizardAction::Quit,
        context: ShortcutContext::Wizard,
    },
    Shortcut {
        key: KeyCode::Esc,
        alt_key: None,
        description: "Done editing",
        action: WizardAction::LeaveInput,
        context: ShortcutContext::Input,
    },
];

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Resolve a key press to an action. Digits 1-9 jump straight to that step.
pub fn action_for(context: ShortcutContext, key: KeyCode) -> Option<WizardAction> {
    if context == ShortcutContext::Wizard {
        if let KeyCode::Char(c @ '1'..='9') = key {
            let n = c.to_digit(10).map_or(0, i64::from);
            return Some(WizardAction::Jump(n - 1));
        }
    }

    shortcuts_for_context(context)
        .find(|s| s.matches(key))
        .map(|s| s.action)
}

/// One-line footer, e.g. "h/← Previous · l/→ Next · ..."
pub fn footer_text(context: ShortcutContext) -> String {
    let mut parts: Vec<String> = shortcuts_for_context(context)
        .map(|s| format!("{} {}", s.key_display(), s.description))
        .collect();
    if context == ShortcutContext::Wizard {
        parts.push("1-9 Jump".to_string());
    }
    parts.join(" · ")
}
