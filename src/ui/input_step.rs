//! Text inputs for steps that declare `input = true`.
//!
//! Focus changes are reported through a [`KeyboardNotifier`], so the stepper hides its
//! button row while the user types and shows it again afterwards.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use tui_textarea::TextArea;

use crate::keyboard::KeyboardNotifier;
use crate::stepper::StepDescriptor;

/// Height of a rendered input, borders included
pub const INPUT_HEIGHT: u16 = 3;

pub struct InputStep {
    /// One field per step; `None` where the step has no input
    fields: Vec<Option<TextArea<'static>>>,
    focused: Option<usize>,
    notifier: KeyboardNotifier,
}

impl InputStep {
    pub fn new(steps: &[StepDescriptor], notifier: KeyboardNotifier) -> Self {
        let fields = steps
            .iter()
            .map(|step| {
                step.input.then(|| {
                    let mut textarea = TextArea::default();
                    textarea.set_placeholder_text(format!("{}...", step.label));
                    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
                    textarea
                })
            })
            .collect();
        Self {
            fields,
            focused: None,
            notifier,
        }
    }

    pub fn has_input(&self, step: usize) -> bool {
        matches!(self.fields.get(step), Some(Some(_)))
    }

    pub fn is_focused(&self) -> bool {
        self.focused.is_some()
    }

    /// Focus the input of `step`. Returns false if the step has none.
    pub fn focus(&mut self, step: usize) -> bool {
        if !self.has_input(step) {
            return false;
        }
        if self.focused != Some(step) {
            self.focused = Some(step);
            self.notifier.input_focused();
        }
        true
    }

    pub fn blur(&mut self) {
        if self.focused.take().is_some() {
            self.notifier.keyboard_hidden();
        }
    }

    /// Feed a key to the focused input
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let Some(step) = self.focused else {
            return false;
        };
        match self.fields.get_mut(step) {
            Some(Some(textarea)) => textarea.input(key),
            _ => false,
        }
    }

    /// Entered text, lines joined with `\n`
    pub fn value(&self, step: usize) -> Option<String> {
        match self.fields.get(step) {
            Some(Some(textarea)) => Some(textarea.lines().join("\n")),
            _ => None,
        }
    }

    pub fn render(&mut self, step: usize, area: Rect, buf: &mut Buffer) {
        let focused = self.focused == Some(step);
        let Some(Some(textarea)) = self.fields.get_mut(step) else {
            return;
        };

        let border_color = if focused { Color::Cyan } else { Color::Gray };
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        let area = Rect {
            height: area.height.min(INPUT_HEIGHT),
            ..area
        };
        (&*textarea).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::demo_steps;
    use crate::keyboard::{KeyboardSignal, KeyboardSignalSource, NativeKeyboardSignals};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn setup() -> (InputStep, NativeKeyboardSignals) {
        let (source, notifier) = NativeKeyboardSignals::new();
        (InputStep::new(&demo_steps(), notifier), source)
    }

    fn drain(source: &mut NativeKeyboardSignals) -> Vec<KeyboardSignal> {
        std::iter::from_fn(|| source.next_signal()).collect()
    }

    #[test]
    fn test_focus_and_blur_emit_signals() {
        let (mut inputs, mut source) = setup();
        assert!(inputs.focus(0));
        assert!(inputs.is_focused());
        inputs.blur();
        assert!(!inputs.is_focused());

        assert_eq!(
            drain(&mut source),
            vec![KeyboardSignal::InputFocused, KeyboardSignal::KeyboardHidden]
        );
    }

    #[test]
    fn test_step_without_input_cannot_focus() {
        let (mut inputs, mut source) = setup();
        assert!(!inputs.has_input(2));
        assert!(!inputs.focus(2));
        inputs.blur();
        assert!(drain(&mut source).is_empty());
    }

    #[test]
    fn test_refocus_same_step_is_silent() {
        let (mut inputs, mut source) = setup();
        inputs.focus(1);
        inputs.focus(1);
        assert_eq!(drain(&mut source), vec![KeyboardSignal::InputFocused]);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let (mut inputs, _source) = setup();
        assert!(!inputs.input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));

        inputs.focus(1);
        for c in "hi".chars() {
            inputs.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(inputs.value(1).as_deref(), Some("hi"));
        assert_eq!(inputs.value(0).as_deref(), Some(""));
        assert_eq!(inputs.value(2), None);
    }

    #[test]
    fn test_render_draws_bordered_box() {
        let (mut inputs, _source) = setup();
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        inputs.render(0, area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(0, 2)].symbol(), "└");
        assert_eq!(buf[(0, 3)].symbol(), " ");
    }
}
