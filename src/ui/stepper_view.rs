//! Full wizard view: indicator row, active step content, button row.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::stepper::{ButtonKind, ButtonSlot, StepDescriptor, Stepper};

use super::step_icon::StepIndicatorRow;

/// Presentation of a navigation button.
///
/// Returning `None` leaves the slot empty without changing what the button does.
pub trait ButtonRenderer {
    fn render(&self, slot: &ButtonSlot) -> Option<Span<'static>>;
}

const BUTTON_BLUE: Color = Color::Rgb(33, 150, 243);

/// Captioned buttons, dimmed while disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct TextButtons;

impl ButtonRenderer for TextButtons {
    fn render(&self, slot: &ButtonSlot) -> Option<Span<'static>> {
        let mut style = Style::default()
            .fg(Color::White)
            .bg(BUTTON_BLUE)
            .add_modifier(Modifier::BOLD);
        if slot.disabled {
            style = style.add_modifier(Modifier::DIM);
        }
        Some(Span::styled(format!("  {}  ", slot.kind.label()), style))
    }
}

/// Compact arrow buttons; Previous is hidden on the first step
#[derive(Debug, Default, Clone, Copy)]
pub struct IconButtons;

impl ButtonRenderer for IconButtons {
    fn render(&self, slot: &ButtonSlot) -> Option<Span<'static>> {
        let (glyph, bg) = match slot.kind {
            ButtonKind::Previous if slot.step == 0 => return None,
            ButtonKind::Previous => ("‹", Color::DarkGray),
            ButtonKind::Next => ("›", Color::DarkGray),
            ButtonKind::Submit => ("✓", crate::stepper::style::ACCENT_GREEN),
        };
        let mut style = Style::default().fg(Color::White).bg(bg);
        if slot.disabled {
            style = style.add_modifier(Modifier::DIM);
        }
        Some(Span::styled(format!(" {glyph} "), style))
    }
}

/// Container styles for the three regions
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepperLayout {
    pub step_icons_container: Style,
    pub step_container: Style,
    pub buttons_container: Style,
}

/// Where each region ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperAreas {
    pub icons: Rect,
    /// Space left below the active step's body text
    pub content: Rect,
    pub buttons: Option<Rect>,
    pub footer: Option<Rect>,
}

pub struct StepperView<'a> {
    stepper: &'a Stepper,
    steps: &'a [StepDescriptor],
    buttons: &'a dyn ButtonRenderer,
    layout: StepperLayout,
    footer: Option<String>,
}

impl<'a> StepperView<'a> {
    pub fn new(stepper: &'a Stepper, steps: &'a [StepDescriptor]) -> Self {
        Self {
            stepper,
            steps,
            buttons: &TextButtons,
            layout: StepperLayout::default(),
            footer: None,
        }
    }

    pub fn buttons(mut self, renderer: &'a dyn ButtonRenderer) -> Self {
        self.buttons = renderer;
        self
    }

    pub fn layout(mut self, layout: StepperLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    /// Read straight from the button-row handle, not from stepper state
    fn buttons_visible(&self) -> bool {
        self.stepper.buttons_mounted() && self.stepper.button_row().is_visible()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> StepperAreas {
        let show_buttons = self.buttons_visible();
        let [icons, body, buttons, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(u16::from(show_buttons)),
            Constraint::Length(u16::from(self.footer.is_some())),
        ])
        .areas(area);

        let rendered = self.stepper.render_pass().row(self.steps);
        StepIndicatorRow::new(&rendered)
            .style(self.layout.step_icons_container)
            .render(icons, buf);

        let content = self.render_body(body, buf);

        if show_buttons {
            self.render_buttons(buttons, buf);
        }

        if let Some(text) = &self.footer {
            Paragraph::new(Line::from(Span::styled(
                text.clone(),
                Style::default().fg(Color::DarkGray),
            )))
            .render(footer, buf);
        }

        StepperAreas {
            icons,
            content,
            buttons: show_buttons.then_some(buttons),
            footer: self.footer.is_some().then_some(footer),
        }
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) -> Rect {
        buf.set_style(area, self.layout.step_container);

        let Some(step) = self.steps.get(self.stepper.active_step()) else {
            return area;
        };

        let mut lines = vec![Line::from(Span::styled(
            step.label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.extend(step.body.iter().map(|l| Line::from(l.clone())));

        let used = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(1)
            .min(area.height);
        let [text, rest] =
            Layout::vertical([Constraint::Length(used), Constraint::Min(0)]).areas(area);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text, buf);
        rest
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.layout.buttons_container);
        let nav = self.stepper.buttons();

        if let Some(left) = self.buttons.render(&nav.left) {
            buf.set_span(area.x, area.y, &left, area.width);
        }
        if let Some(right) = self.buttons.render(&nav.right) {
            let width = (right.width() as u16).min(area.width);
            buf.set_span(area.right() - width, area.y, &right, width);
        }
    }
}
