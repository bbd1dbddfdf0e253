//! Progress indicator row.
//!
//! Maps resolved step styles onto terminal cells. Sizes do not exist in a cell grid, so
//! the active circle is told apart by its bracketed border, and bar thickness picks
//! between a heavy and a light line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::stepper::{BarStyle, FontWeight, RenderedStep};

const HEAVY_BAR: &str = "━";
const LIGHT_BAR: &str = "─";
/// Bars at least this thick draw as heavy lines
const HEAVY_BAR_MIN: u16 = 4;

fn weight_modifier(weight: Option<FontWeight>) -> Modifier {
    match weight {
        Some(FontWeight::Bold) => Modifier::BOLD,
        Some(FontWeight::Light) => Modifier::DIM,
        Some(FontWeight::Normal) | None => Modifier::empty(),
    }
}

fn circle_spans(step: &RenderedStep) -> Vec<Span<'static>> {
    let style = &step.style;
    let glyph_color = if step.facets.is_completed {
        Some(style.completed_check_color)
    } else {
        style.step_num.color
    };

    let mut glyph_style = Style::default()
        .bg(style.circle.background)
        .add_modifier(weight_modifier(style.step_num.font_weight));
    if let Some(color) = glyph_color {
        glyph_style = glyph_style.fg(color);
    }

    let glyph = Span::styled(format!(" {} ", step.content.text()), glyph_style);

    match style.circle.border_color {
        Some(border) => {
            let border_style = Style::default().fg(border).add_modifier(Modifier::BOLD);
            vec![
                Span::styled("[", border_style),
                glyph.patch_style(Style::default().add_modifier(Modifier::BOLD)),
                Span::styled("]", border_style),
            ]
        }
        None => vec![glyph],
    }
}

fn bar_span(bar: Option<&BarStyle>, len: usize) -> Span<'static> {
    match bar {
        Some(bar) => {
            let glyph = if bar.height >= HEAVY_BAR_MIN {
                HEAVY_BAR
            } else {
                LIGHT_BAR
            };
            Span::styled(glyph.repeat(len), Style::default().fg(bar.color))
        }
        None => Span::raw(" ".repeat(len)),
    }
}

/// Truncate to `width` columns and center
fn centered_label(text: &str, width: usize) -> String {
    let mut label = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = Span::raw(c.to_string()).width();
        if used + w > width {
            break;
        }
        label.push(c);
        used += w;
    }
    format!("{}{}", " ".repeat((width - used) / 2), label)
}

/// The two lines of one step cell: circle with its bars, then the label.
pub fn step_lines(step: &RenderedStep, width: u16) -> (Line<'static>, Line<'static>) {
    let width = usize::from(width);
    let circle = circle_spans(step);
    let circle_width: usize = circle.iter().map(Span::width).sum();

    let free = width.saturating_sub(circle_width);
    let left_len = free / 2;
    let right_len = free - left_len;

    let mut icon = vec![bar_span(step.style.left_bar.as_ref(), left_len)];
    icon.extend(circle);
    icon.push(bar_span(step.style.right_bar.as_ref(), right_len));

    let label_style = Style::default()
        .fg(step.style.label.color)
        .add_modifier(weight_modifier(step.style.label.font_weight));
    let label = Line::from(Span::styled(
        centered_label(&step.label, width),
        label_style,
    ));

    (Line::from(icon), label)
}

/// Indicator row widget: one equal-width cell per step
pub struct StepIndicatorRow<'a> {
    steps: &'a [RenderedStep],
    style: Style,
}

impl<'a> StepIndicatorRow<'a> {
    pub fn new(steps: &'a [RenderedStep]) -> Self {
        Self {
            steps,
            style: Style::default(),
        }
    }

    /// Container style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for StepIndicatorRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
        if self.steps.is_empty() || area.height == 0 {
            return;
        }

        let n = self.steps.len() as u32;
        let cells = Layout::horizontal(self.steps.iter().map(|_| Constraint::Ratio(1, n))).split(area);

        for (step, cell) in self.steps.iter().zip(cells.iter()) {
            let (icon, label) = step_lines(step, cell.width);
            buf.set_line(cell.x, cell.y, &icon, cell.width);
            if cell.height > 1 {
                buf.set_line(cell.x, cell.y + 1, &label, cell.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::{RenderPass, StepDescriptor, StepIconStyleOverrides};

    fn row(active: usize, all_completed: bool) -> Vec<RenderedStep> {
        let props = StepIconStyleOverrides::default();
        RenderPass {
            active,
            all_completed,
            step_count: 3,
            step_props: &props,
        }
        .row(&[
            StepDescriptor::new("Account"),
            StepDescriptor::new("Details"),
            StepDescriptor::new("Review"),
        ])
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_active_step_is_bracketed() {
        let steps = row(1, false);
        let (icon, label) = step_lines(&steps[1], 15);
        let icon = text(&icon);
        assert!(icon.contains("[ 2 ]"), "{icon}");
        assert!(text(&label).contains("Details"));
    }

    #[test]
    fn test_completed_step_shows_check() {
        let steps = row(1, false);
        let (icon, _) = step_lines(&steps[0], 15);
        assert!(text(&icon).contains(" ✓ "));
    }

    #[test]
    fn test_first_and_last_have_no_outer_bars() {
        let steps = row(1, false);
        let (first, _) = step_lines(&steps[0], 15);
        let (last, _) = step_lines(&steps[2], 15);
        assert!(text(&first).starts_with(' '));
        assert!(text(&first).ends_with(HEAVY_BAR));
        assert!(text(&last).starts_with(HEAVY_BAR));
        assert!(text(&last).ends_with(' '));
    }

    #[test]
    fn test_cell_width_is_respected() {
        let steps = row(0, false);
        for width in [9u16, 15, 24] {
            let (icon, label) = step_lines(&steps[1], width);
            assert_eq!(icon.width(), usize::from(width));
            assert!(label.width() <= usize::from(width));
        }
    }

    #[test]
    fn test_long_label_is_truncated() {
        assert_eq!(centered_label("Configuration", 6), "Config");
        assert_eq!(centered_label("ab", 6), "  ab");
    }

    #[test]
    fn test_thin_bars_use_light_line() {
        let props = StepIconStyleOverrides {
            progress_bar_size: Some(2),
            ..Default::default()
        };
        let steps = RenderPass {
            active: 0,
            all_completed: false,
            step_count: 2,
            step_props: &props,
        }
        .row(&[]);
        let (icon, _) = step_lines(&steps[0], 12);
        assert!(text(&icon).contains(LIGHT_BAR));
    }

    #[test]
    fn test_widget_renders_every_step() {
        let steps = row(2, true);
        let area = Rect::new(0, 0, 45, 2);
        let mut buf = Buffer::empty(area);
        StepIndicatorRow::new(&steps).render(area, &mut buf);

        let top: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(top.matches('✓').count(), 3);
        let bottom: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(bottom.contains("Account"));
        assert!(bottom.contains("Review"));
    }
}
