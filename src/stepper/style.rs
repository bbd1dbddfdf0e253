//! Style cascade for step icons.
//!
//! Every attribute resolves as `per-step override ?? stepper-wide override ?? default`,
//! then a state rule picks between the active / completed / pending variants.
//! Geometry is kept in logical units; the terminal renderer maps it onto cells.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::facets::StepFacets;

/// Accent used for completed steps and the active border
pub const ACCENT_GREEN: Color = Color::Rgb(0x4B, 0xB5, 0x43);
/// Track color for unfilled progress bars and pending circles
pub const TRACK_GRAY: Color = Color::Rgb(0xEB, 0xEB, 0xE4);
/// Default label color
pub const LABEL_GRAY: Color = Color::Rgb(0xD3, 0xD3, 0xD3);

const DEFAULT_PROGRESS_BAR_SIZE: u16 = 5;
const DEFAULT_LABEL_FONT_SIZE: u16 = 14;
const LABEL_WIDTH: u16 = 100;
const LABEL_PADDING_TOP: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Normal,
    Bold,
}

/// Optional style overrides for a step icon.
///
/// Used both stepper-wide (`step_props`) and per step. Unset fields fall through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepIconStyleOverrides {
    /// Height of the progress bar (default 5)
    pub progress_bar_size: Option<u16>,
    /// Color of an unfilled progress bar (default `#EBEBE4`)
    pub progress_bar_bg_color: Option<Color>,
    /// Color of a filled progress bar (default `#4BB543`)
    pub completed_progress_bar_bg_color: Option<Color>,
    /// Circle fill for the active step (default transparent)
    pub active_step_icon_bg_color: Option<Color>,
    /// Circle fill for pending steps (default `#EBEBE4`)
    pub disabled_step_icon_bg_color: Option<Color>,
    /// Circle fill for completed steps (default `#4BB543`)
    pub completed_step_icon_bg_color: Option<Color>,
    /// Border of the active circle (default `#4BB543`)
    pub active_step_icon_border_color: Option<Color>,
    /// Label color for pending steps (default light gray)
    pub label_color: Option<Color>,
    /// Label font size (default 14)
    pub label_font_size: Option<u16>,
    pub label_font_family: Option<String>,
    pub label_font_weight: Option<FontWeight>,
    /// Label color for the active step (default `#4BB543`)
    pub active_label_color: Option<Color>,
    /// Label font size for the active step, falls back to `label_font_size`
    pub active_label_font_size: Option<u16>,
    /// Label color for completed steps (default light gray)
    pub completed_label_color: Option<Color>,
    pub step_num_font_size: Option<u16>,
    pub step_num_font_family: Option<String>,
    pub step_num_font_weight: Option<FontWeight>,
    /// Step number color on the active step (no default)
    pub active_step_num_color: Option<Color>,
    /// Step number color on pending steps (default white)
    pub disabled_step_num_color: Option<Color>,
    /// Checkmark color on completed steps (default white)
    pub completed_check_color: Option<Color>,
}

impl StepIconStyleOverrides {
    /// Layer `self` over `base`: fields set here win, unset ones come from `base`.
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            progress_bar_size: self.progress_bar_size.or(base.progress_bar_size),
            progress_bar_bg_color: self.progress_bar_bg_color.or(base.progress_bar_bg_color),
            completed_progress_bar_bg_color: self
                .completed_progress_bar_bg_color
                .or(base.completed_progress_bar_bg_color),
            active_step_icon_bg_color: self
                .active_step_icon_bg_color
                .or(base.active_step_icon_bg_color),
            disabled_step_icon_bg_color: self
                .disabled_step_icon_bg_color
                .or(base.disabled_step_icon_bg_color),
            completed_step_icon_bg_color: self
                .completed_step_icon_bg_color
                .or(base.completed_step_icon_bg_color),
            active_step_icon_border_color: self
                .active_step_icon_border_color
                .or(base.active_step_icon_border_color),
            label_color: self.label_color.or(base.label_color),
            label_font_size: self.label_font_size.or(base.label_font_size),
            label_font_family: self
                .label_font_family
                .clone()
                .or_else(|| base.label_font_family.clone()),
            label_font_weight: self.label_font_weight.or(base.label_font_weight),
            active_label_color: self.active_label_color.or(base.active_label_color),
            active_label_font_size: self.active_label_font_size.or(base.active_label_font_size),
            completed_label_color: self.completed_label_color.or(base.completed_label_color),
            step_num_font_size: self.step_num_font_size.or(base.step_num_font_size),
            step_num_font_family: self
                .step_num_font_family
                .clone()
                .or_else(|| base.step_num_font_family.clone()),
            step_num_font_weight: self.step_num_font_weight.or(base.step_num_font_weight),
            active_step_num_color: self.active_step_num_color.or(base.active_step_num_color),
            disabled_step_num_color: self
                .disabled_step_num_color
                .or(base.disabled_step_num_color),
            completed_check_color: self.completed_check_color.or(base.completed_check_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleStyle {
    pub size: u16,
    pub border_width: u16,
    pub border_radius: u16,
    /// Only set on the active step
    pub border_color: Option<Color>,
    /// Upward offset of the active circle
    pub lift: u16,
    pub background: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStyle {
    pub color: Color,
    pub font_size: u16,
    pub font_family: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub width: u16,
    pub padding_top: u16,
    pub margin_top: u16,
}

/// One half of the progress bar around a circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarStyle {
    pub top: f32,
    pub height: u16,
    /// Distance from the far edge of the step cell
    pub inset: u16,
    /// Gap kept between the bar and the circle
    pub margin: u16,
    pub filled: bool,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphStyle {
    pub color: Option<Color>,
    pub font_size: Option<u16>,
    pub font_family: Option<String>,
    pub font_weight: Option<FontWeight>,
}

/// Fully resolved look of one step icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepIconStyle {
    pub circle: CircleStyle,
    pub label: LabelStyle,
    /// Absent on the first step
    pub left_bar: Option<BarStyle>,
    /// Absent on the last step
    pub right_bar: Option<BarStyle>,
    pub step_num: GlyphStyle,
    pub completed_check_color: Color,
}

/// `override ?? default`
pub fn resolve<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

impl StepIconStyle {
    /// Resolve the cascade for one step.
    pub fn resolve(overrides: &StepIconStyleOverrides, facets: StepFacets) -> Self {
        let StepFacets {
            is_first,
            is_last,
            is_active,
            is_completed,
        } = facets;
        let o = overrides;

        let progress_bar_size = resolve(o.progress_bar_size, DEFAULT_PROGRESS_BAR_SIZE);
        let bar_color = resolve(o.progress_bar_bg_color, TRACK_GRAY);
        let filled_bar_color = resolve(o.completed_progress_bar_bg_color, ACCENT_GREEN);
        let label_color = resolve(o.label_color, LABEL_GRAY);
        let label_font_size = resolve(o.label_font_size, DEFAULT_LABEL_FONT_SIZE);

        let circle_size: u16 = if is_active { 40 } else { 36 };
        let border_width: u16 = if is_active { 4 } else { 0 };
        let bar_top =
            (f32::from(circle_size) - f32::from(progress_bar_size) - f32::from(border_width)) / 2.0;

        let circle = CircleStyle {
            size: circle_size,
            border_width,
            border_radius: if is_active { 20 } else { 18 },
            border_color: is_active
                .then(|| resolve(o.active_step_icon_border_color, ACCENT_GREEN)),
            lift: if is_active { 2 } else { 0 },
            background: if is_active {
                resolve(o.active_step_icon_bg_color, Color::Reset)
            } else if is_completed {
                resolve(o.completed_step_icon_bg_color, ACCENT_GREEN)
            } else {
                resolve(o.disabled_step_icon_bg_color, TRACK_GRAY)
            },
        };

        let label = LabelStyle {
            color: if is_active {
                resolve(o.active_label_color, ACCENT_GREEN)
            } else if is_completed {
                resolve(o.completed_label_color, LABEL_GRAY)
            } else {
                label_color
            },
            font_size: if is_active {
                resolve(o.active_label_font_size, label_font_size)
            } else {
                label_font_size
            },
            font_family: o.label_font_family.clone(),
            font_weight: o.label_font_weight,
            width: LABEL_WIDTH,
            padding_top: LABEL_PADDING_TOP,
            margin_top: if is_active { 0 } else { 4 },
        };

        let bar = |filled: bool| BarStyle {
            top: bar_top,
            height: progress_bar_size,
            inset: circle_size + 8,
            margin: circle_size / 2 + 2,
            filled,
            color: if filled { filled_bar_color } else { bar_color },
        };

        let step_num = GlyphStyle {
            color: if is_active {
                o.active_step_num_color
            } else {
                Some(resolve(o.disabled_step_num_color, Color::White))
            },
            font_size: o.step_num_font_size,
            font_family: o.step_num_font_family.clone(),
            font_weight: o.step_num_font_weight,
        };

        Self {
            circle,
            label,
            left_bar: (!is_first).then(|| bar(is_active || is_completed)),
            right_bar: (!is_last).then(|| bar(is_completed)),
            step_num,
            completed_check_color: resolve(o.completed_check_color, Color::White),
        }
    }
}
