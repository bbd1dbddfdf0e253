//! Step-navigation state machine.
//!
//! [`Stepper`] owns the active index of a fixed-length step sequence. It validates its
//! options up front, moves the index one step at a time (or jumps, clamped), notifies
//! callers, and hands out the button-row visibility handle used by the view.

use std::sync::Arc;

use thiserror::Error;

pub mod buttons;
pub mod descriptor;
pub mod facets;
pub mod render;
pub mod style;
pub mod visibility;

pub use buttons::{ButtonFlags, ButtonKind, ButtonSlot, NavButtons};
pub use descriptor::{StepDescriptor, StepGlyphs};
pub use facets::{facet_row, facets, StepFacets};
pub use render::{CircleContent, RenderPass, RenderedStep};
pub use style::{BarStyle, FontWeight, StepIconStyle, StepIconStyleOverrides};
pub use visibility::{ButtonRow, VisibilityOverride, VisibilityPort};


/// Construction-contract violations. Navigation never produces an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepperError {
    #[error("a stepper needs at least two steps, got {0}")]
    TooFewSteps(usize),

    #[error("active step {value} is out of range, must be between 0 and {max}")]
    ActiveStepOutOfRange { value: i64, max: usize },
}

/// Declarative options, supplied at construction and on every update
#[derive(Debug, Clone, PartialEq)]
pub struct StepperOptions {
    pub number_of_steps: usize,
    /// Controlled active step
    pub active_step: i64,
    /// Whether the button row is mounted at all
    pub show_buttons: bool,
    /// Marks every step completed
    pub all_completed: bool,
    pub prev_button_disabled: bool,
    pub next_button_disabled: bool,
    pub submit_button_disabled: bool,
    /// Style overrides applied to every step icon
    pub step_props: StepIconStyleOverrides,
}

impl StepperOptions {
    pub fn new(number_of_steps: usize) -> Self {
        Self {
            number_of_steps,
            active_step: 0,
            show_buttons: true,
            all_completed: false,
            prev_button_disabled: false,
            next_button_disabled: false,
            submit_button_disabled: false,
            step_props: StepIconStyleOverrides::default(),
        }
    }

    pub fn active_step(mut self, step: i64) -> Self {
        self.active_step = step;
        self
    }

    pub fn show_buttons(mut self, show: bool) -> Self {
        self.show_buttons = show;
        self
    }

    pub fn all_completed(mut self, completed: bool) -> Self {
        self.all_completed = completed;
        self
    }

    pub fn step_props(mut self, props: StepIconStyleOverrides) -> Self {
        self.step_props = props;
        self
    }

    pub fn button_flags(&self) -> ButtonFlags {
        ButtonFlags {
            prev_disabled: self.prev_button_disabled,
            next_disabled: self.next_button_disabled,
            submit_disabled: self.submit_button_disabled,
        }
    }

    /// Check the construction contract and return the validated active index.
    pub fn validate(&self) -> Result<usize, StepperError> {
        if self.number_of_steps < 2 {
            return Err(StepperError::TooFewSteps(self.number_of_steps));
        }

        let max = self.number_of_steps - 1;
        match usize::try_from(self.active_step) {
            Ok(index) if index <= max => Ok(index),
            _ => Err(StepperError::ActiveStepOutOfRange {
                value: self.active_step,
                max,
            }),
        }
    }
}

type StepCallback = Box<dyn FnMut(usize) + Send>;
type SubmitCallback = Box<dyn FnMut() + Send>;

/// Imperative control surface handed to callers
pub trait StepperHandle {
    /// Jump to `value`, clamped into range. Fires no notification.
    fn jump_to_step(&mut self, value: i64);
    fn prev_step(&mut self);
    fn next_step(&mut self);
    fn show_buttons(&mut self);
    fn hide_buttons(&mut self);
}

/// The stepper state machine.
///
/// Only `&mut self` methods commit a new index, so a shared stepper needs a single
/// writer (e.g. a `Mutex<Stepper>`).
pub struct Stepper {
    options: StepperOptions,
    active: usize,
    /// Last controlled `active_step` seen, to detect caller-side changes
    controlled: i64,
    visibility: VisibilityOverride,
    button_row: ButtonRow,
    port: Arc<dyn VisibilityPort>,
    on_prev_step: Option<StepCallback>,
    on_next_step: Option<StepCallback>,
    on_submit: Option<SubmitCallback>,
}

impl std::fmt::Debug for Stepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stepper")
            .field("options", &self.options)
            .field("active", &self.active)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

impl Stepper {
    pub fn new(options: StepperOptions) -> Result<Self, StepperError> {
        let active = options.validate()?;
        let button_row = ButtonRow::new();

        tracing::debug!(
            steps = options.number_of_steps,
            active,
            "stepper created"
        );

        Ok(Self {
            controlled: options.active_step,
            options,
            active,
            visibility: VisibilityOverride::Unset,
            port: Arc::new(button_row.clone()),
            button_row,
            on_prev_step: None,
            on_next_step: None,
            on_submit: None,
        })
    }

    pub fn on_prev_step(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_prev_step = Some(Box::new(f));
        self
    }

    pub fn on_next_step(mut self, f: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_next_step = Some(Box::new(f));
        self
    }

    pub fn on_submit(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    /// Route `show_buttons` / `hide_buttons` to a different port than the built-in row.
    pub fn with_visibility_port(mut self, port: Arc<dyn VisibilityPort>) -> Self {
        self.port = port;
        self
    }

    /// Apply new declarative options.
    ///
    /// A changed `active_step` that differs from the committed index wins; an unchanged
    /// one leaves any imperatively reached index alone.
    pub fn update(&mut self, options: StepperOptions) -> Result<(), StepperError> {
        let requested = options.validate()?;

        if options.number_of_steps != self.options.number_of_steps {
            let max = options.number_of_steps - 1;
            if self.active > max {
                tracing::debug!(from = self.active, to = max, "step count shrank, clamping");
                self.active = max;
            }
        }

        if options.active_step != self.controlled && requested != self.active {
            tracing::debug!(from = self.active, to = requested, "adopting controlled step");
            self.active = requested;
        }
        self.controlled = options.active_step;

        // A freshly mounted row starts visible
        if options.show_buttons && !self.options.show_buttons {
            self.visibility = VisibilityOverride::Unset;
            self.port.set_visible(true);
        }

        self.options = options;
        Ok(())
    }

    pub fn active_step(&self) -> usize {
        self.active
    }

    pub fn step_count(&self) -> usize {
        self.options.number_of_steps
    }

    pub fn is_last_step(&self) -> bool {
        self.active + 1 == self.options.number_of_steps
    }

    pub fn options(&self) -> &StepperOptions {
        &self.options
    }

    pub fn visibility_override(&self) -> VisibilityOverride {
        self.visibility
    }

    /// Whether the button row is part of the tree for this pass
    pub fn buttons_mounted(&self) -> bool {
        self.options.show_buttons
    }

    /// Stable handle the view reads at draw time
    pub fn button_row(&self) -> &ButtonRow {
        &self.button_row
    }

    pub fn facets(&self, index: usize) -> StepFacets {
        facets(
            index,
            self.active,
            self.options.all_completed,
            self.options.number_of_steps,
        )
    }

    pub fn render_pass(&self) -> RenderPass<'_> {
        RenderPass {
            active: self.active,
            all_completed: self.options.all_completed,
            step_count: self.options.number_of_steps,
            step_props: &self.options.step_props,
        }
    }

    pub fn buttons(&self) -> NavButtons {
        NavButtons::select(
            self.active,
            self.options.number_of_steps,
            self.options.button_flags(),
        )
    }

    pub fn jump_to_step(&mut self, value: i64) {
        let max = self.options.number_of_steps - 1;
        let target = usize::try_from(value.max(0)).map_or(max, |v| v.min(max));
        tracing::debug!(requested = value, from = self.active, to = target, "jump");
        self.active = target;
    }

    pub fn prev_step(&mut self) {
        if self.active == 0 {
            tracing::trace!("prev at first step ignored");
            return;
        }

        self.active -= 1;
        tracing::debug!(step = self.active, "prev");
        if let Some(cb) = self.on_prev_step.as_mut() {
            cb(self.active);
        }
    }

    pub fn next_step(&mut self) {
        if self.is_last_step() {
            tracing::trace!("next at last step ignored");
            return;
        }

        self.active += 1;
        tracing::debug!(step = self.active, "next");
        if let Some(cb) = self.on_next_step.as_mut() {
            cb(self.active);
        }
    }

    /// Fire `on_submit` if on the last step and submit is enabled. Returns whether it fired.
    pub fn submit(&mut self) -> bool {
        if !self.is_last_step() {
            tracing::trace!(step = self.active, "submit before last step ignored");
            return false;
        }
        if self.options.submit_button_disabled {
            tracing::trace!("submit disabled, ignored");
            return false;
        }

        tracing::debug!("submit");
        if let Some(cb) = self.on_submit.as_mut() {
            cb();
        }
        true
    }

    /// Press a button of the current row. Disabled or absent buttons do nothing.
    pub fn press(&mut self, kind: ButtonKind) -> bool {
        let buttons = self.buttons();
        match buttons.slot(kind) {
            Some(slot) if !slot.disabled => {}
            _ => {
                tracing::trace!(%kind, step = self.active, "press ignored");
                return false;
            }
        }

        match kind {
            ButtonKind::Previous => self.prev_step(),
            ButtonKind::Next => self.next_step(),
            ButtonKind::Submit => {
                self.submit();
            }
        }
        true
    }

    pub fn show_buttons(&mut self) {
        self.set_visibility(VisibilityOverride::Shown);
    }

    pub fn hide_buttons(&mut self) {
        self.set_visibility(VisibilityOverride::Hidden);
    }

    fn set_visibility(&mut self, directive: VisibilityOverride) {
        self.visibility = directive;

        if !self.options.show_buttons {
            tracing::debug!(?directive, "button row not mounted, visibility change dropped");
            return;
        }

        tracing::debug!(?directive, "button row visibility");
        self.port
            .set_visible(directive != VisibilityOverride::Hidden);
    }
}

impl StepperHandle for Stepper {
    fn jump_to_step(&mut self, value: i64) {
        Stepper::jump_to_step(self, value);
    }

    fn prev_step(&mut self) {
        Stepper::prev_step(self);
    }

    fn next_step(&mut self) {
        Stepper::next_step(self);
    }

    fn show_buttons(&mut self) {
        Stepper::show_buttons(self);
    }

    fn hide_buttons(&mut self) {
        Stepper::hide_buttons(self);
    }
}
