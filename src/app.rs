use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::Frame;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::keyboard::{drain_signals, NativeKeyboardSignals};
use crate::stepper::{ButtonKind, StepDescriptor, Stepper};
use crate::ui::input_step::InputStep;
use crate::ui::keybindings::{action_for, footer_text, ShortcutContext, WizardAction};
use crate::ui::stepper_view::{StepperView, TextButtons};
use crate::ui::terminal_guard::TerminalSession;

/// How the wizard ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub submitted: bool,
    /// `(label, text)` for every step with an input
    pub values: Vec<(String, String)>,
}

pub struct App {
    config: Config,
    steps: Vec<StepDescriptor>,
    stepper: Stepper,
    inputs: InputStep,
    keyboard: NativeKeyboardSignals,
    submitted: Arc<AtomicBool>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let steps = config.effective_steps();
        let options = config.stepper_options();
        if options.number_of_steps != steps.len() {
            tracing::warn!(
                configured = options.number_of_steps,
                described = steps.len(),
                "step count differs from the number of described steps"
            );
        }

        let submitted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&submitted);
        let stepper = Stepper::new(options)
            .context("Invalid stepper configuration")?
            .on_next_step(|step| tracing::info!(step, "moved forward"))
            .on_prev_step(|step| tracing::info!(step, "moved back"))
            .on_submit(move || flag.store(true, Ordering::SeqCst));

        let (keyboard, notifier) = NativeKeyboardSignals::new();
        let inputs = InputStep::new(&steps, notifier);

        Ok(Self {
            config,
            steps,
            stepper,
            inputs,
            keyboard,
            submitted,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<Outcome> {
        let mut session = TerminalSession::enter()?;
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        tracing::info!(steps = self.stepper.step_count(), "wizard started");

        while !self.should_quit {
            session.terminal().draw(|f| self.draw(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }
        }

        session.restore()?;
        Ok(self.outcome())
    }

    fn context(&self) -> ShortcutContext {
        if self.inputs.is_focused() {
            ShortcutContext::Input
        } else {
            ShortcutContext::Wizard
        }
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn outcome(&self) -> Outcome {
        let values = self
            .steps
            .iter()
            .enumerate()
            .filter_map(|(i, step)| self.inputs.value(i).map(|v| (step.label.clone(), v)))
            .collect();
        Outcome {
            submitted: self.submitted.load(Ordering::SeqCst),
            values,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let context = self.context();
        match action_for(context, key.code) {
            Some(action) => self.apply(action)?,
            None if context == ShortcutContext::Input => {
                self.inputs.input(key);
            }
            None => {}
        }

        // Focus changes above queue keyboard signals
        drain_signals(&mut self.keyboard, &mut self.stepper);

        if self.submitted.load(Ordering::SeqCst) {
            self.should_quit = true;
        }
        Ok(())
    }

    fn apply(&mut self, action: WizardAction) -> Result<()> {
        match action {
            WizardAction::Quit => self.should_quit = true,
            WizardAction::PrevStep => {
                self.stepper.press(ButtonKind::Previous);
            }
            WizardAction::NextStep => {
                self.stepper.press(ButtonKind::Next);
            }
            WizardAction::PressRight => {
                let right = self.stepper.buttons().right;
                self.stepper.press(right.kind);
            }
            WizardAction::Jump(step) => self.stepper.jump_to_step(step),
            WizardAction::JumpFirst => self.stepper.jump_to_step(0),
            WizardAction::JumpLast => self.stepper.jump_to_step(i64::MAX),
            WizardAction::ToggleAllCompleted => {
                let mut options = self.stepper.options().clone();
                options.all_completed = !options.all_completed;
                self.stepper.update(options)?;
            }
            WizardAction::ToggleButtonRow => {
                let mut options = self.stepper.options().clone();
                options.show_buttons = !options.show_buttons;
                self.stepper.update(options)?;
            }
            WizardAction::FocusInput => {
                let step = self.stepper.active_step();
                if !self.inputs.focus(step) {
                    tracing::debug!(step, "step has no input");
                }
            }
            WizardAction::LeaveInput => self.inputs.blur(),
        }
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let mut view = StepperView::new(&self.stepper, &self.steps).buttons(&TextButtons);
        if self.config.ui.show_help {
            view = view.footer(footer_text(self.context()));
        }
        let areas = view.render(area, frame.buffer_mut());

        let step = self.stepper.active_step();
        if self.inputs.has_input(step) {
            self.inputs.render(step, areas.content, frame.buffer_mut());
        }
    }
}
