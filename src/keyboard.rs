//! Keyboard-visibility signals and their bridge onto the stepper.
//!
//! The platform decides where signals come from; the stepper only sees
//! `show_buttons` / `hide_buttons`. Which source is used is picked by the caller:
//! - [`NativeKeyboardSignals`]: fed through a [`KeyboardNotifier`] from whatever owns
//!   the text input (the terminal app, another thread)
//! - [`WebKeyboardSignals`]: never emits, buttons stay as rendered
//! - [`HeadlessKeyboardSignals`]: scripted, for tests

use std::collections::VecDeque;

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::stepper::StepperHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardSignal {
    /// On-screen keyboard went away, buttons come back
    KeyboardHidden,
    /// A text input took focus, buttons get out of the way
    InputFocused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalPlatform {
    Native,
    Web,
    Headless,
}

impl std::fmt::Display for SignalPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalPlatform::Native => write!(f, "native"),
            SignalPlatform::Web => write!(f, "web"),
            SignalPlatform::Headless => write!(f, "headless"),
        }
    }
}

/// Source of keyboard-visibility signals
pub trait KeyboardSignalSource {
    fn platform(&self) -> SignalPlatform;

    /// Next pending signal, without blocking
    fn next_signal(&mut self) -> Option<KeyboardSignal>;
}

/// Apply one signal to a stepper.
pub fn apply_signal(handle: &mut impl StepperHandle, signal: KeyboardSignal) {
    match signal {
        KeyboardSignal::KeyboardHidden => handle.show_buttons(),
        KeyboardSignal::InputFocused => handle.hide_buttons(),
    }
}

/// Drain every pending signal into `handle`. Returns how many were applied.
pub fn drain_signals(
    source: &mut dyn KeyboardSignalSource,
    handle: &mut impl StepperHandle,
) -> usize {
    let mut applied = 0;
    while let Some(signal) = source.next_signal() {
        tracing::debug!(platform = %source.platform(), ?signal, "keyboard signal");
        apply_signal(handle, signal);
        applied += 1;
    }
    applied
}

/// Sending half held by whoever owns the text input
#[derive(Debug, Clone)]
pub struct KeyboardNotifier {
    tx: UnboundedSender<KeyboardSignal>,
}

impl KeyboardNotifier {
    pub fn input_focused(&self) {
        self.send(KeyboardSignal::InputFocused);
    }

    pub fn keyboard_hidden(&self) {
        self.send(KeyboardSignal::KeyboardHidden);
    }

    fn send(&self, signal: KeyboardSignal) {
        if self.tx.send(signal).is_err() {
            tracing::debug!(?signal, "keyboard signal source dropped");
        }
    }
}

/// Channel-backed source for a real input owner
#[derive(Debug)]
pub struct NativeKeyboardSignals {
    rx: UnboundedReceiver<KeyboardSignal>,
}

impl NativeKeyboardSignals {
    pub fn new() -> (Self, KeyboardNotifier) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, KeyboardNotifier { tx })
    }
}

impl KeyboardSignalSource for NativeKeyboardSignals {
    fn platform(&self) -> SignalPlatform {
        SignalPlatform::Native
    }

    fn next_signal(&mut self) -> Option<KeyboardSignal> {
        match self.rx.try_recv() {
            Ok(signal) => Some(signal),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// No keyboard notifications on this platform
#[derive(Debug, Default)]
pub struct WebKeyboardSignals;

impl KeyboardSignalSource for WebKeyboardSignals {
    fn platform(&self) -> SignalPlatform {
        SignalPlatform::Web
    }

    fn next_signal(&mut self) -> Option<KeyboardSignal> {
        None
    }
}

/// Scripted signals
#[derive(Debug, Default)]
pub struct HeadlessKeyboardSignals {
    queue: VecDeque<KeyboardSignal>,
}

impl HeadlessKeyboardSignals {
    pub fn new(signals: impl IntoIterator<Item = KeyboardSignal>) -> Self {
        Self {
            queue: signals.into_iter().collect(),
        }
    }

    pub fn push(&mut self, signal: KeyboardSignal) {
        self.queue.push_back(signal);
    }
}

impl KeyboardSignalSource for HeadlessKeyboardSignals {
    fn platform(&self) -> SignalPlatform {
        SignalPlatform::Headless
    }

    fn next_signal(&mut self) -> Option<KeyboardSignal> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::{Stepper, StepperOptions};

    #[test]
    fn test_headless_signals_toggle_buttons() {
        let mut stepper = Stepper::new(StepperOptions::new(3)).unwrap();
        let row = stepper.button_row().clone();
        let mut source = HeadlessKeyboardSignals::new([KeyboardSignal::InputFocused]);

        assert_eq!(drain_signals(&mut source, &mut stepper), 1);
        assert!(!row.is_visible());

        source.push(KeyboardSignal::KeyboardHidden);
        assert_eq!(drain_signals(&mut source, &mut stepper), 1);
        assert!(row.is_visible());
        assert_eq!(row.toggle_count(), 2);
    }

    #[test]
    fn test_web_source_never_emits() {
        let mut stepper = Stepper::new(StepperOptions::new(2)).unwrap();
        let mut source = WebKeyboardSignals;
        assert_eq!(drain_signals(&mut source, &mut stepper), 0);
        assert!(stepper.button_row().is_visible());
        assert_eq!(source.platform(), SignalPlatform::Web);
    }

    #[test]
    fn test_native_source_receives_from_notifier() {
        let mut stepper = Stepper::new(StepperOptions::new(2)).unwrap();
        let (mut source, notifier) = NativeKeyboardSignals::new();

        notifier.input_focused();
        notifier.keyboard_hidden();
        notifier.input_focused();

        assert_eq!(drain_signals(&mut source, &mut stepper), 3);
        assert!(!stepper.button_row().is_visible());
        assert_eq!(source.next_signal(), None);
    }

    #[test]
    fn test_notifier_from_another_thread() {
        let (mut source, notifier) = NativeKeyboardSignals::new();
        std::thread::spawn(move || notifier.keyboard_hidden())
            .join()
            .unwrap();
        assert_eq!(source.next_signal(), Some(KeyboardSignal::KeyboardHidden));
        // Sender is gone now
        assert_eq!(source.next_signal(), None);
    }

    #[test]
    fn test_signals_do_not_move_index() {
        let mut stepper = Stepper::new(StepperOptions::new(3).active_step(1)).unwrap();
        apply_signal(&mut stepper, KeyboardSignal::InputFocused);
        apply_signal(&mut stepper, KeyboardSignal::KeyboardHidden);
        assert_eq!(stepper.active_step(), 1);
    }
}
