//! End-to-end stepper behavior through the public API.

use std::sync::{Arc, Mutex};
use std::thread;

use stepview::keyboard::{drain_signals, HeadlessKeyboardSignals, KeyboardSignal};
use stepview::stepper::{
    facet_row, ButtonKind, Stepper, StepperError, StepperHandle, StepperOptions,
};

fn three_steps() -> Stepper {
    Stepper::new(StepperOptions::new(3)).unwrap()
}

#[test]
fn test_next_twice_switches_right_control_to_submit() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let mut stepper = three_steps().on_next_step(move |i| sink.lock().unwrap().push(i));

    assert_eq!(stepper.buttons().right.kind, ButtonKind::Next);

    stepper.press(ButtonKind::Next);
    assert_eq!(stepper.buttons().right.kind, ButtonKind::Next);

    stepper.press(ButtonKind::Next);
    assert_eq!(stepper.buttons().right.kind, ButtonKind::Submit);

    assert_eq!(*events.lock().unwrap(), vec![1, 2]);
}

#[test]
fn test_jump_clamps_out_of_range_values() {
    let mut stepper = three_steps();
    stepper.jump_to_step(-1);
    assert_eq!(stepper.active_step(), 0);
    stepper.jump_to_step(5);
    assert_eq!(stepper.active_step(), 2);
}

#[test]
fn test_jump_never_notifies() {
    let calls = Arc::new(Mutex::new(0));
    let (prev, next) = (Arc::clone(&calls), Arc::clone(&calls));
    let mut stepper = three_steps()
        .on_prev_step(move |_| *prev.lock().unwrap() += 1)
        .on_next_step(move |_| *next.lock().unwrap() += 1);

    for v in [-3, 0, 1, 2, 9, i64::MIN, i64::MAX] {
        stepper.jump_to_step(v);
    }
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_hide_then_show_toggles_twice_alongside_navigation() {
    let stepper = Arc::new(Mutex::new(three_steps()));
    let row = stepper.lock().unwrap().button_row().clone();

    let navigator = {
        let stepper = Arc::clone(&stepper);
        thread::spawn(move || {
            for i in 0..200 {
                let mut s = stepper.lock().unwrap();
                if i % 2 == 0 {
                    s.next_step();
                } else {
                    s.prev_step();
                }
            }
        })
    };

    stepper.lock().unwrap().hide_buttons();
    assert!(!row.is_visible());
    stepper.lock().unwrap().show_buttons();
    assert!(row.is_visible());

    navigator.join().unwrap();
    assert_eq!(row.toggle_count(), 2);
}

#[test]
fn test_invalid_construction_is_rejected() {
    assert_eq!(
        Stepper::new(StepperOptions::new(1)).unwrap_err(),
        StepperError::TooFewSteps(1)
    );
    assert_eq!(
        Stepper::new(StepperOptions::new(3).active_step(3)).unwrap_err(),
        StepperError::ActiveStepOutOfRange { value: 3, max: 2 }
    );
}

#[test]
fn test_every_valid_state_constructs() {
    for n in 2..8 {
        for a in 0..n {
            let stepper = Stepper::new(StepperOptions::new(n).active_step(a as i64)).unwrap();
            assert_eq!(stepper.active_step(), a);
        }
    }
}

#[test]
fn test_facets_follow_the_active_index() {
    let n = 5;
    for active in 0..n {
        let row = facet_row(active, false, n);
        assert_eq!(row.iter().filter(|f| f.is_active).count(), 1);
        assert!(row[active].is_active);
        assert!(row[..active].iter().all(|f| f.is_completed));
        assert!(row[0].is_first);
        assert!(row[n - 1].is_last);
        assert_eq!(row.iter().filter(|f| f.is_first).count(), 1);
        assert_eq!(row.iter().filter(|f| f.is_last).count(), 1);
    }

    for f in facet_row(2, true, n) {
        assert!(f.is_completed);
        assert!(!f.is_active);
    }
}

#[test]
fn test_keyboard_signals_drive_the_handle() {
    fn drive(handle: &mut impl StepperHandle, source: &mut HeadlessKeyboardSignals) -> usize {
        drain_signals(source, handle)
    }

    let mut stepper = three_steps();
    let row = stepper.button_row().clone();
    let mut source = HeadlessKeyboardSignals::new([
        KeyboardSignal::InputFocused,
        KeyboardSignal::KeyboardHidden,
        KeyboardSignal::InputFocused,
    ]);

    assert_eq!(drive(&mut stepper, &mut source), 3);
    assert!(!row.is_visible());
    assert_eq!(row.toggle_count(), 3);
}
