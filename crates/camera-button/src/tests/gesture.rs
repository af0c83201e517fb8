use crate::gesture::{GestureEvent, GestureInterpreter};

use uuid::Uuid;

/// WHAT: Release before activation produces a single tap
/// WHY: Short presses are photos, not recordings
#[test]
fn given_fresh_press_when_released_before_activation_then_single_tap() {
    // Given: A press in flight
    let mut interpreter = GestureInterpreter::new();
    let press_id = interpreter.press_down();

    // When: Released before the activation timer fires
    let event = interpreter.press_up();

    // Then: A tap, and the press id was issued for the timer
    assert!(press_id.is_some());
    assert_eq!(event, Some(GestureEvent::SingleTap));
}

/// WHAT: Activation promotes a held press to a long-press
/// WHY: The long-press begin event is what starts a recording
#[test]
#[allow(clippy::unwrap_used)]
fn given_held_press_when_activation_elapses_then_long_press_begins_and_ends() {
    // Given: A press in flight
    let mut interpreter = GestureInterpreter::new();
    let press_id = interpreter.press_down().unwrap();

    // When: The activation timer for this press fires, then release
    let begin = interpreter.activation_elapsed(press_id);
    let end = interpreter.press_up();

    // Then: Long-press begin then end, never a tap
    assert_eq!(begin, Some(GestureEvent::LongPressBegin));
    assert_eq!(end, Some(GestureEvent::LongPressEnd));
}

/// WHAT: Cancel during a long-press yields a long-press cancel
/// WHY: Cancel must be distinguishable from a normal release
#[test]
#[allow(clippy::unwrap_used)]
fn given_long_press_when_cancelled_then_long_press_cancel() {
    // Given: An activated long-press
    let mut interpreter = GestureInterpreter::new();
    let press_id = interpreter.press_down().unwrap();
    assert_eq!(
        interpreter.activation_elapsed(press_id),
        Some(GestureEvent::LongPressBegin)
    );

    // When: The press is cancelled
    let event = interpreter.press_cancel();

    // Then: A long-press cancel
    assert_eq!(event, Some(GestureEvent::LongPressCancel));
}

/// WHAT: Cancel before activation produces nothing
/// WHY: Neither a tap nor a long-press materialized from the press
#[test]
fn given_unactivated_press_when_cancelled_then_no_event() {
    let mut interpreter = GestureInterpreter::new();
    let press_id = interpreter.press_down();

    assert!(press_id.is_some());
    assert_eq!(interpreter.press_cancel(), None);
}

/// WHAT: A stale activation timer cannot promote a finished press
/// WHY: The timer races the release; only the armed press may promote
#[test]
#[allow(clippy::unwrap_used)]
fn given_released_press_when_stale_activation_fires_then_ignored() {
    // Given: A press that already completed as a tap
    let mut interpreter = GestureInterpreter::new();
    let press_id = interpreter.press_down().unwrap();
    assert_eq!(interpreter.press_up(), Some(GestureEvent::SingleTap));

    // When: The timer armed for it fires late
    let event = interpreter.activation_elapsed(press_id);

    // Then: Ignored
    assert_eq!(event, None);
}

/// WHAT: A stale timer cannot promote a different, later press
/// WHY: Press ids tie each timer to exactly one physical press
#[test]
#[allow(clippy::unwrap_used)]
fn given_new_press_when_earlier_press_timer_fires_then_ignored() {
    // Given: A first press that ended and a second press in flight
    let mut interpreter = GestureInterpreter::new();
    let first = interpreter.press_down().unwrap();
    assert_eq!(interpreter.press_up(), Some(GestureEvent::SingleTap));
    let second = interpreter.press_down().unwrap();
    assert_ne!(first, second);

    // When: The first press's timer fires
    let event = interpreter.activation_elapsed(first);

    // Then: Ignored; the second press is still promotable
    assert_eq!(event, None);
    assert_eq!(
        interpreter.activation_elapsed(second),
        Some(GestureEvent::LongPressBegin)
    );
}

/// WHAT: A second press-down during an in-flight press is absorbed
/// WHY: The widget models a single press gesture
#[test]
fn given_press_in_flight_when_pressed_again_then_absorbed() {
    let mut interpreter = GestureInterpreter::new();

    assert!(interpreter.press_down().is_some());
    assert_eq!(interpreter.press_down(), None);
}

/// WHAT: Release and timer inputs with no press in flight are no-ops
/// WHY: Guard violations are silently absorbed, never reported
#[test]
fn given_ready_interpreter_when_fed_stray_inputs_then_no_events() {
    let mut interpreter = GestureInterpreter::new();

    assert_eq!(interpreter.press_up(), None);
    assert_eq!(interpreter.press_cancel(), None);
    assert_eq!(interpreter.activation_elapsed(Uuid::new_v4()), None);
}

/// WHAT: The interpreter is reusable after a completed long-press
/// WHY: One widget serves many presses over its lifetime
#[test]
#[allow(clippy::unwrap_used)]
fn given_completed_long_press_when_pressed_again_then_fresh_cycle() {
    let mut interpreter = GestureInterpreter::new();
    let press_id = interpreter.press_down().unwrap();
    assert_eq!(
        interpreter.activation_elapsed(press_id),
        Some(GestureEvent::LongPressBegin)
    );
    assert_eq!(interpreter.press_up(), Some(GestureEvent::LongPressEnd));

    assert!(interpreter.press_down().is_some());
    assert_eq!(interpreter.press_up(), Some(GestureEvent::SingleTap));
}
