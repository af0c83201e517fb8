//! Classifies a single physical press into tap or long-press events.
//!
//! Tap and long-press are mutually exclusive for one press: once the
//! activation delay promotes a press to a long-press, it can no longer
//! produce a tap. The activation timer itself lives in the widget; this
//! interpreter is a pure state machine over the inputs it is fed.

use uuid::Uuid;

/// Semantic gesture events fed to the recording state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GestureEvent {
    /// Press released before the activation delay elapsed.
    SingleTap,
    /// Activation delay elapsed while still pressed.
    LongPressBegin,
    /// Long-press released.
    LongPressEnd,
    /// Long-press cancelled by the input source.
    LongPressCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GesturePhase {
    Ready,
    Pressed { press_id: Uuid },
    LongPress { press_id: Uuid },
}

/// Press-gesture interpreter state machine.
#[derive(Debug)]
pub(crate) struct GestureInterpreter {
    phase: GesturePhase,
}

impl GestureInterpreter {
    pub(crate) fn new() -> Self {
        Self {
            phase: GesturePhase::Ready,
        }
    }

    /// Begin a press. Returns the id to arm the activation timer with,
    /// or `None` if a press is already in flight (absorbed).
    pub(crate) fn press_down(&mut self) -> Option<Uuid> {
        match self.phase {
            GesturePhase::Ready => {
                let press_id = Uuid::new_v4();
                self.phase = GesturePhase::Pressed { press_id };
                Some(press_id)
            }
            GesturePhase::Pressed { .. } | GesturePhase::LongPress { .. } => None,
        }
    }

    pub(crate) fn press_up(&mut self) -> Option<GestureEvent> {
        match self.phase {
            GesturePhase::Ready => None,
            GesturePhase::Pressed { .. } => {
                self.phase = GesturePhase::Ready;
                Some(GestureEvent::SingleTap)
            }
            GesturePhase::LongPress { .. } => {
                self.phase = GesturePhase::Ready;
                Some(GestureEvent::LongPressEnd)
            }
        }
    }

    pub(crate) fn press_cancel(&mut self) -> Option<GestureEvent> {
        match self.phase {
            GesturePhase::Ready => None,
            // Cancelled before activation: neither a tap nor a long-press
            // materialized from this press.
            GesturePhase::Pressed { .. } => {
                self.phase = GesturePhase::Ready;
                None
            }
            GesturePhase::LongPress { .. } => {
                self.phase = GesturePhase::Ready;
                Some(GestureEvent::LongPressCancel)
            }
        }
    }

    /// The activation timer armed for `press_id` fired. Promotes only
    /// the press it was armed for; a stale timer for an earlier press
    /// is ignored.
    pub(crate) fn activation_elapsed(&mut self, press_id: Uuid) -> Option<GestureEvent> {
        match self.phase {
            GesturePhase::Pressed { press_id: current } if current == press_id => {
                self.phase = GesturePhase::LongPress { press_id };
                Some(GestureEvent::LongPressBegin)
            }
            _ => None,
        }
    }
}
