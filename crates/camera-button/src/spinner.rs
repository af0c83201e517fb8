//! Recording progress spinner.
//!
//! Two independently-parameterized periodic functions evaluated against
//! elapsed time since recording began: a two-phase stroke cycle where
//! the arc's leading edge grows and then its trailing edge catches up,
//! and an uncoupled continuous rotation. The render layer samples a
//! [`SpinnerFrame`] per frame; no animation state is retained beyond
//! the start instant.

use std::{f32::consts::TAU, time::Duration};

use tokio::time::Instant;

/// Full grow-then-shrink stroke cycle length.
pub(crate) const STROKE_CYCLE_PERIOD: Duration = Duration::from_millis(1400);
/// Length of each of the two stroke phases.
pub(crate) const STROKE_PHASE: Duration = Duration::from_millis(700);
/// Time for one full rotation of the arc.
pub(crate) const ROTATION_PERIOD: Duration = Duration::from_secs(2);

/// One sampled animation frame for the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerFrame {
    /// Whether the spinner should be drawn at all.
    pub visible: bool,
    /// Normalized trailing edge of the visible arc, `0.0..=1.0`.
    pub stroke_start: f32,
    /// Normalized leading edge of the visible arc, `0.0..=1.0`.
    pub stroke_end: f32,
    /// Rotation applied to the whole arc, radians.
    pub rotation: f32,
}

impl SpinnerFrame {
    pub(crate) const HIDDEN: Self = Self {
        visible: false,
        stroke_start: 0.0,
        stroke_end: 0.0,
        rotation: 0.0,
    };
}

/// Drives the spinner while a recording is active.
///
/// Visual feedback only; never feeds back into the recording state
/// machine. Stopping resets to the hidden zero state immediately,
/// rotation included.
#[derive(Debug, Default)]
pub(crate) struct SpinnerDriver {
    started_at: Option<Instant>,
}

impl SpinnerDriver {
    pub(crate) fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub(crate) fn stop(&mut self) {
        self.started_at = None;
    }

    pub(crate) fn frame(&self, now: Instant) -> SpinnerFrame {
        let Some(started_at) = self.started_at else {
            return SpinnerFrame::HIDDEN;
        };

        let elapsed = now.duration_since(started_at);
        let (stroke_start, stroke_end) = stroke_extents(elapsed);

        SpinnerFrame {
            visible: true,
            stroke_start,
            stroke_end,
            rotation: rotation_angle(elapsed),
        }
    }
}

/// Stroke extents at `elapsed` time into the cycle.
///
/// Phase 1 grows the leading edge from 0 to 1 eased in/out; phase 2
/// holds it at 1 while the trailing edge catches up with the same
/// easing, shrinking the visible arc back to nothing.
pub(crate) fn stroke_extents(elapsed: Duration) -> (f32, f32) {
    let cycle = elapsed.as_secs_f32() % STROKE_CYCLE_PERIOD.as_secs_f32();
    let phase = STROKE_PHASE.as_secs_f32();

    if cycle < phase {
        (0.0, ease_in_out(cycle / phase))
    } else {
        (ease_in_out((cycle - phase) / phase), 1.0)
    }
}

/// Rotation angle at `elapsed` time, radians; linear, uncoupled from
/// the stroke cycle.
pub(crate) fn rotation_angle(elapsed: Duration) -> f32 {
    let period = ROTATION_PERIOD.as_secs_f32();
    (elapsed.as_secs_f32() % period) / period * TAU
}

/// Cubic ease-in-out over `0.0..=1.0`.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
