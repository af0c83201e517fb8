//! The shutter-button widget.
//!
//! Wires the gesture interpreter, the recording state machine, and the
//! spinner driver behind a single handle. The host feeds raw press
//! transitions in; outcomes flow out through the injected
//! [`CameraButtonDelegate`]. Two deferred tasks exist: the long-press
//! activation timer and the auto-stop timer. Each is a one-shot
//! `tokio::time::sleep` whose handle is aborted by every transition
//! that invalidates it.

use crate::{
    CameraButtonDelegate, Result,
    config::{ButtonConfig, TimingPolicy},
    gesture::{GestureEvent, GestureInterpreter},
    geometry::{Size, SpinnerGeometry},
    recording_state::{PressSession, RecordingState},
    spinner::{SpinnerDriver, SpinnerFrame},
};

use std::sync::Arc;

use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{Instant, sleep},
};
use tracing::{debug, info};
use uuid::Uuid;

/// Why a recording left the `Recording` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    Released,
    AutoStopped,
    Cancelled,
}

/// Activation timer armed for one specific press.
#[derive(Debug)]
struct ActivationTimer {
    press_id: Uuid,
    task: JoinHandle<()>,
}

#[derive(Debug)]
struct ButtonInner {
    gesture: GestureInterpreter,
    state: RecordingState,
    spinner: SpinnerDriver,
    /// Pending long-press activation timer for the current press.
    activation: Option<ActivationTimer>,
}

impl ButtonInner {
    fn disarm_activation(&mut self) {
        if let Some(timer) = self.activation.take() {
            timer.task.abort();
            debug!(press_id = %timer.press_id, "Activation timer disarmed");
        }
    }
}

/// Camera-style shutter button: tap to photo, hold to record.
///
/// Each instance owns its press session and timer handles exclusively;
/// nothing is shared across instances. All operations are instantaneous
/// state transitions and guard-condition violations (pressing while
/// already recording, releasing while idle) are absorbed as no-ops.
pub struct CameraButton {
    inner: Arc<Mutex<ButtonInner>>,
    delegate: Arc<dyn CameraButtonDelegate>,
    config: ButtonConfig,
}

impl CameraButton {
    /// Create a widget with the given configuration and event sink.
    ///
    /// Fails if the configuration does not validate.
    #[track_caller]
    pub fn new(config: ButtonConfig, delegate: Arc<dyn CameraButtonDelegate>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            inner: Arc::new(Mutex::new(ButtonInner {
                gesture: GestureInterpreter::new(),
                state: RecordingState::Idle,
                spinner: SpinnerDriver::default(),
                activation: None,
            })),
            delegate,
            config,
        })
    }

    /// Feed a raw press-down transition.
    ///
    /// Arms the long-press activation timer; whether this press becomes
    /// a tap or a recording is decided by the matching release.
    pub async fn press_down(&self) {
        let mut inner = self.inner.lock().await;

        let Some(press_id) = inner.gesture.press_down() else {
            debug!("Press down while a press is already in flight, ignoring");
            return;
        };

        let task = {
            let inner_arc = Arc::clone(&self.inner);
            let delegate = Arc::clone(&self.delegate);
            let timing = self.config.timing;

            tokio::spawn(async move {
                sleep(timing.long_press_delay).await;

                let mut inner = inner_arc.lock().await;
                if matches!(
                    inner.gesture.activation_elapsed(press_id),
                    Some(GestureEvent::LongPressBegin)
                ) {
                    inner.activation = None;
                    Self::begin_recording(&mut inner, &inner_arc, &delegate, timing);
                }
            })
        };

        inner.activation = Some(ActivationTimer { press_id, task });
        debug!(%press_id, "Press down");
    }

    /// Feed a raw press-up transition.
    ///
    /// Before the activation delay this completes a tap; after it, it
    /// ends the recording.
    pub async fn press_up(&self) {
        let mut inner = self.inner.lock().await;
        inner.disarm_activation();

        match inner.gesture.press_up() {
            Some(GestureEvent::SingleTap) => {
                if inner.state.is_recording() {
                    debug!("Tap while recording, ignoring");
                } else {
                    self.delegate.on_single_tap();
                    info!("Single tap");
                }
            }
            Some(GestureEvent::LongPressEnd) => {
                Self::end_recording(
                    &mut inner,
                    &self.delegate,
                    self.config.timing,
                    StopReason::Released,
                );
            }
            _ => debug!("Press up while no press in flight, ignoring"),
        }
    }

    /// Feed a raw press-cancel transition (pointer left the widget,
    /// gesture recognizer reset, and similar).
    pub async fn press_cancel(&self) {
        let mut inner = self.inner.lock().await;
        inner.disarm_activation();

        match inner.gesture.press_cancel() {
            Some(GestureEvent::LongPressCancel) => {
                Self::end_recording(
                    &mut inner,
                    &self.delegate,
                    self.config.timing,
                    StopReason::Cancelled,
                );
            }
            _ => debug!("Press cancel with no active long-press, ignoring"),
        }
    }

    /// Host-triggered cancellation (app backgrounding and similar).
    ///
    /// Follows the same exit path as a gesture cancel; a no-op while
    /// idle. Leaves any still-held press to resolve as a no-op on its
    /// eventual release.
    pub async fn cancel_recording(&self) {
        let mut inner = self.inner.lock().await;
        Self::end_recording(
            &mut inner,
            &self.delegate,
            self.config.timing,
            StopReason::Cancelled,
        );
    }

    /// Whether a recording is currently active.
    pub async fn is_recording(&self) -> bool {
        self.inner.lock().await.state.is_recording()
    }

    /// Sample the spinner animation for the current frame.
    pub async fn spinner_frame(&self) -> SpinnerFrame {
        self.inner.lock().await.spinner.frame(Instant::now())
    }

    /// Derive the layout for the given widget bounds.
    pub fn geometry(&self, bounds: Size) -> SpinnerGeometry {
        SpinnerGeometry::compute(bounds, &self.config.appearance)
    }

    /// The configuration this widget was built with.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    fn begin_recording(
        inner: &mut ButtonInner,
        inner_arc: &Arc<Mutex<ButtonInner>>,
        delegate: &Arc<dyn CameraButtonDelegate>,
        timing: TimingPolicy,
    ) {
        if inner.state.is_recording() {
            debug!("Long-press begin while already recording, ignoring");
            return;
        }

        let session_id = Uuid::new_v4();
        let started_at = Instant::now();

        let auto_stop = {
            let inner_arc = Arc::clone(inner_arc);
            let delegate = Arc::clone(delegate);

            tokio::spawn(async move {
                sleep(timing.max_record_duration).await;

                let mut inner = inner_arc.lock().await;
                // Only act if this exact session is still live; a manual
                // stop may have raced the wakeup.
                if matches!(
                    &inner.state,
                    RecordingState::Recording(session) if session.session_id == session_id
                ) {
                    Self::end_recording(&mut inner, &delegate, timing, StopReason::AutoStopped);
                }
            })
        };

        inner.state = RecordingState::Recording(PressSession {
            session_id,
            started_at,
            auto_stop,
        });
        inner.spinner.start(started_at);
        delegate.on_start_record();

        info!(%session_id, "Recording started");
    }

    fn end_recording(
        inner: &mut ButtonInner,
        delegate: &Arc<dyn CameraButtonDelegate>,
        timing: TimingPolicy,
        reason: StopReason,
    ) {
        let Some(session) = inner.state.take_session() else {
            debug!(?reason, "Stop requested while idle, ignoring");
            return;
        };

        session.auto_stop.abort();
        inner.spinner.stop();

        let session_id = session.session_id;
        let duration = session.started_at.elapsed();

        match reason {
            StopReason::Cancelled => {
                delegate.on_cancelled();
                info!(%session_id, "Recording cancelled");
            }
            StopReason::Released | StopReason::AutoStopped => {
                if duration < timing.min_record_duration {
                    delegate.on_duration_too_short_error();
                    info!(
                        %session_id,
                        duration_ms = duration.as_millis(),
                        "Recording too short"
                    );
                } else {
                    delegate.on_end_record();
                    info!(
                        %session_id,
                        duration_ms = duration.as_millis(),
                        ?reason,
                        "Recording stopped"
                    );
                }
            }
        }
    }
}
