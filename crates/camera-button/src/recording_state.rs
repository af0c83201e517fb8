use tokio::{task::JoinHandle, time::Instant};
use uuid::Uuid;

/// Recording state for the shutter button.
#[derive(Debug)]
pub(crate) enum RecordingState {
    /// Not currently recording.
    Idle,
    /// A long-press recording is in flight.
    Recording(PressSession),
}

impl RecordingState {
    pub(crate) fn is_recording(&self) -> bool {
        matches!(self, Self::Recording(_))
    }

    /// Replace with `Idle`, returning the live session if there was one.
    pub(crate) fn take_session(&mut self) -> Option<PressSession> {
        match std::mem::replace(self, Self::Idle) {
            Self::Idle => None,
            Self::Recording(session) => Some(session),
        }
    }
}

/// Exclusive per-recording state; at most one exists at a time.
#[derive(Debug)]
pub(crate) struct PressSession {
    /// Unique session ID for log correlation.
    pub(crate) session_id: Uuid,
    /// When the long-press activation confirmed.
    pub(crate) started_at: Instant,
    /// One-shot task that ends the recording at the maximum duration.
    /// Must be aborted on every transition out of `Recording`.
    pub(crate) auto_stop: JoinHandle<()>,
}
