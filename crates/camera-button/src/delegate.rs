/// Event sink notified of shutter-button outcomes.
///
/// All notifications are fire-and-forget with no return value,
/// delivered synchronously from the widget's state machine.
/// Implementations should return quickly and must not call back into
/// the widget from within a notification.
pub trait CameraButtonDelegate: Send + Sync {
    /// Long-press activation confirmed; a recording started.
    fn on_start_record(&self);

    /// Recording ended after at least the minimum duration.
    fn on_end_record(&self);

    /// Recording was released before the minimum duration elapsed.
    fn on_duration_too_short_error(&self);

    /// A tap completed while idle.
    fn on_single_tap(&self);

    /// Recording was cancelled; no duration outcome applies.
    fn on_cancelled(&self);
}
