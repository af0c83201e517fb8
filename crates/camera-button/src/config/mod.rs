mod appearance_config;
#[allow(clippy::module_inception)]
mod config;
mod timing_config;

pub use {appearance_config::AppearanceConfig, config::ButtonConfig, timing_config::TimingPolicy};

use std::time::Duration;

pub(crate) const DEFAULT_LINE_WIDTH: f32 = 10.0;
pub(crate) const DEFAULT_SPINNER_LINE_SPACING: f32 = 20.0;
pub(crate) const DEFAULT_SPINNER_PADDING: f32 = 15.0;
pub(crate) const DEFAULT_LONG_PRESS_DELAY: Duration = Duration::from_millis(500);
pub(crate) const DEFAULT_MIN_RECORD_DURATION: Duration = Duration::from_millis(300);
pub(crate) const DEFAULT_MAX_RECORD_DURATION: Duration = Duration::from_secs(60);

pub(crate) fn default_line_width() -> f32 {
    DEFAULT_LINE_WIDTH
}

pub(crate) fn default_spinner_line_spacing() -> f32 {
    DEFAULT_SPINNER_LINE_SPACING
}

pub(crate) fn default_spinner_padding() -> f32 {
    DEFAULT_SPINNER_PADDING
}

pub(crate) fn default_long_press_delay() -> Duration {
    DEFAULT_LONG_PRESS_DELAY
}

pub(crate) fn default_min_record_duration() -> Duration {
    DEFAULT_MIN_RECORD_DURATION
}

pub(crate) fn default_max_record_duration() -> Duration {
    DEFAULT_MAX_RECORD_DURATION
}
