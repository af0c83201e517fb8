use crate::config::{default_line_width, default_spinner_line_spacing, default_spinner_padding};

use serde::{Deserialize, Serialize};

/// Geometry configuration for the button face and spinner arc.
///
/// Affects only layout, never gesture or timing logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Stroke width of the spinner arc.
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    /// Gap between the button face and the spinner arc.
    #[serde(default = "default_spinner_line_spacing")]
    pub spinner_line_spacing: f32,
    /// Inset of the spinner arc from the widget bounds.
    #[serde(default = "default_spinner_padding")]
    pub spinner_padding: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            spinner_line_spacing: default_spinner_line_spacing(),
            spinner_padding: default_spinner_padding(),
        }
    }
}
