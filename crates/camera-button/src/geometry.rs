//! Layout math for the button face and the spinner arc.
//!
//! Recomputed from the widget bounds on every layout pass; nothing here
//! is stateful.

use crate::config::AppearanceConfig;

use std::f32::consts::FRAC_PI_2;

/// A point in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// Widget dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

/// Everything the render layer needs for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerGeometry {
    /// Frame of the circular button face, centred in the bounds.
    pub button_frame: Rect,
    /// Corner radius making the button face a circle.
    pub button_corner_radius: f32,
    /// Shared centre of the button face and the spinner arc.
    pub center: Point,
    /// Radius of the spinner arc's centreline.
    pub spinner_radius: f32,
    /// Arc start angle, radians; twelve o'clock.
    pub start_angle: f32,
    /// Arc end angle, radians; one full clockwise turn from the start.
    pub end_angle: f32,
}

impl SpinnerGeometry {
    /// Derive the layout for the given widget bounds.
    ///
    /// Bounds too small for the configured spacing collapse the button
    /// face to zero size rather than failing.
    pub fn compute(bounds: Size, appearance: &AppearanceConfig) -> Self {
        let total_available_radius = bounds.width.min(bounds.height) / 2.0;
        let button_radius = (total_available_radius
            - appearance.spinner_line_spacing
            - appearance.spinner_padding
            - appearance.line_width / 2.0)
            .max(0.0);
        let button_size = button_radius * 2.0;

        let center = Point {
            x: bounds.width / 2.0,
            y: bounds.height / 2.0,
        };

        Self {
            button_frame: Rect {
                origin: Point {
                    x: (bounds.width - button_size) / 2.0,
                    y: (bounds.height - button_size) / 2.0,
                },
                size: Size {
                    width: button_size,
                    height: button_size,
                },
            },
            button_corner_radius: button_radius,
            center,
            spinner_radius: button_radius + appearance.spinner_line_spacing,
            start_angle: -FRAC_PI_2,
            end_angle: 3.0 * FRAC_PI_2,
        }
    }
}
