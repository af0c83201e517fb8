//! Camera-style shutter button widget.
//!
//! Tap for a photo, hold for a recording, with a circular progress
//! spinner shown while recording. The widget owns the press-gesture
//! state machine and its animation timing; the host feeds it raw press
//! transitions, implements [`CameraButtonDelegate`] to receive
//! outcomes, and renders the geometry and spinner frames it samples.
//!
//! # Example
//!
//! ```no_run
//! use std::{sync::Arc, time::Duration};
//!
//! use camera_button::{ButtonConfig, CameraButton, CameraButtonDelegate};
//!
//! struct Shutter;
//!
//! impl CameraButtonDelegate for Shutter {
//!     fn on_start_record(&self) { println!("recording"); }
//!     fn on_end_record(&self) { println!("saved"); }
//!     fn on_duration_too_short_error(&self) { println!("hold longer"); }
//!     fn on_single_tap(&self) { println!("photo"); }
//!     fn on_cancelled(&self) { println!("discarded"); }
//! }
//!
//! #[tokio::main]
//! async fn main() -> camera_button::Result<()> {
//!     let button = CameraButton::new(ButtonConfig::default(), Arc::new(Shutter))?;
//!
//!     button.press_down().await;
//!     tokio::time::sleep(Duration::from_secs(2)).await;
//!     button.press_up().await;
//!
//!     Ok(())
//! }
//! ```

mod button;
mod config;
mod delegate;
mod error;
mod geometry;
mod gesture;
mod recording_state;
mod spinner;
#[cfg(test)]
mod tests;

pub use {
    button::CameraButton,
    config::{AppearanceConfig, ButtonConfig, TimingPolicy},
    delegate::CameraButtonDelegate,
    error::{ButtonError, Result},
    geometry::{Point, Rect, Size, SpinnerGeometry},
    spinner::SpinnerFrame,
};
