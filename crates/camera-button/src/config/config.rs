//! Configuration management for the camera-button widget.
//!
//! Handles loading and saving TOML configuration files with
//! cross-platform paths and atomic write operations. Hosts that
//! configure the widget in code can ignore this and build a
//! [`ButtonConfig`] directly.

use crate::{
    ButtonError, Result,
    config::{AppearanceConfig, TimingPolicy},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Main configuration struct for the widget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Geometry of the button face and spinner arc.
    #[serde(default)]
    pub appearance: AppearanceConfig,
    /// Press-gesture timing thresholds.
    #[serde(default)]
    pub timing: TimingPolicy,
}

impl ButtonConfig {
    /// Check that the configuration describes a usable widget.
    ///
    /// Called by [`crate::CameraButton::new`]; hosts loading config
    /// from untrusted files may also want to call it directly.
    #[track_caller]
    pub fn validate(&self) -> Result<()> {
        let appearance = &self.appearance;
        if !(appearance.line_width.is_finite() && appearance.line_width > 0.0) {
            return Err(Self::invalid(format!(
                "line_width must be positive, got {}",
                appearance.line_width
            )));
        }
        if !(appearance.spinner_line_spacing.is_finite() && appearance.spinner_line_spacing >= 0.0)
        {
            return Err(Self::invalid(format!(
                "spinner_line_spacing must be non-negative, got {}",
                appearance.spinner_line_spacing
            )));
        }
        if !(appearance.spinner_padding.is_finite() && appearance.spinner_padding >= 0.0) {
            return Err(Self::invalid(format!(
                "spinner_padding must be non-negative, got {}",
                appearance.spinner_padding
            )));
        }

        let timing = &self.timing;
        if timing.long_press_delay.is_zero() {
            return Err(Self::invalid(
                "long_press_delay must be positive".to_string(),
            ));
        }
        if timing.min_record_duration.is_zero() {
            return Err(Self::invalid(
                "min_record_duration must be positive".to_string(),
            ));
        }
        if timing.min_record_duration >= timing.max_record_duration {
            return Err(Self::invalid(format!(
                "min_record_duration ({:?}) must be below max_record_duration ({:?})",
                timing.min_record_duration, timing.max_record_duration
            )));
        }

        Ok(())
    }

    /// Load configuration from the default path, creating it if missing.
    ///
    /// Note: this does NOT validate the values. [`crate::CameraButton::new`]
    /// validates on construction, so a hand-edited file is rejected at the
    /// point the widget is built rather than at load time.
    #[track_caller]
    #[instrument]
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            Self::create_default()
        }
    }

    /// Load configuration from an explicit TOML file.
    #[track_caller]
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ButtonError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: ButtonConfig =
            toml::from_str(&contents).map_err(|e| ButtonError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Save configuration to the default path.
    #[track_caller]
    #[instrument]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path using the atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| ButtonError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| ButtonError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| ButtonError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| ButtonError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| ButtonError::ConfigError {
            reason: format!("Failed to move config into place: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved");

        Ok(())
    }

    /// Cross-platform path of the default configuration file.
    #[track_caller]
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("", "", "camera-button").ok_or_else(|| ButtonError::ConfigError {
                reason: "Failed to determine config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default() -> Result<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    #[track_caller]
    fn invalid(reason: String) -> ButtonError {
        ButtonError::ConfigError {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
