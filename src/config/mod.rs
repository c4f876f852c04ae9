// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! it to a `toast.toml` file.
//!
//! Every field is optional in the file; missing fields take the values from
//! [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Position};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load("MyApp").unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Position::Top;
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("toast.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.position, Position::Top);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";

/// Vertical anchor of the toast on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    #[default]
    Bottom,
}

/// Tint of the translucent surface behind the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurType {
    Light,
    #[default]
    Dark,
    /// Follows the light/dark variant of the active theme.
    Default,
}

/// Safe-area offsets applied on the anchored edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    /// Returns the inset for the given anchor.
    #[must_use]
    pub fn for_position(&self, position: Position) -> f32 {
        match position {
            Position::Top => self.top,
            Position::Bottom => self.bottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Default display duration in milliseconds.
    pub duration_ms: u64,
    /// Pending toasts kept before the oldest are dropped.
    pub max_queue_size: usize,
    /// Gap between two consecutive toasts in milliseconds.
    pub animation_duration_ms: u64,
    pub blur_intensity: f32,
    pub blur_type: BlurType,
    pub position: Position,
    pub insets: Insets,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            max_queue_size: DEFAULT_MAX_QUEUE_SIZE,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            blur_intensity: DEFAULT_BLUR_INTENSITY,
            blur_type: BlurType::default(),
            position: Position::default(),
            insets: Insets::default(),
        }
    }
}

impl ToastConfig {
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[must_use]
    pub fn animation_gap(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Returns a copy with unusable values replaced.
    ///
    /// Durations are kept as given. A queue bound of zero behaves like a
    /// bound of one, so it is raised rather than rejected.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.max_queue_size = self.max_queue_size.max(MIN_MAX_QUEUE_SIZE);
        self.blur_intensity = if self.blur_intensity.is_finite() {
            self.blur_intensity
                .clamp(MIN_BLUR_INTENSITY, MAX_BLUR_INTENSITY)
        } else {
            DEFAULT_BLUR_INTENSITY
        };
        self.insets.top = finite_non_negative(self.insets.top);
        self.insets.bottom = finite_non_negative(self.insets.bottom);
        self
    }
}

fn finite_non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn get_default_config_path(app_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(app_name);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration stored under the user config directory of
/// `app_name`, or the defaults if no file exists yet.
pub fn load(app_name: &str) -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path(app_name) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig, app_name: &str) -> Result<()> {
    if let Some(path) = get_default_config_path(app_name) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str::<ToastConfig>(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "invalid toast config, using defaults");
        ToastConfig::default()
    });
    Ok(config.validated())
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
