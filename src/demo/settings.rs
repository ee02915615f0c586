//! Demo settings persistence
//!
//! Stores the styled slider's configuration and last value as JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use value_slider::{Style, ValueLabel, color};

/// Demo application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Last value of the basic slider
    #[serde(default)]
    pub basic_value: f64,
    /// The styled slider
    #[serde(default)]
    pub styled: StyledSlider,
}

/// Configuration of the styled slider; colors are hex strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledSlider {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// printf-style label format
    pub format: String,
    pub min_track_color: String,
    pub max_track_color: String,
    pub thumb_color: String,
    pub thumb_size: f32,
    pub label_color: String,
    #[serde(default)]
    pub label_hidden: bool,
    /// Explicit track width, capped by the window width
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub bar_height: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            basic_value: 0.0,
            styled: StyledSlider::default(),
        }
    }
}

impl Default for StyledSlider {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: -5.0,
            max: 5.0,
            format: "%.1f".to_string(),
            min_track_color: "#ff2d55".to_string(),
            max_track_color: "#4545454d".to_string(),
            thumb_color: "#ffffff".to_string(),
            thumb_size: 24.0,
            label_color: "#1a1a1a".to_string(),
            label_hidden: false,
            width: Some(360.0),
            bar_height: Some(6.0),
        }
    }
}

impl StyledSlider {
    /// Build the slider style; malformed colors come out white
    pub fn style(&self) -> Style {
        let label = ValueLabel::default()
            .format(&self.format)
            .color(color::from_hex(&self.label_color, None))
            .hidden(self.label_hidden);

        Style {
            min_track_color: color::from_hex(&self.min_track_color, None),
            max_track_color: color::from_hex(&self.max_track_color, None),
            thumb_color: color::from_hex(&self.thumb_color, None),
            thumb_size: self.thumb_size,
            width: self.width,
            bar_height: self.bar_height.unwrap_or(Style::default().bar_height),
            label,
            ..Style::default()
        }
    }
}

impl Settings {
    /// `settings.json` in the platform config directory
    fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "value-slider", "ValueSlider")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load the saved settings; a missing or unreadable file gives defaults
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        Self::read(&path).unwrap_or_else(|e| {
            tracing::debug!("Using default settings ({:?}): {}", path, e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::file_path().ok_or(SettingsError::NoConfigDir)?;
        self.write(&path)
    }

    fn read(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(SettingsError::io)?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    fn write(&self, path: &Path) -> Result<(), SettingsError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SettingsError::io)?;
        }
        std::fs::write(path, content).map_err(SettingsError::io)
    }
}

/// Errors from reading or writing the settings file
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("no config directory on this platform")]
    NoConfigDir,
    #[error("settings file I/O failed: {0}")]
    Io(String),
    #[error("settings file is not valid JSON: {0}")]
    Parse(String),
}

impl SettingsError {
    fn io(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
