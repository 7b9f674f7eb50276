//! Application configuration.
//!
//! Layout constants are configuration on explicitly constructed engines,
//! never global state. The defaults are the standard drawing constants the
//! original scheme sheets were dimensioned with; a TOML file can override
//! any of them.

use std::{fs, path::Path};

use serde::Deserialize;

use armature_core::geometry::Insets;

use crate::error::{ArmatureError, ConfigError};

/// Application configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section
    #[serde(default)]
    pub layout: LayoutConstants,
}

/// Fixed drawing constants for scheme layout, in millimeters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConstants {
    /// Width of a component box
    pub box_width: f32,
    /// Height of a component box
    pub box_height: f32,
    /// Horizontal gap between boxes in a row
    pub horizontal_spacing: f32,
    /// Vertical gap between wrapped rows within a level
    pub vertical_spacing: f32,
    /// Vertical gap between hierarchy levels
    pub level_spacing: f32,
    /// Top sheet margin
    pub margin_top: f32,
    /// Left sheet margin
    pub margin_left: f32,
    /// Right sheet margin
    pub margin_right: f32,
    /// Bottom sheet margin
    pub margin_bottom: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            box_width: 60.0,
            box_height: 20.0,
            horizontal_spacing: 20.0,
            vertical_spacing: 40.0,
            level_spacing: 80.0,
            margin_top: 40.0,
            margin_left: 40.0,
            margin_right: 40.0,
            margin_bottom: 40.0,
        }
    }
}

impl LayoutConstants {
    /// The four sheet margins as insets.
    pub fn margins(&self) -> Insets {
        Insets::new(
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
        )
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArmatureError> {
        let path = path.as_ref();

        // Check if file exists
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }

        // Read file content
        let content = fs::read_to_string(path)?;

        // Parse TOML content directly using serde
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .map_err(ArmatureError::Config)?;

        Ok(config)
    }
}
