//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::wheel::{DragRelease, WheelSettings, DEFAULT_DRAG_THRESHOLD};

/// Name of the per-user configuration directory.
const CONFIG_DIR_NAME: &str = "ColorWheel";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Palette JSON file; the built-in palette is used when unset
    #[serde(default)]
    pub palette: Option<PathBuf>,
}

/// Wheel geometry and pointer handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Circle radius in pixels for the placement table
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Pointer movement in pixels that turns a click into a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f64,
    /// Whether a drag's rotation is kept after release
    #[serde(default)]
    pub drag_release: DragRelease,
    /// Pixels per terminal column when converting mouse positions
    #[serde(default = "default_pointer_scale")]
    pub pointer_scale: f64,
}

/// Default wheel radius (400 px)
fn default_radius() -> f64 {
    400.0
}

fn default_drag_threshold() -> f64 {
    DEFAULT_DRAG_THRESHOLD
}

/// Default terminal cell width in pixels
fn default_pointer_scale() -> f64 {
    8.0
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            drag_threshold: default_drag_threshold(),
            drag_release: DragRelease::default(),
            pointer_scale: default_pointer_scale(),
        }
    }
}

impl WheelConfig {
    /// Settings handed to `WheelState::new`.
    #[must_use]
    pub const fn settings(&self) -> WheelSettings {
        WheelSettings {
            drag_threshold: self.drag_threshold,
            drag_release: self.drag_release,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ColorWheel/config.toml`
/// - macOS: `~/Library/Application Support/ColorWheel/config.toml`
/// - Windows: `%APPDATA%\ColorWheel\config.toml`
///
/// Every section and field is optional in the file; missing values take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Wheel behavior
    #[serde(default)]
    pub wheel: WheelConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/ColorWheel/`
    /// - macOS: `~/Library/Application Support/ColorWheel/`
    /// - Windows: `%APPDATA%\ColorWheel\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads and validates configuration from `path`.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path)
            .context(format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - radius, drag threshold and pointer scale are positive and finite
    /// - palette file exists (if set)
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("wheel.radius", self.wheel.radius),
            ("wheel.drag_threshold", self.wheel.drag_threshold),
            ("wheel.pointer_scale", self.wheel.pointer_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("{name} must be a positive number, got {value}");
            }
        }

        if let Some(palette) = &self.paths.palette {
            if !palette.exists() {
                anyhow::bail!("Palette file does not exist: {}", palette.display());
            }
        }

        Ok(())
    }
}
