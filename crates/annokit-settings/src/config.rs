//! Configuration and settings management for Annokit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Shape styles (stroke and fill per shape kind)
//! - Handle colors
//! - Blank canvas fallback
//! - Export naming and formatting

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Color used to fill newly drawn shapes so that their interior is clickable.
pub const DEFAULT_NEW_SHAPE_FILL: &str = "#F0F0F0";

/// Stroke and fill of a drawn shape.
///
/// An empty `fill_color` means the shape is not filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    #[serde(default)]
    pub fill_color: String,
}

impl ShapeStyle {
    pub fn new(stroke_color: impl Into<String>, stroke_width: f64, fill_color: impl Into<String>) -> Self {
        Self {
            stroke_color: stroke_color.into(),
            stroke_width,
            fill_color: fill_color.into(),
        }
    }

    /// Returns true when the style carries a fill.
    pub fn has_fill(&self) -> bool {
        !self.fill_color.is_empty()
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new("white", 2.0, "")
    }
}

/// Per-kind styles applied to newly created shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    pub rectangle: ShapeStyle,
    pub circle: ShapeStyle,
    pub ellipse: ShapeStyle,
    pub polygon: ShapeStyle,
    /// Polylines are never filled; any fill configured here is ignored.
    pub polyline: ShapeStyle,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            rectangle: ShapeStyle::new("white", 2.0, DEFAULT_NEW_SHAPE_FILL),
            circle: ShapeStyle::new("yellow", 2.0, DEFAULT_NEW_SHAPE_FILL),
            ellipse: ShapeStyle::new("purple", 2.0, DEFAULT_NEW_SHAPE_FILL),
            polygon: ShapeStyle::new("cyan", 2.0, DEFAULT_NEW_SHAPE_FILL),
            polyline: ShapeStyle::new("orange", 2.0, ""),
        }
    }
}

/// Handle colors used by renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleSettings {
    pub normal: String,
    pub active: String,
    pub rotation: String,
    pub polygon_vertex: String,
    pub polyline_vertex: String,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            normal: "red".to_string(),
            active: "blue".to_string(),
            rotation: "green".to_string(),
            polygon_vertex: "magenta".to_string(),
            polyline_vertex: "lime".to_string(),
        }
    }
}

/// Canvas used when no background image can be loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    pub blank_width: u32,
    pub blank_height: u32,
    pub background: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            blank_width: 800,
            blank_height: 600,
            background: "black".to_string(),
        }
    }
}

/// Export naming and formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Appended to the image file stem to build the export filename
    pub file_suffix: String,
    /// Filename used when annotating a blank canvas
    pub blank_filename: String,
    /// Spaces per indentation level in the written JSON
    pub indent: usize,
    /// Emit a normalized `[cx, cy, w, h]` bounding box per record
    #[serde(default)]
    pub include_normalized_bbox: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_suffix: "_annotations.json".to_string(),
            blank_filename: "blank_image_annotations.json".to_string(),
            indent: 4,
            include_normalized_bbox: false,
        }
    }
}

/// Complete annotator configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub styles: StyleSettings,
    #[serde(default)]
    pub handles: HandleSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file: `<config_dir>/annokit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("annokit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let styles = [
            ("rectangle", &self.styles.rectangle),
            ("circle", &self.styles.circle),
            ("ellipse", &self.styles.ellipse),
            ("polygon", &self.styles.polygon),
            ("polyline", &self.styles.polyline),
        ];
        for (name, style) in styles {
            if !(style.stroke_width.is_finite() && style.stroke_width > 0.0) {
                return Err(SettingsError::InvalidSetting {
                    key: format!("styles.{}.stroke_width", name),
                    reason: "must be positive".to_string(),
                });
            }
        }

        if self.canvas.blank_width == 0 || self.canvas.blank_height == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "canvas".to_string(),
                reason: "blank canvas dimensions must be > 0".to_string(),
            });
        }

        if self.export.file_suffix.is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "export.file_suffix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.export.blank_filename.is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "export.blank_filename".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
